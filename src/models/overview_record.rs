use crate::constants::{FIELD_LOCATION, FIELD_SUBMARKET};
use crate::types::{FieldValue, OverviewFields, ReferenceRow, SquareFeet};

/// Finished facts for one property report, ready to be projected onto CSV columns.
#[derive(Debug, Clone, PartialEq)]
pub struct OverviewRecord {
    fields: OverviewFields,
    property_type: String,
    building_area: SquareFeet,
    vacant_square_feet: SquareFeet,
}

impl OverviewRecord {
    pub fn new(
        fields: OverviewFields,
        property_type: String,
        building_area: SquareFeet,
        vacant_square_feet: SquareFeet,
    ) -> Self {
        Self {
            fields,
            property_type,
            building_area,
            vacant_square_feet,
        }
    }

    /// Value of a field; `None` when the field is absent or null.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).and_then(|value| value.as_deref())
    }

    pub fn set(&mut self, field: &str, value: FieldValue) {
        self.fields.insert(field.to_string(), value);
    }

    pub fn fields(&self) -> &OverviewFields {
        &self.fields
    }

    /// Property type as written in the report (e.g. `Industrial Warehouse`); may be empty.
    pub fn property_type(&self) -> &str {
        &self.property_type
    }

    /// Building area in square feet; always greater than zero.
    pub fn building_area(&self) -> SquareFeet {
        self.building_area
    }

    pub fn vacant_square_feet(&self) -> SquareFeet {
        self.vacant_square_feet
    }

    pub fn submarket(&self) -> &str {
        self.get(FIELD_SUBMARKET).unwrap_or("")
    }

    /// `"<state> USA : <submarket>"`
    pub fn location(&self) -> &str {
        self.get(FIELD_LOCATION).unwrap_or("")
    }

    /// Merges a reference row using its values as defaults: fields already set
    /// on the record are kept, absent or null fields take the reference value.
    pub fn merge_reference_defaults(&mut self, row: &ReferenceRow) {
        for (column, value) in row {
            let is_set = matches!(self.fields.get(column), Some(Some(_)));

            if !is_set {
                self.fields.insert(column.clone(), Some(value.clone()));
            }
        }
    }

    /// Values in the given column order; absent or null fields become empty strings.
    pub fn project(&self, columns: &[&str]) -> Vec<String> {
        columns
            .iter()
            .map(|column| self.get(column).unwrap_or("").to_string())
            .collect()
    }
}
