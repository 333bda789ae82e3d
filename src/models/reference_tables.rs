use crate::models::ReferenceIndex;
use crate::Error;
use log::{info, warn};
use std::collections::HashMap;
use std::fmt;

/// Which reference dataset serves a property type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PropertyBucket {
    Office,
    Retail,
    Industrial,
}

impl PropertyBucket {
    pub const ALL: [PropertyBucket; 3] = [
        PropertyBucket::Office,
        PropertyBucket::Retail,
        PropertyBucket::Industrial,
    ];

    /// Chooses a bucket from the first word of a report's property type
    /// (`Industrial Warehouse` -> `Industrial`). Flex space shares the industrial table.
    pub fn from_property_type(property_type: &str) -> Option<Self> {
        match property_type.split(' ').next()? {
            "Office" => Some(PropertyBucket::Office),
            "Retail" => Some(PropertyBucket::Retail),
            "Industrial" | "Flex" => Some(PropertyBucket::Industrial),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PropertyBucket::Office => "office",
            PropertyBucket::Retail => "retail",
            PropertyBucket::Industrial => "industrial",
        }
    }
}

impl fmt::Display for PropertyBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// File locations of the three reference datasets.
pub struct ReferenceTablePaths<'a> {
    pub office: &'a str,
    pub retail: &'a str,
    pub industrial: &'a str,
}

impl<'a> ReferenceTablePaths<'a> {
    pub fn path_for(&self, bucket: PropertyBucket) -> &'a str {
        match bucket {
            PropertyBucket::Office => self.office,
            PropertyBucket::Retail => self.retail,
            PropertyBucket::Industrial => self.industrial,
        }
    }
}

/// One reference index per property bucket, loaded once per batch.
///
/// A table which failed to load is remembered together with the reason, so
/// each document needing it fails with the same explanation.
#[derive(Default)]
pub struct ReferenceTables {
    tables: HashMap<PropertyBucket, Result<ReferenceIndex, String>>,
}

impl ReferenceTables {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(paths: &ReferenceTablePaths, key_column: &str) -> Self {
        let mut reference_tables = Self::new();

        for bucket in PropertyBucket::ALL {
            let path = paths.path_for(bucket);

            let loaded = ReferenceIndex::from_path(path, key_column).map_err(|err| {
                warn!("Could not load {} reference table {}: {}", bucket, path, err);
                err.to_string()
            });

            reference_tables.tables.insert(bucket, loaded);
        }

        info!(
            "Loaded {} of {} reference tables",
            reference_tables.tables.values().filter(|t| t.is_ok()).count(),
            PropertyBucket::ALL.len()
        );

        reference_tables
    }

    pub fn with_index(mut self, bucket: PropertyBucket, index: ReferenceIndex) -> Self {
        self.tables.insert(bucket, Ok(index));
        self
    }

    pub fn get(&self, bucket: PropertyBucket) -> Result<&ReferenceIndex, Error> {
        match self.tables.get(&bucket) {
            Some(Ok(index)) => Ok(index),
            Some(Err(reason)) => Err(Error::ReferenceTableUnavailable {
                bucket: bucket.to_string(),
                reason: reason.clone(),
            }),
            None => Err(Error::ReferenceTableUnavailable {
                bucket: bucket.to_string(),
                reason: "not loaded".to_string(),
            }),
        }
    }
}
