#[path = "../test_utils/lib.rs"]
mod test_utils;

use std::collections::BTreeMap;
use submarket_sniffer::models::SkipReason;
use submarket_sniffer::types::OverviewFields;
use submarket_sniffer::{
    Error, MatchClass, OverviewRecord, PropertyBucket, ReconcileOutcome, ReconcilerConfig,
    RecordReconciler, ReferenceIndex, ReferenceRow, ReferenceTables, DEFAULT_RECONCILER_CONFIG,
};
use test_utils::constants::GEOGRAPHY_COLUMN;
use test_utils::load_test_reference_tables;

fn office_record(state: &str, submarket: &str) -> OverviewRecord {
    record_for(state, submarket, "Office")
}

fn record_for(state: &str, submarket: &str, property_type: &str) -> OverviewRecord {
    let mut fields: OverviewFields = BTreeMap::new();
    fields.insert("address".into(), Some("100 Main St".into()));
    fields.insert("state".into(), Some(state.into()));
    fields.insert("submarket".into(), Some(submarket.into()));
    fields.insert(
        "location".into(),
        Some(format!("{} USA : {}", state, submarket)),
    );

    OverviewRecord::new(fields, property_type.to_string(), 100_000, 15_000)
}

fn index_from(csv: &str) -> ReferenceIndex {
    ReferenceIndex::from_csv_str(csv, GEOGRAPHY_COLUMN).unwrap()
}

#[cfg(test)]
mod find_best_match_tests {
    use super::*;

    #[test]
    fn test_exact_key_beats_contained_key_in_either_order() {
        let reconciler = RecordReconciler::new(DEFAULT_RECONCILER_CONFIG);

        for csv in [
            "Geography Name\nA - TX USA - North\nA - TX USA - North Dallas\n",
            "Geography Name\nA - TX USA - North Dallas\nA - TX USA - North\n",
        ] {
            let index = index_from(csv);
            let best = reconciler
                .find_best_match("TX USA : North Dallas", &index)
                .unwrap();

            assert_eq!(best.submarket(), "North Dallas");
            assert_eq!(best.score.class, MatchClass::Exact);
        }
    }

    #[test]
    fn test_key_within_query_beats_query_within_key() {
        let reconciler = RecordReconciler::new(DEFAULT_RECONCILER_CONFIG);
        let index = index_from("Geography Name\nA - TX USA - Far North Dallas Tollway\nA - TX USA - Dallas\n");

        let best = reconciler
            .find_best_match("TX USA : North Dallas", &index)
            .unwrap();

        assert_eq!(best.submarket(), "Dallas");
        assert_eq!(best.score.class, MatchClass::KeyWithinQuery);
    }

    #[test]
    fn test_longer_key_wins_within_a_class() {
        let reconciler = RecordReconciler::new(DEFAULT_RECONCILER_CONFIG);
        let index = index_from("Geography Name\nA - TX USA - Dallas\nA - TX USA - North Dallas\n");

        let best = reconciler
            .find_best_match("TX USA : Far North Dallas", &index)
            .unwrap();

        assert_eq!(best.submarket(), "North Dallas");
        assert_eq!(best.score.key_length, 12);
    }

    #[test]
    fn test_ties_keep_first_key_seen() {
        let reconciler = RecordReconciler::new(DEFAULT_RECONCILER_CONFIG);
        let index = index_from("Geography Name\nA - TX USA - East\nA - TX USA - West\n");

        let best = reconciler
            .find_best_match("TX USA : West East", &index)
            .unwrap();

        assert_eq!(best.submarket(), "East");
    }

    #[test]
    fn test_region_must_match() {
        let reconciler = RecordReconciler::new(DEFAULT_RECONCILER_CONFIG);
        let index = index_from("Geography Name\nA - OK USA - Downtown\n");

        assert!(reconciler
            .find_best_match("TX USA : Downtown", &index)
            .is_none());
    }

    #[test]
    fn test_malformed_location_has_no_match() {
        let reconciler = RecordReconciler::new(DEFAULT_RECONCILER_CONFIG);
        let index = index_from("Geography Name\nA - TX USA - Downtown\n");

        assert!(reconciler.find_best_match("TX USA Downtown", &index).is_none());
        assert!(reconciler
            .find_best_match("TX USA : Downtown : Extra", &index)
            .is_none());
    }

    #[test]
    fn test_abbreviation_fallback_ranks_below_literal_matches() {
        let config = ReconcilerConfig {
            abbreviation_fallback: true,
            ..*DEFAULT_RECONCILER_CONFIG
        };
        let reconciler = RecordReconciler::new(&config);
        let index = index_from("Geography Name\nA - TX USA - Fort Worth CBD\n");

        let best = reconciler
            .find_best_match("TX USA : Ft Worth Central Business District", &index)
            .unwrap();
        assert_eq!(best.submarket(), "Fort Worth CBD");
        assert_eq!(best.score.class, MatchClass::AbbreviationEquivalent);

        let literal = RecordReconciler::new(DEFAULT_RECONCILER_CONFIG);
        assert!(literal
            .find_best_match("TX USA : Ft Worth Central Business District", &index)
            .is_none());
    }
}

#[cfg(test)]
mod reconcile_tests {
    use super::*;

    #[test]
    fn test_matched_record_takes_reference_statistics() {
        let reconciler = RecordReconciler::new(DEFAULT_RECONCILER_CONFIG);
        let tables = load_test_reference_tables();
        let mut record = office_record("TX", "North Dallas");

        let outcome = reconciler.reconcile(&mut record, &tables).unwrap();

        assert!(matches!(
            outcome,
            ReconcileOutcome::Matched { ref submarket, .. } if submarket == "North Dallas"
        ));
        assert_eq!(record.get("Existing Buildings"), Some("412"));
        assert_eq!(record.get("Inventory SF"), Some("35,123,456"));
        assert_eq!(record.get("Vacancy Rate"), Some("12.4%"));
        assert_eq!(record.get("Net Absorption SF 12 Mo"), Some("(1,500) SF"));
        assert_eq!(record.get("Net Delivered SF 12 Mo"), Some("0 SF"));
        assert_eq!(record.get("Market Asking Rent/SF"), Some("$28.50 PSF"));
    }

    #[test]
    fn test_submarket_is_replaced_by_the_matched_key() {
        let reconciler = RecordReconciler::new(DEFAULT_RECONCILER_CONFIG);
        let tables = load_test_reference_tables();
        let mut record = office_record("TX", "Downtown Houston");

        reconciler.reconcile(&mut record, &tables).unwrap();

        assert_eq!(record.submarket(), "Downtown");
        assert_eq!(record.get("Net Absorption SF 12 Mo"), Some("1,204,331 SF"));
    }

    #[test]
    fn test_decimal_cells_truncate() {
        let reconciler = RecordReconciler::new(DEFAULT_RECONCILER_CONFIG);
        let tables = load_test_reference_tables();
        let mut record = office_record("TX", "Las Colinas Urban Center");

        reconciler.reconcile(&mut record, &tables).unwrap();

        assert_eq!(record.get("Net Absorption SF 12 Mo"), Some("(12,400) SF"));
        assert_eq!(record.get("Net Delivered SF 12 Mo"), Some("318,000 SF"));
    }

    #[test]
    fn test_flex_uses_industrial_table_first_row() {
        let reconciler = RecordReconciler::new(DEFAULT_RECONCILER_CONFIG);
        let tables = load_test_reference_tables();
        let mut record = record_for("TX", "Great Southwest", "Flex R&D");

        reconciler.reconcile(&mut record, &tables).unwrap();

        assert_eq!(record.get("Property Class Name"), Some("Industrial"));
        assert_eq!(record.get("Inventory SF"), Some("98,450,000"));
    }

    #[test]
    fn test_retail_table() {
        let reconciler = RecordReconciler::new(DEFAULT_RECONCILER_CONFIG);
        let tables = load_test_reference_tables();
        let mut record = record_for("AZ", "Scottsdale", "Retail Storefront");

        reconciler.reconcile(&mut record, &tables).unwrap();

        assert_eq!(record.get("Net Absorption SF 12 Mo"), Some("(8,800) SF"));
        assert_eq!(record.get("Net Delivered SF 12 Mo"), Some("5,200 SF"));
    }

    #[test]
    fn test_no_match_leaves_record_unchanged() {
        let reconciler = RecordReconciler::new(DEFAULT_RECONCILER_CONFIG);
        let tables = load_test_reference_tables();
        let mut record = office_record("TX", "Uptown");
        let before = record.clone();

        let outcome = reconciler.reconcile(&mut record, &tables).unwrap();

        assert_eq!(outcome, ReconcileOutcome::NoMatch);
        assert_eq!(record, before);
    }

    #[test]
    fn test_skip_reasons() {
        let reconciler = RecordReconciler::new(DEFAULT_RECONCILER_CONFIG);
        let tables = load_test_reference_tables();

        let mut no_submarket = office_record("TX", "");
        assert_eq!(
            reconciler.reconcile(&mut no_submarket, &tables).unwrap(),
            ReconcileOutcome::Skipped(SkipReason::NoSubmarket)
        );

        let mut no_type = record_for("TX", "North Dallas", "");
        assert_eq!(
            reconciler.reconcile(&mut no_type, &tables).unwrap(),
            ReconcileOutcome::Skipped(SkipReason::NoPropertyType)
        );

        let mut land = record_for("TX", "North Dallas", "Land");
        assert_eq!(
            reconciler.reconcile(&mut land, &tables).unwrap(),
            ReconcileOutcome::Skipped(SkipReason::UnrecognizedPropertyType("Land".into()))
        );
        assert_eq!(land.get("Inventory SF"), None);
    }

    #[test]
    fn test_non_numeric_cell_is_an_error() {
        let reconciler = RecordReconciler::new(DEFAULT_RECONCILER_CONFIG);
        let tables = load_test_reference_tables();
        let mut record = record_for("CA", "Ontario", "Industrial Warehouse");

        let result = reconciler.reconcile(&mut record, &tables);

        assert!(matches!(
            result,
            Err(Error::InvalidNumber { ref column, .. }) if column == "Net Absorption SF 12 Mo"
        ));
    }

    #[test]
    fn test_unavailable_table_is_an_error() {
        let reconciler = RecordReconciler::new(DEFAULT_RECONCILER_CONFIG);
        let tables = ReferenceTables::new().with_index(PropertyBucket::Office, ReferenceIndex::new());
        let mut record = record_for("AZ", "Scottsdale", "Retail");

        let result = reconciler.reconcile(&mut record, &tables);

        assert!(matches!(result, Err(Error::ReferenceTableUnavailable { .. })));
    }
}

#[cfg(test)]
mod apply_reference_row_tests {
    use super::*;

    fn row(cells: &[(&str, &str)]) -> ReferenceRow {
        cells
            .iter()
            .map(|(column, value)| (column.to_string(), value.to_string()))
            .collect()
    }

    #[test]
    fn test_signed_square_feet_formatting() {
        let reconciler = RecordReconciler::new(DEFAULT_RECONCILER_CONFIG);

        let cases = [("-1500", "(1,500) SF"), ("0", "0 SF"), ("", "0 SF"), ("2500", "2,500 SF")];

        for (raw, expected) in cases {
            let mut record = office_record("TX", "North Dallas");
            reconciler
                .apply_reference_row(&mut record, &row(&[("Net Absorption SF 12 Mo", raw)]))
                .unwrap();

            assert_eq!(record.get("Net Absorption SF 12 Mo"), Some(expected), "{:?}", raw);
        }
    }

    #[test]
    fn test_missing_statistics_columns() {
        let reconciler = RecordReconciler::new(DEFAULT_RECONCILER_CONFIG);
        let mut record = office_record("TX", "North Dallas");

        reconciler
            .apply_reference_row(&mut record, &row(&[("Inventory SF", ""), ("Market Asking Rent/SF", "")]))
            .unwrap();

        assert_eq!(record.get("Net Absorption SF 12 Mo"), Some("0 SF"));
        assert_eq!(record.get("Net Delivered SF 12 Mo"), Some("0 SF"));
        assert_eq!(record.get("Inventory SF"), Some(""));
        assert_eq!(record.get("Market Asking Rent/SF"), Some(""));
    }

    #[test]
    fn test_extracted_fields_win_over_reference_fields() {
        let reconciler = RecordReconciler::new(DEFAULT_RECONCILER_CONFIG);
        let mut record = office_record("TX", "North Dallas");
        record.set("Landlord", None);

        reconciler
            .apply_reference_row(
                &mut record,
                &row(&[
                    ("address", "Reference Address"),
                    ("state", "ZZ"),
                    ("Landlord", "Reference Landlord"),
                    ("Vacancy Rate", "9.1%"),
                ]),
            )
            .unwrap();

        assert_eq!(record.get("address"), Some("100 Main St"));
        assert_eq!(record.get("state"), Some("TX"));
        assert_eq!(record.get("Landlord"), Some("Reference Landlord"));
        assert_eq!(record.get("Vacancy Rate"), Some("9.1%"));
    }
}
