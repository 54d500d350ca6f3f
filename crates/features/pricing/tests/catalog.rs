use invp_domain::schema::COUNTRY_COLUMNS;
use invp_pricing::{CountryCatalog, PricingError};
use proptest::prelude::*;

fn any_label() -> impl Strategy<Value = String> {
    let labels: Vec<String> = CountryCatalog::new().labels().map(str::to_owned).collect();
    prop::sample::select(labels)
}

proptest! {
    #[test]
    fn label_column_round_trip(label in any_label()) {
        let catalog = CountryCatalog::new();
        let column = catalog.column_for(&label).unwrap();
        prop_assert_eq!(catalog.label_for(column).unwrap(), label.as_str());
    }
}

#[test]
fn labels_follow_schema_order() {
    let catalog = CountryCatalog::new();
    let labels: Vec<&str> = catalog.labels().collect();

    assert_eq!(labels.len(), COUNTRY_COLUMNS.len());
    assert_eq!(labels.first(), Some(&"Australia"));
    assert_eq!(labels.last(), Some(&"Unspecified"));
    assert!(labels.contains(&"United Kingdom"));
}

#[test]
fn unknown_label_is_a_lookup_error() {
    let catalog = CountryCatalog::new();
    let err = catalog.column_for("Atlantis").unwrap_err();
    assert!(matches!(err, PricingError::UnknownCountry { ref label, .. } if label == "Atlantis"));
    assert_eq!(err.to_string(), "Unknown country: 'Atlantis'");
}

#[test]
fn non_country_column_is_rejected() {
    let catalog = CountryCatalog::new();
    assert!(matches!(
        catalog.label_for("Quantity"),
        Err(PricingError::UnknownColumn { .. })
    ));
}
