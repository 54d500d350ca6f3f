use invp_domain::schema::{AGGREGATE_COLUMNS, COUNTRY_COLUMNS, TEMPORAL_COLUMNS};
use invp_domain::{
    Country, FEATURE_COLUMNS, FEATURE_COUNT, InvoiceAmounts, InvoiceFeatures, InvoiceTiming,
};
use proptest::prelude::*;
use strum::IntoEnumIterator;

fn uk_invoice() -> InvoiceFeatures {
    InvoiceFeatures::builder()
        .timing(InvoiceTiming::builder().month(5).year(2011).day(15).hour(13).weekday(2).build())
        .country(Country::UnitedKingdom)
        .amounts(
            InvoiceAmounts::builder()
                .quantity(10.0)
                .unit_price(2.5)
                .total_price(25.0)
                .total_product_quantity(100.0)
                .total_invoice_quantity(5.0)
                .build(),
        )
        .build()
}

fn any_country() -> impl Strategy<Value = Country> {
    prop::sample::select(Country::iter().collect::<Vec<_>>())
}

#[test]
fn uk_scenario_lays_out_every_segment() {
    let record = uk_invoice().to_record();

    assert_eq!(record.len(), FEATURE_COLUMNS.len());
    assert_eq!(record.temporal(), &[5.0, 2011.0, 15.0, 13.0, 2.0]);
    assert_eq!(record.aggregates(), &[10.0, 2.5, 25.0, 100.0, 5.0]);
    assert_eq!(record.get("Country_United Kingdom"), Some(1.0));
    assert_eq!(record.selected_country(), Some(Country::UnitedKingdom));

    for column in COUNTRY_COLUMNS.iter().filter(|c| **c != "Country_United Kingdom") {
        assert_eq!(record.get(column), Some(0.0), "{column} should be cold");
    }
}

#[test]
fn segment_lengths_match_column_lists() {
    let record = uk_invoice().to_record();
    assert_eq!(record.temporal().len(), TEMPORAL_COLUMNS.len());
    assert_eq!(record.countries().len(), COUNTRY_COLUMNS.len());
    assert_eq!(record.aggregates().len(), AGGREGATE_COLUMNS.len());
}

#[test]
fn unknown_column_is_none() {
    assert_eq!(uk_invoice().to_record().get("Country_Atlantis"), None);
}

#[test]
fn serializes_as_ordered_object() {
    let json = serde_json::to_string(&uk_invoice().to_record()).unwrap();
    assert!(json.starts_with(r#"{"InvoiceMonth":5.0,"InvoiceYear":2011.0,"Day":15.0"#));
    assert!(json.contains(r#""Country_United Kingdom":1.0"#));
    assert!(json.ends_with(r#""TotalInvoiceQuantity":5.0}"#));
}

proptest! {
    #[test]
    fn exactly_one_country_is_hot(
        country in any_country(),
        month in 1u8..=12,
        year in 2009u16..=2025,
        quantity in 0.0f64..1.0e6,
        unit_price in 0.0f64..1.0e4,
    ) {
        let mut features = uk_invoice();
        features.country = country;
        features.timing.month = month;
        features.timing.year = year;
        features.amounts.quantity = quantity;
        features.amounts.unit_price = unit_price;

        let record = features.to_record();
        prop_assert_eq!(record.values().len(), FEATURE_COUNT);
        prop_assert_eq!(record.countries().iter().filter(|v| **v == 1.0).count(), 1);
        prop_assert_eq!(record.countries().iter().filter(|v| **v == 0.0).count(), COUNTRY_COLUMNS.len() - 1);
        prop_assert_eq!(record.get(country.column()), Some(1.0));
        prop_assert_eq!(record.selected_country(), Some(country));
    }
}
