#![allow(dead_code, unreachable_pub)]

use invp_domain::{Country, FeatureRecord, InvoiceAmounts, InvoiceFeatures, InvoiceTiming};
use invp_pricing::{LinearModel, ModelFailure, PriceModel};
use parking_lot::Mutex;

/// Returns a fixed price and remembers every record it was asked about.
#[derive(Debug, Default)]
pub struct RecordingModel {
    pub price: f64,
    calls: Mutex<Vec<FeatureRecord>>,
}

impl RecordingModel {
    pub fn new(price: f64) -> Self {
        Self { price, calls: Mutex::default() }
    }

    pub fn calls(&self) -> Vec<FeatureRecord> {
        self.calls.lock().clone()
    }
}

impl PriceModel for RecordingModel {
    fn predict(&self, records: &[FeatureRecord]) -> Result<Vec<f64>, ModelFailure> {
        self.calls.lock().extend_from_slice(records);
        Ok(vec![self.price; records.len()])
    }
}

/// Always fails with the given message.
#[derive(Debug)]
pub struct FailingModel(pub &'static str);

impl PriceModel for FailingModel {
    fn predict(&self, _: &[FeatureRecord]) -> Result<Vec<f64>, ModelFailure> {
        Err(self.0.into())
    }
}

pub fn uk_invoice() -> InvoiceFeatures {
    InvoiceFeatures::builder()
        .timing(InvoiceTiming::builder().month(5).year(2011).day(15).hour(13).weekday(2).build())
        .country(Country::UnitedKingdom)
        .amounts(uk_amounts())
        .build()
}

pub fn uk_amounts() -> InvoiceAmounts {
    InvoiceAmounts::builder()
        .quantity(10.0)
        .unit_price(2.5)
        .total_price(25.0)
        .total_product_quantity(100.0)
        .total_invoice_quantity(5.0)
        .build()
}

/// `10 + 2 * Total Price + 50 * Country_United Kingdom`.
pub fn linear_model() -> LinearModel {
    LinearModel::for_schema(
        "fixture",
        10.0,
        &[("Total Price", 2.0), ("Country_United Kingdom", 50.0)],
    )
    .unwrap()
}
