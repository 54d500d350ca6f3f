//! Typed invoice inputs as collected from the user.
//!
//! Values stay in named fields until [`InvoiceFeatures::to_record`] lays them
//! out positionally for the model.

use crate::record::FeatureRecord;
use crate::schema::{
    AGGREGATE_COUNT, AGGREGATE_OFFSET, COUNTRY_COLUMNS, COUNTRY_OFFSET, Country, FEATURE_COUNT,
    TEMPORAL_COUNT,
};
use chrono::{Datelike, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use typed_builder::TypedBuilder;

/// When the invoice was issued.
///
/// Ranges are the input collaborator's responsibility; the assembler takes
/// these values as given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TypedBuilder)]
pub struct InvoiceTiming {
    pub month: u8,
    pub year: u16,
    pub day: u8,
    pub hour: u8,
    /// 0 = Monday, 6 = Sunday.
    pub weekday: u8,
}

impl InvoiceTiming {
    pub const MONTHS: RangeInclusive<u8> = 1..=12;
    pub const YEARS: RangeInclusive<u16> = 2009..=2025;
    pub const DAYS: RangeInclusive<u8> = 1..=31;
    pub const HOURS: RangeInclusive<u8> = 0..=23;
    pub const WEEKDAYS: RangeInclusive<u8> = 0..=6;

    /// Derives every temporal field from a timestamp.
    ///
    /// Returns `None` only if the year does not fit the field type (before 0 or after 65535).
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_datetime(at: &NaiveDateTime) -> Option<Self> {
        // chrono bounds month/day/hour/weekday well inside u8.
        Some(Self {
            month: at.month() as u8,
            year: u16::try_from(at.year()).ok()?,
            day: at.day() as u8,
            hour: at.hour() as u8,
            weekday: at.weekday().num_days_from_monday() as u8,
        })
    }

    /// Name of the first field outside its accepted range, if any.
    #[must_use]
    pub fn out_of_range(&self) -> Option<&'static str> {
        if !Self::MONTHS.contains(&self.month) {
            Some("month")
        } else if !Self::YEARS.contains(&self.year) {
            Some("year")
        } else if !Self::DAYS.contains(&self.day) {
            Some("day")
        } else if !Self::HOURS.contains(&self.hour) {
            Some("hour")
        } else if !Self::WEEKDAYS.contains(&self.weekday) {
            Some("weekday")
        } else {
            None
        }
    }

    fn values(&self) -> [f64; TEMPORAL_COUNT] {
        [
            f64::from(self.month),
            f64::from(self.year),
            f64::from(self.day),
            f64::from(self.hour),
            f64::from(self.weekday),
        ]
    }
}

/// Quantity and price figures of the invoice. All caller-constrained to `>= 0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct InvoiceAmounts {
    pub quantity: f64,
    pub unit_price: f64,
    pub total_price: f64,
    pub total_product_quantity: f64,
    pub total_invoice_quantity: f64,
}

impl InvoiceAmounts {
    /// Fields that must not be exactly zero for a prediction to be attempted.
    ///
    /// `total_price` is allowed to be zero.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn zero_fields(&self) -> Vec<&'static str> {
        [
            ("quantity", self.quantity),
            ("unit price", self.unit_price),
            ("total product quantity", self.total_product_quantity),
            ("total invoice quantity", self.total_invoice_quantity),
        ]
        .into_iter()
        .filter(|(_, value)| *value == 0.0)
        .map(|(name, _)| name)
        .collect()
    }

    const fn values(&self) -> [f64; AGGREGATE_COUNT] {
        [
            self.quantity,
            self.unit_price,
            self.total_price,
            self.total_product_quantity,
            self.total_invoice_quantity,
        ]
    }
}

/// One complete form submission.
///
/// ```rust
/// use invp_domain::{Country, InvoiceAmounts, InvoiceFeatures, InvoiceTiming};
///
/// let features = InvoiceFeatures::builder()
///     .timing(InvoiceTiming::builder().month(5).year(2011).day(15).hour(13).weekday(2).build())
///     .country(Country::UnitedKingdom)
///     .amounts(
///         InvoiceAmounts::builder()
///             .quantity(10.0)
///             .unit_price(2.5)
///             .total_price(25.0)
///             .total_product_quantity(100.0)
///             .total_invoice_quantity(5.0)
///             .build(),
///     )
///     .build();
///
/// let record = features.to_record();
/// assert_eq!(record.get("Country_United Kingdom"), Some(1.0));
/// assert_eq!(record.get("InvoiceYear"), Some(2011.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct InvoiceFeatures {
    pub timing: InvoiceTiming,
    pub country: Country,
    pub amounts: InvoiceAmounts,
}

impl InvoiceFeatures {
    /// Lays the inputs out in schema order: temporal, one-hot country, aggregates.
    #[must_use]
    pub fn to_record(&self) -> FeatureRecord {
        let mut values = [0.0; FEATURE_COUNT];
        let (temporal, rest) = values.split_at_mut(COUNTRY_OFFSET);
        let (countries, aggregate) = rest.split_at_mut(AGGREGATE_OFFSET - COUNTRY_OFFSET);

        temporal.copy_from_slice(&self.timing.values());

        let selected = self.country.column();
        for (slot, column) in countries.iter_mut().zip(COUNTRY_COLUMNS) {
            *slot = if column == selected { 1.0 } else { 0.0 };
        }

        aggregate.copy_from_slice(&self.amounts.values());

        FeatureRecord::from_values(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn timing_from_datetime_uses_monday_based_weekday() {
        // 2011-05-18 was a Wednesday.
        let at = NaiveDate::from_ymd_opt(2011, 5, 18).unwrap().and_hms_opt(13, 45, 0).unwrap();
        let timing = InvoiceTiming::from_datetime(&at).unwrap();
        assert_eq!(
            timing,
            InvoiceTiming { month: 5, year: 2011, day: 18, hour: 13, weekday: 2 }
        );
        assert_eq!(timing.out_of_range(), None);
    }

    #[test]
    fn out_of_range_names_first_offending_field() {
        let timing = InvoiceTiming { month: 13, year: 2030, day: 1, hour: 0, weekday: 0 };
        assert_eq!(timing.out_of_range(), Some("month"));

        let timing = InvoiceTiming { month: 1, year: 2030, day: 1, hour: 0, weekday: 0 };
        assert_eq!(timing.out_of_range(), Some("year"));

        let timing = InvoiceTiming { month: 1, year: 2010, day: 1, hour: 0, weekday: 7 };
        assert_eq!(timing.out_of_range(), Some("weekday"));
    }

    #[test]
    fn zero_fields_ignores_total_price() {
        let amounts = InvoiceAmounts {
            quantity: 0.0,
            unit_price: 1.0,
            total_price: 0.0,
            total_product_quantity: 0.0,
            total_invoice_quantity: 2.0,
        };
        assert_eq!(amounts.zero_fields(), vec!["quantity", "total product quantity"]);
    }
}
