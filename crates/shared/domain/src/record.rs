use crate::schema::{
    AGGREGATE_OFFSET, COUNTRY_OFFSET, Country, FEATURE_COLUMNS, FEATURE_COUNT,
};
use serde::ser::{Serialize, SerializeMap, Serializer};
use strum::IntoEnumIterator;

/// One row of model input: a value for every column of [`FEATURE_COLUMNS`].
///
/// The value array has the schema's length by type, so column/value count
/// mismatches cannot be constructed. Built only by
/// [`InvoiceFeatures::to_record`](crate::invoice::InvoiceFeatures::to_record).
///
/// Serializes as a JSON object keyed by column name, in schema order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureRecord {
    values: [f64; FEATURE_COUNT],
}

impl FeatureRecord {
    pub(crate) const fn from_values(values: [f64; FEATURE_COUNT]) -> Self {
        Self { values }
    }

    #[must_use]
    pub const fn columns(&self) -> &'static [&'static str; FEATURE_COUNT] {
        &FEATURE_COLUMNS
    }

    #[must_use]
    pub const fn values(&self) -> &[f64; FEATURE_COUNT] {
        &self.values
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        FEATURE_COUNT
    }

    /// Value of a column by exact name.
    #[must_use]
    pub fn get(&self, column: &str) -> Option<f64> {
        FEATURE_COLUMNS.iter().position(|c| *c == column).map(|i| self.values[i])
    }

    /// `(column, value)` pairs in schema order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        FEATURE_COLUMNS.iter().copied().zip(self.values.iter().copied())
    }

    #[must_use]
    pub fn temporal(&self) -> &[f64] {
        &self.values[..COUNTRY_OFFSET]
    }

    /// The one-hot country indicators.
    #[must_use]
    pub fn countries(&self) -> &[f64] {
        &self.values[COUNTRY_OFFSET..AGGREGATE_OFFSET]
    }

    #[must_use]
    pub fn aggregates(&self) -> &[f64] {
        &self.values[AGGREGATE_OFFSET..]
    }

    /// The country whose indicator is set, if exactly one is.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn selected_country(&self) -> Option<Country> {
        let mut hot = Country::iter().zip(self.countries()).filter(|(_, v)| **v == 1.0);
        match (hot.next(), hot.next()) {
            (Some((country, _)), None) => Some(country),
            _ => None,
        }
    }
}

impl Serialize for FeatureRecord {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(FEATURE_COUNT))?;
        for (column, value) in self.iter() {
            map.serialize_entry(column, &value)?;
        }
        map.end()
    }
}
