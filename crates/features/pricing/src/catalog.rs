//! Human-facing country labels for the schema's country columns.

use crate::error::PricingError;
use fxhash::FxHashMap;
use invp_domain::Country;
use invp_domain::schema::{COUNTRY_COLUMNS, COUNTRY_PREFIX};
use strum::IntoEnumIterator;

/// Bidirectional column ↔ label mapping, built once from the country segment.
///
/// ```rust
/// use invp_pricing::CountryCatalog;
///
/// let catalog = CountryCatalog::new();
/// assert_eq!(catalog.label_for("Country_United Kingdom").unwrap(), "United Kingdom");
/// assert_eq!(catalog.column_for("EIRE").unwrap(), "Country_EIRE");
/// ```
#[derive(Debug, Clone)]
pub struct CountryCatalog {
    labels: FxHashMap<&'static str, String>,
    columns: FxHashMap<String, &'static str>,
}

impl CountryCatalog {
    #[must_use]
    pub fn new() -> Self {
        let labels: FxHashMap<&'static str, String> =
            COUNTRY_COLUMNS.iter().map(|column| (*column, derive_label(column))).collect();
        let columns = labels.iter().map(|(column, label)| (label.clone(), *column)).collect();

        Self { labels, columns }
    }

    /// Display label of a country column.
    ///
    /// # Errors
    /// [`PricingError::UnknownColumn`] if `column` is not in the country segment.
    pub fn label_for(&self, column: &str) -> Result<&str, PricingError> {
        self.labels
            .get(column)
            .map(String::as_str)
            .ok_or_else(|| PricingError::UnknownColumn { column: column.to_owned(), context: None })
    }

    /// Country column for a display label.
    ///
    /// # Errors
    /// [`PricingError::UnknownCountry`] if `label` was not produced by this catalog.
    pub fn column_for(&self, label: &str) -> Result<&'static str, PricingError> {
        self.columns
            .get(label)
            .copied()
            .ok_or_else(|| PricingError::UnknownCountry { label: label.to_owned(), context: None })
    }

    /// Resolves a display label to the typed country.
    ///
    /// # Errors
    /// [`PricingError::UnknownCountry`] if `label` is not a catalog label.
    pub fn country_for(&self, label: &str) -> Result<Country, PricingError> {
        let column = self.column_for(label)?;
        Country::iter()
            .find(|country| country.column() == column)
            .ok_or_else(|| PricingError::UnknownCountry { label: label.to_owned(), context: None })
    }

    /// Selectable labels in schema order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        COUNTRY_COLUMNS.iter().filter_map(|column| self.labels.get(column)).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }
}

impl Default for CountryCatalog {
    fn default() -> Self {
        Self::new()
    }
}

/// `Country_United_Kingdom` and `Country_United Kingdom` both become `United Kingdom`.
fn derive_label(column: &str) -> String {
    column.strip_prefix(COUNTRY_PREFIX).unwrap_or(column).replace('_', " ")
}
