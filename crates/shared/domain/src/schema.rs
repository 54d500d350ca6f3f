//! The ordered feature columns the price model was trained on.
//!
//! Everything here is generated from the single `feature_schema!` table at
//! the bottom of this file: the [`Country`] enum, the per-segment column
//! arrays, and [`FEATURE_COLUMNS`]. Array lengths are part of the types, so a
//! country added to the table cannot leave the record layout behind.
//!
//! The table must stay in lock-step with the model artifact: retraining with
//! different columns means editing this table.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// Prefix shared by every column of the country segment.
pub const COUNTRY_PREFIX: &str = "Country_";

macro_rules! feature_schema {
    (
        temporal: [$($temporal:literal),+ $(,)?],
        countries: [$($country:ident => $label:tt),+ $(,)?],
        aggregate: [$($aggregate:literal),+ $(,)?] $(,)?
    ) => {
        /// A country the model knows about. Exactly one is selected per invoice.
        ///
        /// `Display`/`FromStr` use the human-readable label (`"United Kingdom"`).
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
            Serialize, Deserialize, Display, EnumIter, EnumString,
        )]
        pub enum Country {
            $(
                #[strum(serialize = $label)]
                #[serde(rename = $label)]
                $country,
            )+
        }

        impl Country {
            /// The schema column carrying this country's one-hot indicator.
            #[must_use]
            pub const fn column(self) -> &'static str {
                match self {
                    $(Self::$country => concat!("Country_", $label),)+
                }
            }

            /// The label shown to users.
            #[must_use]
            pub const fn label(self) -> &'static str {
                match self {
                    $(Self::$country => $label,)+
                }
            }
        }

        /// `InvoiceMonth, InvoiceYear, Day, Hour, Weekday`.
        pub const TEMPORAL_COLUMNS: [&str; TEMPORAL_COUNT] = [$($temporal),+];

        /// One indicator column per [`Country`], in declaration order.
        pub const COUNTRY_COLUMNS: [&str; COUNTRY_COUNT] = [$(concat!("Country_", $label)),+];

        /// Quantity and price aggregates.
        pub const AGGREGATE_COLUMNS: [&str; AGGREGATE_COUNT] = [$($aggregate),+];

        /// Every column, in the order the model consumes them.
        pub const FEATURE_COLUMNS: [&str; FEATURE_COUNT] =
            [$($temporal,)+ $(concat!("Country_", $label),)+ $($aggregate),+];

        pub const TEMPORAL_COUNT: usize = [$($temporal),+].len();
        pub const COUNTRY_COUNT: usize = [$($label),+].len();
        pub const AGGREGATE_COUNT: usize = [$($aggregate),+].len();
    };
}

/// Total number of columns in a feature record.
pub const FEATURE_COUNT: usize = TEMPORAL_COUNT + COUNTRY_COUNT + AGGREGATE_COUNT;

/// Index of the first country column within [`FEATURE_COLUMNS`].
pub const COUNTRY_OFFSET: usize = TEMPORAL_COUNT;

/// Index of the first aggregate column within [`FEATURE_COLUMNS`].
pub const AGGREGATE_OFFSET: usize = TEMPORAL_COUNT + COUNTRY_COUNT;

feature_schema! {
    temporal: ["InvoiceMonth", "InvoiceYear", "Day", "Hour", "Weekday"],
    countries: [
        Australia => "Australia",
        Austria => "Austria",
        Bahrain => "Bahrain",
        Belgium => "Belgium",
        Brazil => "Brazil",
        Canada => "Canada",
        ChannelIslands => "Channel Islands",
        Cyprus => "Cyprus",
        CzechRepublic => "Czech Republic",
        Denmark => "Denmark",
        Eire => "EIRE",
        EuropeanCommunity => "European Community",
        Finland => "Finland",
        France => "France",
        Germany => "Germany",
        Greece => "Greece",
        HongKong => "Hong Kong",
        Iceland => "Iceland",
        Israel => "Israel",
        Italy => "Italy",
        Japan => "Japan",
        Lebanon => "Lebanon",
        Lithuania => "Lithuania",
        Malta => "Malta",
        Netherlands => "Netherlands",
        Norway => "Norway",
        Poland => "Poland",
        Portugal => "Portugal",
        Rsa => "RSA",
        SaudiArabia => "Saudi Arabia",
        Singapore => "Singapore",
        Spain => "Spain",
        Sweden => "Sweden",
        Switzerland => "Switzerland",
        Usa => "USA",
        UnitedArabEmirates => "United Arab Emirates",
        UnitedKingdom => "United Kingdom",
        Unspecified => "Unspecified",
    ],
    aggregate: ["Quantity", "UnitPrice", "Total Price", "TotalProductQuantity", "TotalInvoiceQuantity"],
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn segment_sizes() {
        assert_eq!(TEMPORAL_COUNT, 5);
        assert_eq!(COUNTRY_COUNT, 38);
        assert_eq!(AGGREGATE_COUNT, 5);
        assert_eq!(FEATURE_COUNT, 48);
        assert_eq!(Country::iter().count(), COUNTRY_COUNT);
    }

    #[test]
    fn feature_columns_concatenate_segments_in_order() {
        let joined: Vec<&str> = TEMPORAL_COLUMNS
            .iter()
            .chain(COUNTRY_COLUMNS.iter())
            .chain(AGGREGATE_COLUMNS.iter())
            .copied()
            .collect();
        assert_eq!(joined, FEATURE_COLUMNS);
        assert_eq!(FEATURE_COLUMNS[COUNTRY_OFFSET], "Country_Australia");
        assert_eq!(FEATURE_COLUMNS[AGGREGATE_OFFSET], "Quantity");
        assert_eq!(FEATURE_COLUMNS[FEATURE_COUNT - 1], "TotalInvoiceQuantity");
    }

    #[test]
    fn country_columns_follow_enum_order() {
        for (country, column) in Country::iter().zip(COUNTRY_COLUMNS) {
            assert_eq!(country.column(), column);
            assert!(column.starts_with(COUNTRY_PREFIX));
        }
    }

    #[test]
    fn labels_round_trip_through_strum() {
        for country in Country::iter() {
            assert_eq!(country.to_string(), country.label());
            assert_eq!(Country::from_str(country.label()), Ok(country));
        }
        assert!(Country::from_str("Atlantis").is_err());
    }

    #[test]
    fn serde_uses_labels() {
        let json = serde_json::to_string(&Country::UnitedKingdom).unwrap();
        assert_eq!(json, "\"United Kingdom\"");
        let back: Country = serde_json::from_str("\"EIRE\"").unwrap();
        assert_eq!(back, Country::Eire);
    }
}
