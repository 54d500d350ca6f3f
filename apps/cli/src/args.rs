//! # CLI Argument Definitions
//!
//! Every invoice input is range-checked here, before anything reaches the
//! assembler. Countries are accepted only as catalog labels.

use anyhow::{Result, bail};
use chrono::NaiveDateTime;
use clap::{Args, Parser, Subcommand, value_parser};
use invp_kernel::domain::{Country, InvoiceAmounts, InvoiceFeatures, InvoiceTiming};
use invp_pricing::CountryCatalog;
use std::path::PathBuf;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// The main CLI structure parsing command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "invoice-predict")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Predict the total price of a retail invoice")]
pub struct Cli {
    /// Configuration file (TOML, JSON or YAML). Defaults to an optional `predictor.*`
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Model artifact, overriding `model.path` from the configuration
    #[arg(short, long, global = true)]
    pub model: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List the selectable country labels
    Countries {},
    /// List the model's feature columns in order
    Schema {},
    /// Print the feature record for an invoice as JSON, without a model
    Assemble {
        #[command(flatten)]
        invoice: InvoiceArgs,
    },
    /// Predict the total invoice price
    Predict {
        #[command(flatten)]
        invoice: InvoiceArgs,
    },
}

/// One invoice as typed on the command line.
#[derive(Debug, Args)]
pub struct InvoiceArgs {
    /// Issue time as YYYY-MM-DDTHH:MM:SS; replaces the five date/time fields
    #[arg(long, value_parser = parse_timestamp, conflicts_with_all = ["month", "year", "day", "hour", "weekday"])]
    pub at: Option<NaiveDateTime>,

    #[arg(long, required_unless_present = "at", value_parser = value_parser!(u8).range(1..=12))]
    pub month: Option<u8>,

    #[arg(long, required_unless_present = "at", value_parser = value_parser!(u16).range(2009..=2025))]
    pub year: Option<u16>,

    #[arg(long, required_unless_present = "at", value_parser = value_parser!(u8).range(1..=31))]
    pub day: Option<u8>,

    #[arg(long, required_unless_present = "at", value_parser = value_parser!(u8).range(0..=23))]
    pub hour: Option<u8>,

    /// 0 = Monday ... 6 = Sunday
    #[arg(long, required_unless_present = "at", value_parser = value_parser!(u8).range(0..=6))]
    pub weekday: Option<u8>,

    /// Country label, see `invoice-predict countries`
    #[arg(long, value_parser = parse_country)]
    pub country: Country,

    #[arg(long, default_value_t = 0.0, value_parser = parse_amount)]
    pub quantity: f64,

    #[arg(long, default_value_t = 0.0, value_parser = parse_amount)]
    pub unit_price: f64,

    #[arg(long, default_value_t = 0.0, value_parser = parse_amount)]
    pub total_price: f64,

    #[arg(long, default_value_t = 0.0, value_parser = parse_amount)]
    pub total_product_quantity: f64,

    #[arg(long, default_value_t = 0.0, value_parser = parse_amount)]
    pub total_invoice_quantity: f64,
}

impl InvoiceArgs {
    /// Typed features for the assembler.
    ///
    /// # Errors
    /// A `--at` timestamp whose fields fall outside the accepted ranges.
    pub fn to_features(&self) -> Result<InvoiceFeatures> {
        Ok(InvoiceFeatures::builder()
            .timing(self.timing()?)
            .country(self.country)
            .amounts(
                InvoiceAmounts::builder()
                    .quantity(self.quantity)
                    .unit_price(self.unit_price)
                    .total_price(self.total_price)
                    .total_product_quantity(self.total_product_quantity)
                    .total_invoice_quantity(self.total_invoice_quantity)
                    .build(),
            )
            .build())
    }

    fn timing(&self) -> Result<InvoiceTiming> {
        if let Some(at) = &self.at {
            let Some(timing) = InvoiceTiming::from_datetime(at) else {
                bail!("--at {at}: year is not representable");
            };
            if let Some(field) = timing.out_of_range() {
                bail!("--at {at}: {field} is outside the accepted range");
            }
            return Ok(timing);
        }

        match (self.month, self.year, self.day, self.hour, self.weekday) {
            (Some(month), Some(year), Some(day), Some(hour), Some(weekday)) => {
                Ok(InvoiceTiming { month, year, day, hour, weekday })
            }
            _ => bail!("either --at or all of --month, --year, --day, --hour, --weekday are required"),
        }
    }
}

fn parse_timestamp(value: &str) -> Result<NaiveDateTime, String> {
    NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT)
        .map_err(|err| format!("expected YYYY-MM-DDTHH:MM:SS ({err})"))
}

fn parse_country(value: &str) -> Result<Country, String> {
    CountryCatalog::new().country_for(value).map_err(|err| err.to_string())
}

fn parse_amount(value: &str) -> Result<f64, String> {
    let amount: f64 = value.parse().map_err(|_| format!("'{value}' is not a number"))?;
    if !amount.is_finite() || amount < 0.0 {
        return Err(format!("'{value}' must be a finite number >= 0"));
    }
    Ok(amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("invoice-predict").chain(args.iter().copied()))
    }

    fn invoice(cli: Cli) -> InvoiceArgs {
        match cli.command {
            Commands::Assemble { invoice } | Commands::Predict { invoice } => invoice,
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn explicit_fields_build_timing() {
        let cli = parse(&[
            "predict", "--month", "5", "--year", "2011", "--day", "15", "--hour", "13",
            "--weekday", "2", "--country", "United Kingdom", "--quantity", "10",
        ])
        .unwrap();
        let features = invoice(cli).to_features().unwrap();
        assert_eq!(features.timing, InvoiceTiming { month: 5, year: 2011, day: 15, hour: 13, weekday: 2 });
        assert_eq!(features.country, Country::UnitedKingdom);
        assert!((features.amounts.quantity - 10.0).abs() < f64::EPSILON);
        assert!(features.amounts.unit_price.abs() < f64::EPSILON);
    }

    #[test]
    fn timestamp_derives_timing() {
        let cli = parse(&["assemble", "--at", "2011-05-18T13:45:00", "--country", "EIRE"]).unwrap();
        let features = invoice(cli).to_features().unwrap();
        assert_eq!(features.timing, InvoiceTiming { month: 5, year: 2011, day: 18, hour: 13, weekday: 2 });
        assert_eq!(features.country, Country::Eire);
    }

    #[test]
    fn timestamp_outside_year_range_is_refused() {
        let cli = parse(&["assemble", "--at", "2030-01-01T00:00:00", "--country", "EIRE"]).unwrap();
        let err = invoice(cli).to_features().unwrap_err();
        assert!(err.to_string().contains("year is outside the accepted range"));
    }

    #[test]
    fn ranges_are_enforced() {
        let base = ["assemble", "--year", "2011", "--day", "1", "--hour", "0", "--weekday", "0", "--country", "France"];
        let with = |extra: &[&'static str]| {
            let mut args = base.to_vec();
            args.extend_from_slice(extra);
            parse(&args)
        };

        assert!(with(&["--month", "12"]).is_ok());
        assert!(with(&["--month", "13"]).is_err());
        assert!(with(&["--month", "1", "--quantity", "-1"]).is_err());
        assert!(with(&["--month", "1", "--at", "2011-01-01T00:00:00"]).is_err());
    }

    #[test]
    fn unknown_country_is_refused() {
        let err = parse(&["assemble", "--at", "2011-05-18T13:45:00", "--country", "Atlantis"])
            .unwrap_err();
        assert!(err.to_string().contains("Unknown country"));
    }
}
