use crate::args::InvoiceArgs;
use anyhow::{Context, Result};
use invp_kernel::domain::config::AppConfig;
use invp_pricing::{FeatureAssembler, Severity, load_model};
use std::io::Write;
use std::process::ExitCode;
use tracing::debug;

/// Exit status of a submission rejected for zero amounts.
pub const EXIT_REJECTED: u8 = 2;

/// Writes the assembled feature record as a JSON object in column order.
pub fn assemble(invoice: &InvoiceArgs, out: &mut impl Write) -> Result<()> {
    let features = invoice.to_features()?;
    let record = FeatureAssembler::assemble(&features);

    serde_json::to_writer_pretty(&mut *out, &record)?;
    writeln!(out)?;
    Ok(())
}

/// Loads the model, submits the invoice and writes the rendered outcome.
///
/// A missing or broken artifact is an error; rejected and failed predictions
/// are reported through the exit code.
pub fn predict(cfg: &AppConfig, invoice: &InvoiceArgs, out: &mut impl Write) -> Result<ExitCode> {
    let features = invoice.to_features()?;

    let model = load_model(&cfg.model).with_context(|| {
        format!("Critical: Model artifact {} could not be loaded", cfg.model.path.display())
    })?;
    let assembler = FeatureAssembler::new(model);

    let outcome = assembler.submit(&features);
    debug!(severity = %outcome.severity(), "Submission handled");
    writeln!(out, "{}", outcome.render(&cfg.display.currency_symbol))?;

    Ok(match outcome.severity() {
        Severity::Success => ExitCode::SUCCESS,
        Severity::Warning => ExitCode::from(EXIT_REJECTED),
        Severity::Error => ExitCode::FAILURE,
    })
}
