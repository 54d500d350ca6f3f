use anyhow::Result;
use invp_kernel::domain::FEATURE_COLUMNS;
use invp_pricing::CountryCatalog;
use std::io::Write;

/// Selectable country labels, one per line, in schema order.
pub fn countries(out: &mut impl Write) -> Result<()> {
    let catalog = CountryCatalog::new();
    for label in catalog.labels() {
        writeln!(out, "{label}")?;
    }
    Ok(())
}

/// Feature columns, one per line, in the order the model consumes them.
pub fn schema(out: &mut impl Write) -> Result<()> {
    for column in FEATURE_COLUMNS {
        writeln!(out, "{column}")?;
    }
    Ok(())
}
