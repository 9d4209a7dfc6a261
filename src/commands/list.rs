/// List flow: fetch every license summary and print the keys.
use std::io::Write;

use tracing::info;

use crate::cli::OutputCtx;
use crate::cli::output::write_keys;
use crate::license::{LicenseError, LicenseSource};

/// Run `ghlicense --list`.
///
/// # Errors
///
/// Returns `LicenseError` on request, status, decode or write failure.
pub fn run(
    source: &impl LicenseSource,
    ctx: &OutputCtx,
    out: &mut impl Write,
) -> Result<(), LicenseError> {
    let licenses = source.list()?;
    info!(count = licenses.len(), "listing licenses");
    write_keys(out, &licenses, ctx)?;
    Ok(())
}
