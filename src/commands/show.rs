/// Show flow: fetch one license and render its placeholders.
use std::io::Write;

use tracing::info;

use crate::cli::OutputCtx;
use crate::cli::output::write_license;
use crate::license::{LicenseError, LicenseSource, render};

/// Run `ghlicense <LICENSE>`.
///
/// The identifier is lowercased before the request; the API keys are lowercase.
///
/// # Errors
///
/// Returns `LicenseError` on request, status, decode or write failure.
pub fn run(
    source: &impl LicenseSource,
    license: &str,
    username: &str,
    year: &str,
    ctx: &OutputCtx,
    out: &mut impl Write,
) -> Result<(), LicenseError> {
    let key = license.to_lowercase();
    let mut detail = source.detail(&key)?;
    info!(key = key.as_str(), year, "rendering license");
    detail.body = render(&detail.body, year, username);
    write_license(out, &detail, ctx)?;
    Ok(())
}
