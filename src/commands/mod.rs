/// Command dispatch: routes the resolved `Mode` to its implementation.
pub mod list;
pub mod show;

use std::io::Write;

use crate::cli::OutputCtx;
use crate::config::{Config, Mode};
use crate::license::{LicenseError, LicenseSource};

/// Run the command selected by `config` against `source`, writing to `out`.
///
/// # Errors
///
/// Returns `LicenseError` on any command failure.
pub fn dispatch(
    config: &Config,
    source: &impl LicenseSource,
    out: &mut impl Write,
) -> Result<(), LicenseError> {
    let ctx = OutputCtx::new(config.format, config.no_header);
    match &config.mode {
        Mode::List => list::run(source, &ctx, out),
        Mode::Show {
            license,
            username,
            year,
        } => show::run(source, license, username, year, &ctx, out),
    }
}
