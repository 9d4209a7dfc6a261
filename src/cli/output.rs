/// Output formatting: plain, JSON and table modes, plus the stderr diagnostic.
use std::io::Write;

use comfy_table::{Table, presets::UTF8_BORDERS_ONLY};
use serde::Serialize;

use super::args::OutputFormat;
use crate::license::{LicenseDetail, LicenseError, LicenseSummary};

/// Prefix of every diagnostic line. Existing scripts match on this spelling.
pub const ERROR_PREFIX: &str = "error occured: ";

/// Output context passed to all formatters.
#[derive(Debug, Clone, Copy)]
pub struct OutputCtx {
    pub format: OutputFormat,
    pub no_header: bool,
}

impl OutputCtx {
    #[must_use]
    pub fn new(format: OutputFormat, no_header: bool) -> Self {
        Self { format, no_header }
    }
}

// --- License list ---

/// Write the license list.
///
/// Plain output is the keys joined by `\n` with no trailing newline.
///
/// # Errors
///
/// Propagates write failures.
pub fn write_keys(
    out: &mut impl Write,
    licenses: &[LicenseSummary],
    ctx: &OutputCtx,
) -> std::io::Result<()> {
    match ctx.format {
        OutputFormat::Plain => {
            let keys: Vec<&str> = licenses.iter().map(|l| l.key.as_str()).collect();
            write!(out, "{}", keys.join("\n"))
        }
        OutputFormat::Json => write_json(out, licenses),
        OutputFormat::Table => {
            let mut table = Table::new();
            table.load_preset(UTF8_BORDERS_ONLY);
            if !ctx.no_header {
                table.set_header(["KEY", "SPDX ID", "NAME"]);
            }
            for l in licenses {
                table.add_row([l.key.as_str(), l.spdx_id.as_str(), l.name.as_str()]);
            }
            writeln!(out, "{table}")
        }
    }
}

// --- Single license ---

/// Write a license whose body has already been rendered.
///
/// Plain output is the body verbatim.
///
/// # Errors
///
/// Propagates write failures.
pub fn write_license(
    out: &mut impl Write,
    license: &LicenseDetail,
    ctx: &OutputCtx,
) -> std::io::Result<()> {
    match ctx.format {
        OutputFormat::Plain => write!(out, "{}", license.body),
        OutputFormat::Json => write_json(out, license),
        OutputFormat::Table => {
            let mut table = Table::new();
            table.load_preset(UTF8_BORDERS_ONLY);
            if !ctx.no_header {
                table.set_header(["FIELD", "VALUE"]);
            }
            table.add_row(["name", license.name.as_str()]);
            table.add_row(["spdx_id", license.spdx_id.as_str()]);
            table.add_row(["description", license.description.as_str()]);
            table.add_row(["permissions", &license.permissions.join(", ")]);
            table.add_row(["conditions", &license.conditions.join(", ")]);
            table.add_row(["limitations", &license.limitations.join(", ")]);
            table.add_row(["html_url", license.html_url.as_str()]);
            writeln!(out, "{table}")
        }
    }
}

// --- Error output ---

/// Write one `error occured:` line per diagnostic message.
pub fn write_error(out: &mut impl Write, err: &LicenseError) {
    for message in err.messages() {
        let _ = writeln!(out, "{ERROR_PREFIX}{message}");
    }
}

fn write_json<T: Serialize + ?Sized>(out: &mut impl Write, value: &T) -> std::io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)
}
