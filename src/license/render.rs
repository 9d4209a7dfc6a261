//! Placeholder substitution over license bodies.

/// Token replaced by the license year.
pub const YEAR_TOKEN: &str = "[year]";

/// Token replaced by the copyright holder's name.
pub const FULLNAME_TOKEN: &str = "[fullname]";

/// Fill in the year and holder placeholders of a license body.
///
/// Two sequential global passes, year first. A username that itself
/// contains `[year]` is therefore left as-is.
#[must_use]
pub fn render(body: &str, year: &str, fullname: &str) -> String {
    body.replace(YEAR_TOKEN, year).replace(FULLNAME_TOKEN, fullname)
}
