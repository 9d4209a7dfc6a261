/// License domain layer: wire records, API client, placeholder rendering.
pub mod client;
pub mod errors;
pub mod model;
pub mod render;

pub use client::{DEFAULT_API_URI, HttpLicenseSource, LicenseSource};
pub use errors::LicenseError;
pub use model::{LicenseDetail, LicenseSummary};
pub use render::render;
