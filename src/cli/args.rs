/// CLI argument definitions via clap derive.
use clap::{ArgAction, Parser, ValueEnum};

use crate::license::DEFAULT_API_URI;

/// ghlicense — list open-source licenses and render LICENSE files.
#[derive(Debug, Parser)]
#[command(
    name = "ghlicense",
    about = "List open-source licenses and render LICENSE files from the GitHub licenses API",
    version
)]
pub struct Cli {
    /// URI for the GitHub licenses API, without trailing slash.
    #[arg(long, env = "GITHUB_API_URI", value_name = "URI", default_value = DEFAULT_API_URI)]
    pub github_api_uri: String,

    /// Show the license name list instead of rendering a license.
    #[arg(short, long)]
    pub list: bool,

    /// Username to embed in the LICENSE file.
    #[arg(short, long, env = "USERNAME", value_name = "NAME")]
    pub username: Option<String>,

    /// License year. Defaults to the current year.
    #[arg(short, long, value_name = "YEAR")]
    pub year: Option<String>,

    /// Output format.
    #[arg(long, value_name = "FORMAT", default_value = "plain")]
    pub output: OutputFormat,

    /// Shorthand for --output json.
    #[arg(long, conflicts_with = "output")]
    pub json: bool,

    /// Omit table headers.
    #[arg(long)]
    pub no_header: bool,

    /// Abort the request after this many seconds.
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Log more to stderr (-v info, -vv debug, -vvv trace). `RUST_LOG` wins.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// License identifier, e.g. `mit` or `Apache-2.0`.
    #[arg(value_name = "LICENSE")]
    pub license: Option<String>,
}

/// Output format variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Keys one per line, or the rendered license text verbatim.
    #[default]
    Plain,
    /// Pretty-printed JSON.
    Json,
    /// Aligned table (license metadata only for a single license).
    Table,
}

impl OutputFormat {
    /// Resolve the effective format, honouring the `--json` shorthand.
    #[must_use]
    pub fn resolve(self, json_flag: bool) -> Self {
        if json_flag { Self::Json } else { self }
    }
}
