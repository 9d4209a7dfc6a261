/// Errors from the license API layer.
use thiserror::Error;

/// Everything that can end an invocation early.
///
/// Every variant is terminal: nothing is retried and all of them surface as a
/// single diagnostic line plus exit code 1.
#[derive(Debug, Error)]
pub enum LicenseError {
    /// Show mode was requested without a license identifier or username.
    #[error("license and username is required")]
    MissingArgument,

    /// The command line was rejected by the argument parser.
    #[error("{0}")]
    Usage(String),

    /// Transport-level failure reaching the API (connect, TLS, timeout, body read).
    #[error(transparent)]
    Network(#[from] reqwest::Error),

    /// The API answered with a non-200 status.
    #[error("api error [{status}] {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body, read best-effort.
        body: String,
        /// Failure while reading `body`, reported ahead of the API error itself.
        read_error: Option<String>,
    },

    /// The response body was not JSON of the expected shape.
    #[error(transparent)]
    Decode(#[from] serde_json::Error),

    /// Writing the result to stdout failed.
    #[error(transparent)]
    Output(#[from] std::io::Error),
}

impl LicenseError {
    /// Return the CLI exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::MissingArgument
            | Self::Usage(_)
            | Self::Network(_)
            | Self::Api { .. }
            | Self::Decode(_)
            | Self::Output(_) => 1,
        }
    }

    /// Diagnostic messages in the order they should reach stderr.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        match self {
            Self::Api {
                read_error: Some(read_error),
                ..
            } => vec![read_error.clone(), self.to_string()],
            _ => vec![self.to_string()],
        }
    }
}
