/// Resolved configuration: parsed arguments validated into a `Config`.
use std::time::Duration;

use chrono::Datelike;

use crate::cli::{Cli, OutputFormat};
use crate::license::LicenseError;

/// Source of the current year, injectable so the default can be pinned.
pub trait Clock {
    /// Calendar year at invocation time.
    fn current_year(&self) -> i32;
}

/// Local wall clock.
pub struct SystemClock;

impl Clock for SystemClock {
    fn current_year(&self) -> i32 {
        chrono::Local::now().year()
    }
}

/// A clock frozen at a given year.
#[cfg(test)]
pub struct FixedClock(pub i32);

#[cfg(test)]
impl Clock for FixedClock {
    fn current_year(&self) -> i32 {
        self.0
    }
}

/// What the invocation should do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Print the available license keys.
    List,
    /// Render one license.
    Show {
        /// Identifier as given on the command line (not yet lowercased).
        license: String,
        /// Copyright holder.
        username: String,
        /// Year substituted for `[year]`.
        year: String,
    },
}

/// Everything a command needs, validated before dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_uri: String,
    pub timeout: Option<Duration>,
    pub format: OutputFormat,
    pub no_header: bool,
    pub mode: Mode,
}

impl Config {
    /// Build a `Config` from parsed arguments.
    ///
    /// # Errors
    ///
    /// Returns `LicenseError::MissingArgument` in show mode when the license
    /// identifier or username is absent or empty.
    pub fn from_cli(cli: &Cli, clock: &impl Clock) -> Result<Self, LicenseError> {
        let mode = if cli.list {
            Mode::List
        } else {
            let license = non_empty(cli.license.as_deref());
            let username = non_empty(cli.username.as_deref());
            let (Some(license), Some(username)) = (license, username) else {
                return Err(LicenseError::MissingArgument);
            };
            let year = non_empty(cli.year.as_deref())
                .map_or_else(|| clock.current_year().to_string(), str::to_owned);
            Mode::Show {
                license: license.to_owned(),
                username: username.to_owned(),
                year,
            }
        };

        Ok(Self {
            api_uri: cli.github_api_uri.trim_end_matches('/').to_owned(),
            timeout: cli.timeout.map(Duration::from_secs),
            format: cli.output.resolve(cli.json),
            no_header: cli.no_header,
            mode,
        })
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;
    use crate::license::DEFAULT_API_URI;

    fn cli(args: &[&str]) -> Cli {
        let mut argv = vec!["ghlicense", "--github-api-uri", DEFAULT_API_URI];
        argv.extend_from_slice(args);
        let mut cli = Cli::try_parse_from(argv).unwrap();
        // Isolate from a USERNAME exported by the test environment.
        if !args.contains(&"-u") {
            cli.username = None;
        }
        cli
    }

    #[test]
    fn test_list_mode_ignores_show_inputs() {
        let config = Config::from_cli(&cli(&["-l"]), &FixedClock(2024)).unwrap();
        assert_eq!(config.mode, Mode::List);
        assert_eq!(config.api_uri, DEFAULT_API_URI);
        assert_eq!(config.timeout, None);
    }

    #[test]
    fn test_year_defaults_to_clock() {
        let config = Config::from_cli(&cli(&["-u", "Alice", "MIT"]), &FixedClock(2031)).unwrap();
        assert_eq!(
            config.mode,
            Mode::Show {
                license: "MIT".to_owned(),
                username: "Alice".to_owned(),
                year: "2031".to_owned(),
            }
        );
    }

    #[test]
    fn test_explicit_year_wins() {
        let config =
            Config::from_cli(&cli(&["-u", "Alice", "-y", "1999-2004", "mit"]), &FixedClock(2031))
                .unwrap();
        let Mode::Show { year, .. } = config.mode else {
            panic!("expected show mode");
        };
        assert_eq!(year, "1999-2004");
    }

    #[test]
    fn test_missing_username() {
        let err = Config::from_cli(&cli(&["mit"]), &FixedClock(2024)).unwrap_err();
        assert!(matches!(err, LicenseError::MissingArgument));
    }

    #[test]
    fn test_empty_username() {
        let err = Config::from_cli(&cli(&["-u", "", "mit"]), &FixedClock(2024)).unwrap_err();
        assert!(matches!(err, LicenseError::MissingArgument));
    }

    #[test]
    fn test_missing_license() {
        let err = Config::from_cli(&cli(&["-u", "Alice"]), &FixedClock(2024)).unwrap_err();
        assert!(matches!(err, LicenseError::MissingArgument));
    }

    #[test]
    fn test_trailing_slash_stripped_and_format_resolved() {
        let parsed = Cli::try_parse_from([
            "ghlicense",
            "--github-api-uri",
            "http://localhost:8080/licenses/",
            "--json",
            "--timeout",
            "10",
            "-l",
        ])
        .unwrap();
        let config = Config::from_cli(&parsed, &FixedClock(2024)).unwrap();
        assert_eq!(config.api_uri, "http://localhost:8080/licenses");
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.timeout, Some(Duration::from_secs(10)));
    }
}
