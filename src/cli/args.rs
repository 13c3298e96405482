//! CLI argument definitions for `coursecatalog`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use course_catalog::config::ConfigOverrides;
use course_catalog::logger::Level;

/// CLI log level argument
///
/// Converts to a lowercase string for config storage and to `logger::Level` for runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(Level::from(*self).as_str())
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `port`, `data_file`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Serve the JSON API and the course dashboard.
    ///
    /// Uses the SQLite database when `database.path` is set; otherwise serves an in-memory
    /// catalog loaded from the curriculum data file.
    Serve,
    /// Import a curriculum JSON file into the database.
    ///
    /// Courses are upserted by id, so importing the same file twice is harmless.
    Seed {
        /// Curriculum file (defaults to config `data_file`)
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,
    },
    /// Write the course dashboard as a standalone HTML file.
    Dashboard {
        /// Output file (defaults to `courses.html` in config `reports_dir`)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Page title
        #[arg(long, value_name = "TITLE")]
        title: Option<String>,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "coursecatalog",
    about = "Course catalog API, dashboard, and curriculum tools",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override config database path
    #[arg(long = "db-path", value_name = "PATH")]
    pub db_path: Option<PathBuf>,

    /// Override config server host
    #[arg(long, value_name = "HOST")]
    pub host: Option<String>,

    /// Override config server port
    #[arg(short = 'p', long, value_name = "PORT")]
    pub port: Option<u16>,

    /// Override config curriculum data file
    #[arg(long = "data-file", value_name = "FILE")]
    pub data_file: Option<PathBuf>,

    /// Override config reports directory
    #[arg(long = "reports-dir", value_name = "DIR")]
    pub reports_dir: Option<PathBuf>,

    /// Subcommand to execute.
    /// A subcommand is required to run the CLI.
    #[command(subcommand)]
    pub command: Command,
}

fn path_string(path: Option<&PathBuf>) -> Option<String> {
    path.map(|p| p.to_string_lossy().to_string())
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// `None` means "keep the configured value".
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string()),
            file: path_string(self.config_log_file.as_ref()),
            verbose: self.config_verbose,
            db_path: path_string(self.db_path.as_ref()),
            host: self.host.clone(),
            port: self.port,
            data_file: path_string(self.data_file.as_ref()),
            reports_dir: path_string(self.reports_dir.as_ref()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_cli(command: Command) -> Cli {
        Cli {
            log_level: None,
            verbose: false,
            debug_flag: false,
            log_file: None,
            config_level: None,
            config_log_file: None,
            config_verbose: None,
            db_path: None,
            host: None,
            port: None,
            data_file: None,
            reports_dir: None,
            command,
        }
    }

    #[test]
    fn test_log_level_display() {
        assert_eq!(LogLevelArg::Error.to_string(), "error");
        assert_eq!(LogLevelArg::Warn.to_string(), "warn");
        assert_eq!(LogLevelArg::Info.to_string(), "info");
        assert_eq!(LogLevelArg::Debug.to_string(), "debug");
    }

    #[test]
    fn test_log_level_to_logger_level() {
        assert_eq!(Level::from(LogLevelArg::Error), Level::Error);
        assert_eq!(Level::from(LogLevelArg::Warn), Level::Warn);
        assert_eq!(Level::from(LogLevelArg::Info), Level::Info);
        assert_eq!(Level::from(LogLevelArg::Debug), Level::Debug);
    }

    #[test]
    fn test_to_config_overrides_empty() {
        let overrides = bare_cli(Command::Serve).to_config_overrides();

        assert!(overrides.level.is_none());
        assert!(overrides.file.is_none());
        assert!(overrides.verbose.is_none());
        assert!(overrides.db_path.is_none());
        assert!(overrides.host.is_none());
        assert!(overrides.port.is_none());
        assert!(overrides.data_file.is_none());
        assert!(overrides.reports_dir.is_none());
    }

    #[test]
    fn test_to_config_overrides_with_values() {
        let mut cli = bare_cli(Command::Config { subcommand: None });
        cli.config_level = Some(LogLevelArg::Debug);
        cli.config_log_file = Some(PathBuf::from("/tmp/catalog.log"));
        cli.config_verbose = Some(true);
        cli.db_path = Some(PathBuf::from("/tmp/catalog.db"));
        cli.host = Some("0.0.0.0".to_string());
        cli.port = Some(8080);
        cli.data_file = Some(PathBuf::from("data.json"));
        cli.reports_dir = Some(PathBuf::from("/out"));

        let overrides = cli.to_config_overrides();
        assert_eq!(overrides.level.as_deref(), Some("debug"));
        assert_eq!(overrides.file.as_deref(), Some("/tmp/catalog.log"));
        assert_eq!(overrides.verbose, Some(true));
        assert_eq!(overrides.db_path.as_deref(), Some("/tmp/catalog.db"));
        assert_eq!(overrides.host.as_deref(), Some("0.0.0.0"));
        assert_eq!(overrides.port, Some(8080));
        assert_eq!(overrides.data_file.as_deref(), Some("data.json"));
        assert_eq!(overrides.reports_dir.as_deref(), Some("/out"));
    }

    #[test]
    fn test_parse_serve_with_port() {
        let cli = Cli::try_parse_from(["coursecatalog", "--port", "4000", "serve"]).unwrap();

        assert_eq!(cli.port, Some(4000));
        assert!(matches!(cli.command, Command::Serve));
    }

    #[test]
    fn test_parse_seed_and_dashboard() {
        let cli = Cli::try_parse_from(["coursecatalog", "seed", "data.json"]).unwrap();
        assert!(matches!(cli.command, Command::Seed { file: Some(_) }));

        let cli = Cli::try_parse_from(["coursecatalog", "dashboard", "-o", "page.html"]).unwrap();
        match cli.command {
            Command::Dashboard { output, title } => {
                assert_eq!(output, Some(PathBuf::from("page.html")));
                assert!(title.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
