use std::path::PathBuf;

use clap::Parser;
use url::Url;

use crate::config::Config;

#[derive(Parser, Debug, Clone)]
#[clap(author, about, version)]
pub struct Args {
    /// Optional path to overwrite the config
    #[arg(short, long, default_value = "note-updater.toml")]
    pub config_path: PathBuf,

    /// Show the update dialog (default) or print the result of the check
    #[arg(short, long, default_value = "tui")]
    pub mode: ModeArgs,

    /// Version of the running application, as MAJOR.MINOR
    #[arg(long)]
    pub current_version: Option<String>,

    /// Endpoint serving the latest release as json
    #[arg(long)]
    pub release_url: Option<Url>,

    /// Milliseconds to wait before checking
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// Print the configuration and exit
    #[arg(long)]
    pub print_config: bool,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq, strum_macros::EnumIs)]
pub enum ModeArgs {
    #[default]
    Tui,
    Print,
}

impl Args {
    /// Flags win over the config file
    #[must_use]
    pub fn apply_overrides(&self, mut config: Config) -> Config {
        if let Some(current_version) = &self.current_version {
            config.current_version.clone_from(current_version);
        }
        if let Some(release_url) = &self.release_url {
            config.release_url = release_url.clone();
        }
        if let Some(delay_ms) = self.delay_ms {
            config.check_delay_ms = delay_ms;
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["note-updater"]);

        assert_eq!(args.config_path, PathBuf::from("note-updater.toml"));
        assert!(args.mode.is_tui());
        assert!(!args.print_config);
        assert_eq!(args.apply_overrides(Config::default()), Config::default());
    }

    #[test]
    fn test_overrides() {
        let args = Args::parse_from([
            "note-updater",
            "--mode",
            "print",
            "--current-version",
            "2.4",
            "--release-url",
            "https://example.com/latest",
            "--delay-ms",
            "0",
        ]);

        let config = args.apply_overrides(Config::default());

        assert!(args.mode.is_print());
        assert_eq!(config.current_version, "2.4");
        assert_eq!(config.release_url.as_str(), "https://example.com/latest");
        assert_eq!(config.check_delay_ms, 0);
    }

    #[test]
    fn test_rejects_invalid_url() {
        assert!(Args::try_parse_from(["note-updater", "--release-url", "nope"]).is_err());
    }
}
