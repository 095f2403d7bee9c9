use std::path::PathBuf;

use clap::Parser;
use url::Url;

use crate::{fetch::DEFAULT_SOURCES, menu::DateFormat, parse::TextCleanup};

/// Scrapes the weekly garrison restaurant menus into JSON.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Config {
    /// File to write the JSON to, created or overwritten. Standard output when omitted.
    pub output: Option<PathBuf>,

    /// How the `date` of each day is written.
    #[arg(long, value_enum, env = "LIONSMEAL_DATE_FORMAT", default_value_t = DateFormat::Epoch)]
    pub date_format: DateFormat,

    /// How multi-line meal texts are tidied.
    #[arg(long, value_enum, env = "LIONSMEAL_CLEANUP", default_value_t = TextCleanup::EmptyLines)]
    pub cleanup: TextCleanup,

    /// Menu pages to read, in output order.
    #[arg(
        long = "source",
        env = "LIONSMEAL_SOURCES",
        value_delimiter = ',',
        default_values = DEFAULT_SOURCES
    )]
    pub sources: Vec<Url>,

    /// Indent the JSON.
    #[arg(long)]
    pub pretty: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::try_parse_from(["lionsmeal"]).unwrap();
        assert_eq!(config.output, None);
        assert_eq!(config.date_format, DateFormat::Epoch);
        assert_eq!(config.cleanup, TextCleanup::EmptyLines);
        assert_eq!(config.sources.len(), 2);
        assert!(config.sources[1].path().ends_with("_seur.php"));
        assert!(!config.pretty);
    }

    #[test]
    fn test_output_and_options() {
        let config = Config::try_parse_from([
            "lionsmeal",
            "--date-format",
            "calendar",
            "--cleanup",
            "collapse",
            "--pretty",
            "menu.json",
        ])
        .unwrap();
        assert_eq!(config.output, Some(PathBuf::from("menu.json")));
        assert_eq!(config.date_format, DateFormat::Calendar);
        assert_eq!(config.cleanup, TextCleanup::Collapse);
        assert!(config.pretty);
    }

    #[test]
    fn test_sources_override() {
        let config = Config::try_parse_from([
            "lionsmeal",
            "--source",
            "http://localhost/a.php,http://localhost/b.php",
            "--source",
            "http://localhost/c.php",
        ])
        .unwrap();
        let paths: Vec<_> = config.sources.iter().map(Url::path).collect();
        assert_eq!(paths, ["/a.php", "/b.php", "/c.php"]);
    }

    #[test]
    fn test_two_outputs_is_a_usage_error() {
        let err = Config::try_parse_from(["lionsmeal", "a.json", "b.json"]).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_bad_source_is_rejected() {
        assert!(Config::try_parse_from(["lionsmeal", "--source", "not a url"]).is_err());
    }
}
