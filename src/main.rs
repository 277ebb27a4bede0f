//! gridcalc - Entry Point

use clap::Parser;
use gridcalc::model::ThemePreference;
use gridcalc::state::AppState;
use gridcalc::store::{JsonFileStore, MemoryStore, PreferenceStore};
use gridcalc::view::ColorConfig;
use std::path::PathBuf;
use tracing::info;

/// Keypad calculator for the terminal
#[derive(Parser, Debug)]
#[command(name = "gridcalc")]
#[command(version)]
#[command(about = "Keypad calculator with history and light/dark themes")]
pub struct Args {
    /// Start with this theme, ignoring the saved preference
    #[arg(long, value_parser = parse_theme)]
    pub theme: Option<ThemePreference>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Keep theme changes in memory only
    #[arg(long)]
    pub no_persist: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn parse_theme(value: &str) -> Result<ThemePreference, String> {
    value.parse::<ThemePreference>().map_err(|e| e.to_string())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = gridcalc::config::load_config_with_precedence(args.config.clone())?;
        let merged = gridcalc::config::merge_config(config_file);
        let with_env = gridcalc::config::apply_env_overrides(merged);
        gridcalc::config::apply_cli_overrides(with_env, args.theme, args.no_persist)
    };

    gridcalc::logging::init(&config.log_file_path)?;

    info!(config = ?config, "Configuration loaded and resolved");

    let store: Box<dyn PreferenceStore> = if config.persist_preferences {
        Box::new(JsonFileStore::new(config.preferences_path.clone()))
    } else {
        Box::new(MemoryStore::new())
    };

    let app_state = AppState::new(&config, store);
    let colors = ColorConfig::from_env_and_args(args.no_color);

    gridcalc::view::run(app_state, colors)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_help_does_not_error() {
        let result = Args::try_parse_from(["gridcalc", "--help"]);
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_version_does_not_error() {
        let result = Args::try_parse_from(["gridcalc", "--version"]);
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_no_args_defaults() {
        let args = Args::parse_from(["gridcalc"]);
        assert_eq!(args.theme, None);
        assert!(!args.no_color);
        assert!(!args.no_persist);
        assert_eq!(args.config, None);
    }

    #[test]
    fn test_theme_dark() {
        let args = Args::parse_from(["gridcalc", "--theme", "dark"]);
        assert_eq!(args.theme, Some(ThemePreference::Dark));
    }

    #[test]
    fn test_theme_is_case_insensitive() {
        let args = Args::parse_from(["gridcalc", "--theme", "Light"]);
        assert_eq!(args.theme, Some(ThemePreference::Light));
    }

    #[test]
    fn test_theme_invalid_rejects() {
        let err = Args::try_parse_from(["gridcalc", "--theme", "solarized"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn test_no_color_and_no_persist_flags() {
        let args = Args::parse_from(["gridcalc", "--no-color", "--no-persist"]);
        assert!(args.no_color);
        assert!(args.no_persist);
    }

    #[test]
    fn test_config_path() {
        let args = Args::parse_from(["gridcalc", "--config", "/custom/config.toml"]);
        assert_eq!(args.config, Some(PathBuf::from("/custom/config.toml")));
    }

    #[test]
    fn test_cli_theme_flows_through_precedence_chain() {
        use gridcalc::config::{apply_cli_overrides, merge_config, ConfigFile};

        let config_file = ConfigFile {
            default_theme: Some(ThemePreference::Light),
            ..ConfigFile::default()
        };
        let merged = merge_config(Some(config_file));
        assert_eq!(merged.theme_override, None);

        let args = Args::parse_from(["gridcalc", "--theme", "dark", "--no-persist"]);
        let resolved = apply_cli_overrides(merged, args.theme, args.no_persist);

        assert_eq!(resolved.theme_override, Some(ThemePreference::Dark));
        assert!(!resolved.persist_preferences);
    }
}
