use std::path::PathBuf;

use reqwest::Url;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

pub const ENV_BASE_URL: &str = "ACTIVITY_BROWSER_URL";
pub const ENV_THEME: &str = "ACTIVITY_BROWSER_THEME";

/// Colour scheme requested by the user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ThemePreference {
    #[default]
    Dark,
    Light,
}

impl ThemePreference {
    fn parse(value: &str) -> Option<ThemePreference> {
        match value.trim().to_lowercase().as_str() {
            "dark" => Some(ThemePreference::Dark),
            "light" => Some(ThemePreference::Light),
            _ => None,
        }
    }
}

/// Resolved client settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub base_url: String,
    pub theme: ThemePreference,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            theme: ThemePreference::default(),
        }
    }
}

/// Return the path to the config file.
pub fn config_file_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("/tmp"))
        .join("activity-browser/config.md")
}

/// Apply `~/.config/activity-browser/config.md` on top of `config`.
///
/// Format:
/// ```markdown
/// # activity-browser
/// - base_url: http://127.0.0.1:8000
/// - theme: light
/// ```
///
/// Headings, blank lines and unknown keys are ignored. Invalid values are
/// logged and leave the previous setting in place.
pub fn parse_config(content: &str, mut config: Config) -> Config {
    for line in content.lines() {
        let trimmed = line.trim();
        if let Some(rest) = trimmed.strip_prefix("- base_url:") {
            set_base_url(&mut config, rest, "config file");
        } else if let Some(rest) = trimmed.strip_prefix("- theme:") {
            set_theme(&mut config, rest, "config file");
        }
    }
    config
}

/// Apply environment overrides. `lookup` is `std::env::var` in production.
pub fn apply_env(mut config: Config, lookup: impl Fn(&str) -> Option<String>) -> Config {
    if let Some(url) = lookup(ENV_BASE_URL).filter(|s| !s.trim().is_empty()) {
        set_base_url(&mut config, &url, ENV_BASE_URL);
    }
    if let Some(theme) = lookup(ENV_THEME).filter(|s| !s.trim().is_empty()) {
        set_theme(&mut config, &theme, ENV_THEME);
    }
    config
}

/// Defaults, then the config file if present, then the environment.
pub fn load() -> Config {
    let path = config_file_path();
    let mut config = Config::default();
    match std::fs::read_to_string(&path) {
        Ok(content) => {
            tracing::info!("config: {}", path.display());
            config = parse_config(&content, config);
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => tracing::warn!("cannot read {}: {e}", path.display()),
    }
    apply_env(config, |key| std::env::var(key).ok())
}

fn set_base_url(config: &mut Config, raw: &str, source: &str) {
    let raw = raw.trim();
    match Url::parse(raw) {
        Ok(_) => config.base_url = raw.to_string(),
        Err(e) => tracing::warn!("ignoring base_url {raw:?} from {source}: {e}"),
    }
}

fn set_theme(config: &mut Config, raw: &str, source: &str) {
    match ThemePreference::parse(raw) {
        Some(theme) => config.theme = theme,
        None => tracing::warn!("ignoring theme {:?} from {source}", raw.trim()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = Config::default();
        assert_eq!(c.base_url, DEFAULT_BASE_URL);
        assert_eq!(c.theme, ThemePreference::Dark);
    }

    #[test]
    fn parse_basic_config() {
        let input = r#"
# activity-browser
- base_url: https://activities.mergington.edu
- theme: Light
"#;
        let c = parse_config(input, Config::default());
        assert_eq!(c.base_url, "https://activities.mergington.edu");
        assert_eq!(c.theme, ThemePreference::Light);
    }

    #[test]
    fn parse_invalid_values_keep_previous() {
        let input = r#"
- base_url: not a url
- theme: solarized
- colour: blue
"#;
        let c = parse_config(input, Config::default());
        assert_eq!(c, Config::default());
    }

    #[test]
    fn env_overrides_file() {
        let from_file = parse_config("- base_url: http://file.local:8000", Config::default());
        let c = apply_env(from_file, |key| match key {
            ENV_BASE_URL => Some("http://env.local:9000".to_string()),
            ENV_THEME => Some("light".to_string()),
            _ => None,
        });
        assert_eq!(c.base_url, "http://env.local:9000");
        assert_eq!(c.theme, ThemePreference::Light);
    }

    #[test]
    fn empty_env_is_ignored() {
        let c = apply_env(Config::default(), |_| Some("  ".to_string()));
        assert_eq!(c, Config::default());
    }
}
