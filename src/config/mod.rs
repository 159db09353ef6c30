pub mod init;
mod schema;

pub use schema::Config;

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// Get the config directory path (~/.config/home-fit/)
pub fn get_config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("home-fit")
}

/// Get the default config file path (~/.config/home-fit/config.yaml)
pub fn get_config_path() -> PathBuf {
    get_config_dir().join("config.yaml")
}

/// Load configuration from a YAML file
///
/// # Arguments
///
/// * `path` - Optional path to config file. If None, uses the default path
///
/// # Errors
///
/// Returns an error if:
/// - The config file does not exist
/// - The config file cannot be read
/// - The YAML cannot be parsed
pub fn load_config(path: Option<PathBuf>) -> Result<Config> {
    let config_path = path.unwrap_or_else(get_config_path);

    if !config_path.exists() {
        anyhow::bail!(
            "Config file not found at {}. Run `home-fit init` to create one",
            config_path.display()
        );
    }

    let config_content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file at {}", config_path.display()))?;

    let config: Config = serde_saphyr::from_str(&config_content).with_context(|| {
        format!(
            "Failed to parse config: invalid YAML in {}",
            config_path.display()
        )
    })?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_default_path_ends_with_config_yaml() {
        let path = get_config_path();
        assert!(path.ends_with("home-fit/config.yaml"));
    }

    #[test]
    fn test_load_missing_config() {
        let path = env::temp_dir().join("home_fit_test_missing_config.yaml");
        let _ = std::fs::remove_file(&path);

        let err = load_config(Some(path)).unwrap_err();
        assert!(err.to_string().contains("home-fit init"));
    }

    #[test]
    fn test_load_config_from_file() {
        let path = env::temp_dir().join("home_fit_test_config.yaml");
        std::fs::write(
            &path,
            "profile:\n  maxPrice: 900000\n  minBedrooms: 2\n  minBathrooms: 1\n  \
             priorityMode: BUDGET_DRIVEN\n",
        )
        .unwrap();

        let config = load_config(Some(path.clone())).unwrap();
        assert_eq!(config.profile.min_bedrooms, Some(2));

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_load_invalid_config() {
        let path = env::temp_dir().join("home_fit_test_invalid_config.yaml");
        std::fs::write(&path, "profile: [not, a, map]\n").unwrap();

        let err = load_config(Some(path.clone())).unwrap_err();
        assert!(err.to_string().contains("invalid YAML"));

        let _ = std::fs::remove_file(&path);
    }
}
