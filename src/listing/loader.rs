use super::types::House;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Load a list of house records from a local file.
///
/// `.json` files are parsed as JSON; anything else is treated as YAML.
/// The document must be a list of house records.
///
/// # Errors
///
/// Returns an error if the file cannot be read or does not parse as a list
/// of houses.
pub fn load_houses(path: &Path) -> Result<Vec<House>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read house file at {}", path.display()))?;

    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let houses: Vec<House> = if is_json {
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse houses: invalid JSON in {}", path.display()))?
    } else {
        serde_saphyr::from_str(&content)
            .with_context(|| format!("Failed to parse houses: invalid YAML in {}", path.display()))?
    };

    Ok(houses)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_load_json_houses() {
        let path = env::temp_dir().join("home_fit_test_houses.json");
        std::fs::write(
            &path,
            r#"[
                {"address1": "1 Main St", "avmValue": 500000, "beds": 2},
                {"address1": "2 Main St", "crimeIndex": 90}
            ]"#,
        )
        .unwrap();

        let houses = load_houses(&path).unwrap();
        assert_eq!(houses.len(), 2);
        assert_eq!(houses[0].avm_value, Some(500_000));
        assert_eq!(houses[1].crime_index, Some(90));

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_load_yaml_houses() {
        let path = env::temp_dir().join("home_fit_test_houses.yaml");
        std::fs::write(
            &path,
            r#"
- address1: "1 Main St"
  avmValue: 500000
  beds: 3
  bathsTotal: 1.5
  schoolsJson: '[{"schoolRating":"B"}]'
"#,
        )
        .unwrap();

        let houses = load_houses(&path).unwrap();
        assert_eq!(houses.len(), 1);
        assert_eq!(houses[0].beds, Some(3));
        assert_eq!(
            houses[0].schools_json.as_deref(),
            Some(r#"[{"schoolRating":"B"}]"#)
        );

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_load_missing_file() {
        let path = env::temp_dir().join("home_fit_test_no_such_file.json");
        let _ = std::fs::remove_file(&path);

        let err = load_houses(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to read house file"));
    }

    #[test]
    fn test_load_invalid_json() {
        let path = env::temp_dir().join("home_fit_test_invalid_houses.json");
        std::fs::write(&path, "{ not a list").unwrap();

        let err = load_houses(&path).unwrap_err();
        assert!(err.to_string().contains("invalid JSON"));

        let _ = std::fs::remove_file(&path);
    }
}
