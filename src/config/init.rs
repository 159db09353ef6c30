use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use rust_decimal::Decimal;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use crate::config::{get_config_path, Config};
use crate::listing::{BuyerProfile, PriorityMode};
use crate::scoring::validate_profile;

/// Prompt user with a message and return their trimmed input.
fn prompt(message: &str) -> Result<String> {
    print!("{}", message);
    std::io::stdout()
        .flush()
        .context("Failed to flush stdout")?;
    let mut input = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut input)
        .context("Failed to read input")?;
    Ok(input.trim().to_string())
}

/// Prompt user with a message and a default value. Returns default if input is empty.
fn prompt_with_default(message: &str, default: &str) -> Result<String> {
    let input = prompt(&format!("{} [{}]: ", message, default))?;
    if input.is_empty() {
        Ok(default.to_string())
    } else {
        Ok(input)
    }
}

/// Prompt user with a yes/no question. Returns bool based on input and default.
fn prompt_yes_no(message: &str, default_yes: bool) -> Result<bool> {
    let hint = if default_yes { "Y/n" } else { "y/N" };
    let input = prompt(&format!("{} [{}]: ", message, hint))?;
    let input = input.to_lowercase();
    if input.is_empty() {
        Ok(default_yes)
    } else {
        Ok(input == "y" || input == "yes")
    }
}

/// Keep asking until `parse` accepts the answer.
fn prompt_until<T>(
    message: &str,
    default: &str,
    parse: impl Fn(&str) -> Result<T, String>,
) -> Result<T> {
    loop {
        let input = prompt_with_default(message, default)?;
        match parse(&input) {
            Ok(value) => return Ok(value),
            Err(e) => println!("  Invalid: {}. Try again.", e),
        }
    }
}

/// Parse a budget such as "1,250,000" or "$900000".
pub fn parse_price(input: &str) -> Result<Decimal, String> {
    let cleaned: String = input
        .trim()
        .trim_start_matches('$')
        .chars()
        .filter(|c| *c != ',' && *c != '_')
        .collect();
    let price: Decimal = cleaned
        .parse()
        .map_err(|_| format!("'{}' is not a number", input.trim()))?;
    if price <= Decimal::ZERO {
        return Err("budget must be greater than zero".to_string());
    }
    Ok(price)
}

pub fn parse_bedrooms(input: &str) -> Result<u32, String> {
    input
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a whole, non-negative number", input.trim()))
}

/// Bathrooms may be fractional (1.5 = one full bath plus a half bath).
pub fn parse_bathrooms(input: &str) -> Result<Decimal, String> {
    let baths: Decimal = input
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a number", input.trim()))?;
    if baths < Decimal::ZERO {
        return Err("bathrooms cannot be negative".to_string());
    }
    Ok(baths)
}

/// Write the config atomically, creating parent directories as needed.
pub fn write_config(path: &Path, config: &Config) -> Result<()> {
    let yaml = serde_saphyr::to_string(config)
        .map_err(|e| anyhow::anyhow!("Failed to serialize config: {}", e))?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;
    file.write_all(yaml.as_bytes())
        .with_context(|| format!("Failed to write config to {}", path.display()))?;
    file.commit()
        .with_context(|| format!("Failed to save config to {}", path.display()))?;

    Ok(())
}

/// Run the interactive init wizard to create a config file.
///
/// If `default_path` is Some, uses that as the config file path.
/// Otherwise, prompts the user with the default config path.
pub fn run_init_wizard(default_path: Option<PathBuf>) -> Result<()> {
    println!();
    println!("Home Fit Configuration Wizard");
    println!("=============================");
    println!();
    println!("Tell us what you are looking for. Every house is scored against this profile.");
    println!();

    let max_price = prompt_until("Maximum budget", "1000000", parse_price)?;
    let min_bedrooms = prompt_until("Minimum bedrooms", "3", parse_bedrooms)?;
    let min_bathrooms = prompt_until("Minimum bathrooms (1.5 allowed)", "2", parse_bathrooms)?;

    println!();
    println!("The priority mode decides how much each dimension counts:");
    println!("  balanced         -- price, space, safety, schools 25% each");
    println!("  budget-driven    -- price 50%, space 20%, safety 20%, schools 10%");
    println!("  safety-first     -- safety 50%, price 25%, space 15%, schools 10%");
    println!("  education-first  -- schools 50%, price 20%, space 15%, safety 15%");
    let priority_mode = prompt_until("Priority mode", "balanced", |s| s.parse::<PriorityMode>())?;

    let profile = BuyerProfile::new(max_price, min_bedrooms, min_bathrooms, priority_mode);
    if let Err(errors) = validate_profile(&profile) {
        anyhow::bail!("Profile is invalid: {}", errors.join("; "));
    }

    let default_config_path = default_path.unwrap_or_else(get_config_path);
    println!();
    let path_str = prompt_with_default(
        "Where should the config be saved?",
        &default_config_path.display().to_string(),
    )?;
    let config_path = PathBuf::from(&path_str);

    if config_path.exists() {
        let overwrite = prompt_yes_no(
            &format!(
                "Config already exists at {}. Overwrite?",
                config_path.display()
            ),
            false,
        )?;
        if !overwrite {
            println!("Aborted.");
            return Ok(());
        }
    }

    let config = Config {
        profile,
        log_level: None,
    };
    write_config(&config_path, &config)?;

    println!();
    println!("Config written to {}", config_path.display());
    println!("Run `home-fit rank <houses.yaml>` to score your listings.");

    Ok(())
}
