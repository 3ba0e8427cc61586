use crate::config::{Config, ConfigBuilder};
use anyhow::{Result, anyhow};
use std::path::Path;

/// Config subcommands
#[derive(Debug, Clone, clap::Subcommand)]
pub enum ConfigCommands {
    /// Get a configuration value
    Get {
        /// Configuration key (git.executable, git.commit_base, directories.versions)
        key: String,

        /// Output format
        #[arg(long, default_value = "text")]
        format: OutputFormat,
    },

    /// List all configuration values
    List {
        /// Output format
        #[arg(long, default_value = "yaml")]
        format: OutputFormat,
    },

    /// Validate configuration file
    Validate,
}

#[derive(Debug, Clone, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Yaml,
}

/// Execute config command
pub fn cmd_config(config: &Config, config_file: &str, subcommand: ConfigCommands) -> Result<()> {
    match subcommand {
        ConfigCommands::Get { key, format } => {
            let value = get_config_value(config, &key)?;
            println!("{}", format_value(&value, &format));
        }

        ConfigCommands::List { format } => {
            println!("{}", format_config(config, &format)?);
        }

        ConfigCommands::Validate => {
            validate_config_file(config_file)?;
            println!("✅ Configuration file '{}' is valid", config_file);
        }
    }

    Ok(())
}

/// Get a configuration value by key
pub fn get_config_value(config: &Config, key: &str) -> Result<String> {
    let parts: Vec<&str> = key.split('.').collect();

    match parts.as_slice() {
        ["git", "executable"] => Ok(config.git.executable.display().to_string()),
        ["git", "commit_base"] => Ok(config.git.commit_base.clone()),
        ["directories", "versions"] => Ok(config.directories.versions.display().to_string()),
        _ => Err(anyhow!("Unknown configuration key: {}", key)),
    }
}

/// Render the resolved configuration
pub fn format_config(config: &Config, format: &OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(config)?),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(config)?.trim_end().to_string()),
        OutputFormat::Text => {
            let value = serde_json::to_value(config)?;
            let mut lines = vec!["Current Configuration:".to_string(), String::new()];
            config_text_lines(&value, 0, &mut lines);
            Ok(lines.join("\n"))
        }
    }
}

fn config_text_lines(value: &serde_json::Value, indent: usize, lines: &mut Vec<String>) {
    let prefix = "  ".repeat(indent);

    match value {
        serde_json::Value::Object(map) => {
            for (key, val) in map {
                match val {
                    serde_json::Value::Object(_) => {
                        lines.push(format!("{}{}:", prefix, key));
                        config_text_lines(val, indent + 1, lines);
                    }
                    serde_json::Value::String(s) => lines.push(format!("{}{}: {}", prefix, key, s)),
                    other => lines.push(format!("{}{}: {}", prefix, key, other)),
                }
            }
        }
        other => lines.push(format!("{}{}", prefix, other)),
    }
}

/// Validate configuration file
fn validate_config_file(config_file: &str) -> Result<()> {
    if !Path::new(config_file).exists() {
        return Err(anyhow!("Configuration file '{}' not found", config_file));
    }

    let config_input = crate::config::load_config(config_file)?;

    ConfigBuilder::new()
        .with_file(config_input)
        .resolve()
        .map_err(|e| anyhow!("Configuration validation failed: {}", e))?;

    Ok(())
}

fn format_value(value: &str, format: &OutputFormat) -> String {
    match format {
        OutputFormat::Json => serde_json::json!(value).to_string(),
        OutputFormat::Text | OutputFormat::Yaml => value.to_string(),
    }
}
