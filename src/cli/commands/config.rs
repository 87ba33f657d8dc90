//! `plm config` command - Show effective configuration

use clap::Subcommand;
use console::style;
use miette::{IntoDiagnostic, Result};

use crate::cli::{GlobalOpts, OutputFormat, Session};
use crate::core::Config;

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration values
    Show(ShowArgs),

    /// Show paths to configuration files
    Path,

    /// List all available configuration keys
    Keys,
}

#[derive(clap::Args, Debug)]
pub struct ShowArgs {
    /// Show only this key's value
    pub key: Option<String>,
}

/// Valid configuration keys
const VALID_KEYS: &[(&str, &str)] = &[
    ("author", "Default owner for new decisions and styles"),
    ("default_format", "Default output format (auto, yaml, json, tsv, csv, md)"),
    ("default_style", "Style used when --style is not given"),
    ("currency_symbol", "Symbol printed in front of cost figures"),
    ("precision", "Decimal places for cost figures"),
];

pub fn run(cmd: ConfigCommands, global: &GlobalOpts) -> Result<()> {
    let session = Session::open(global)?;
    match cmd {
        ConfigCommands::Show(args) => run_show(&session, args),
        ConfigCommands::Path => run_path(&session),
        ConfigCommands::Keys => run_keys(),
    }
}

fn run_show(session: &Session, args: ShowArgs) -> Result<()> {
    let config = &session.config;

    if let Some(key) = &args.key {
        return match get_config_value(config, key) {
            Some(v) => {
                println!("{}", v);
                Ok(())
            }
            None if VALID_KEYS.iter().any(|(k, _)| *k == key.as_str()) => {
                Err(miette::miette!("Key '{}' is not set", key))
            }
            None => Err(miette::miette!(
                help = "run 'plm config keys' to list valid keys",
                "Unknown key '{}'",
                key
            )),
        };
    }

    match session.format() {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(config).into_diagnostic()?);
        }
        OutputFormat::Yaml => {
            print!("{}", serde_yml::to_string(config).into_diagnostic()?);
        }
        _ => {
            println!("{}", style("Effective Configuration").bold().underlined());
            println!();
            for (key, _) in VALID_KEYS {
                print_config_value(key, get_config_value(config, key).as_deref());
            }

            println!();
            println!("{}", style("Config Sources (in priority order):").dim());
            println!("  1. Environment variables (PLM_AUTHOR, PLM_STYLE)");
            println!("  2. Project config (.plm/config.yaml)");
            println!("  3. Global config (~/.config/plm/config.yaml)");
        }
    }
    Ok(())
}

fn get_config_value(config: &Config, key: &str) -> Option<String> {
    match key {
        "author" => config.author.clone(),
        "default_format" => config.default_format.clone(),
        "default_style" => config.default_style.clone(),
        "currency_symbol" => config.currency_symbol.clone(),
        "precision" => config.precision.map(|p| p.to_string()),
        _ => None,
    }
}

fn print_config_value(key: &str, value: Option<&str>) {
    match value {
        Some(v) => println!("  {:<16} {}", style(key).cyan(), v),
        None => println!("  {:<16} {}", style(key).cyan(), style("(not set)").dim()),
    }
}

fn run_path(session: &Session) -> Result<()> {
    match Config::global_config_path() {
        Some(path) => {
            let exists = if path.exists() { "" } else { " (not created)" };
            println!("global:  {}{}", path.display(), style(exists).dim());
        }
        None => println!("global:  {}", style("(no config directory)").dim()),
    }

    match session.project() {
        Some(project) => println!(
            "project: {}",
            Config::project_config_path(project).display()
        ),
        None => println!("project: {}", style("(not in a workspace)").dim()),
    }
    Ok(())
}

fn run_keys() -> Result<()> {
    for (key, desc) in VALID_KEYS {
        println!("  {:<16} {}", style(key).cyan(), desc);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_config_value() {
        let config = Config {
            precision: Some(2),
            default_style: Some("STYLE-A".into()),
            ..Default::default()
        };
        assert_eq!(get_config_value(&config, "precision").as_deref(), Some("2"));
        assert_eq!(get_config_value(&config, "default_style").as_deref(), Some("STYLE-A"));
        assert_eq!(get_config_value(&config, "author"), None);
        assert_eq!(get_config_value(&config, "editor"), None);
    }

    #[test]
    fn test_every_key_is_readable() {
        let config = Config {
            author: Some("a".into()),
            default_format: Some("json".into()),
            default_style: Some("STYLE-A".into()),
            currency_symbol: Some("€".into()),
            precision: Some(4),
        };
        for (key, _) in VALID_KEYS {
            assert!(get_config_value(&config, key).is_some(), "{key} not mapped");
        }
    }
}
