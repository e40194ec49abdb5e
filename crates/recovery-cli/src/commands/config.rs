use std::path::PathBuf;

use clap::Subcommand;
use recovery_core::EngineConfig;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Get a config value
    Get {
        /// Config key (e.g. "savings.interest_surcharge")
        key: String,
        /// Config file (defaults to ~/.config/recovery/config.toml)
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// New value
        value: String,
        /// Config file (defaults to ~/.config/recovery/config.toml)
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// List all config values
    List {
        /// Config file (defaults to ~/.config/recovery/config.toml)
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Reset config to defaults
    Reset {
        /// Config file (defaults to ~/.config/recovery/config.toml)
        #[arg(long)]
        file: Option<PathBuf>,
    },
}

fn config_path(file: Option<PathBuf>) -> Result<PathBuf, Box<dyn std::error::Error>> {
    match file {
        Some(path) => Ok(path),
        None => Ok(EngineConfig::path()?),
    }
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Get { key, file } => {
            let config = EngineConfig::load_from(&config_path(file)?)?;
            match config.get(&key) {
                Some(value) => println!("{value}"),
                None => return Err(format!("unknown key: {key}").into()),
            }
        }
        ConfigAction::Set { key, value, file } => {
            let path = config_path(file)?;
            let mut config = EngineConfig::load_from(&path)?;
            config.set(&key, &value)?;
            config.save_to(&path)?;
            println!("ok");
        }
        ConfigAction::List { file } => {
            let config = EngineConfig::load_from(&config_path(file)?)?;
            println!("{}", toml::to_string_pretty(&config)?);
        }
        ConfigAction::Reset { file } => {
            EngineConfig::default().save_to(&config_path(file)?)?;
            println!("config reset to defaults");
        }
    }
    Ok(())
}
