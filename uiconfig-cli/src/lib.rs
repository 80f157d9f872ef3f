//! Admin command line for uiconfig storage.
//!
//! Parses arguments, layers configuration (file, then environment, then
//! flags) and runs one command against the storage facades. Every command
//! yields a JSON value for the binary to print.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::{Value, json};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;
use uiconfig_client::MemoryDocumentClient;
use uiconfig_model::{Logo, Package, PackageType, Theme, UserSetting};
use uiconfig_store::{ServicesConfig, UiConfigStorage};

#[derive(Parser, Debug)]
#[command(name = "uiconfig")]
#[command(about = "Inspect and edit uiconfig storage")]
pub struct Cli {
    /// Enable verbose debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to a JSON services config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Storage adapter base URL (overrides config and environment)
    #[arg(long, global = true)]
    pub adapter_url: Option<String>,

    /// Regional-map key merged into theme reads
    #[arg(long, global = true)]
    pub maps_key: Option<String>,

    /// Use a throwaway in-memory store instead of the storage adapter.
    /// Every invocation starts empty, so a `set` is not visible to a later `get`.
    #[arg(long, global = true)]
    pub in_memory: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Probe the document service
    Status,
    /// Read or replace the UI theme
    Theme {
        #[command(subcommand)]
        action: ThemeAction,
    },
    /// Read or replace the branding logo
    Logo {
        #[command(subcommand)]
        action: LogoAction,
    },
    /// Read or replace one user's settings
    UserSetting {
        #[command(subcommand)]
        action: UserSettingAction,
    },
    /// Manage device groups
    DeviceGroups {
        #[command(subcommand)]
        action: DeviceGroupAction,
    },
    /// Manage deployment packages
    Packages {
        #[command(subcommand)]
        action: PackageAction,
    },
    /// List recorded configuration types
    ConfigTypes,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ThemeAction {
    Get,
    /// Replace the theme with a JSON object (`@path` reads a file)
    Set { theme: String },
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum LogoAction {
    Get,
    Set {
        /// Image payload, usually base64 (`@path` reads a file)
        #[arg(long)]
        image: String,
        #[arg(long = "type", default_value = Logo::DEFAULT_TYPE)]
        image_type: String,
        /// Display name; omitted keeps the current one
        #[arg(long)]
        name: Option<String>,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum UserSettingAction {
    Get { user_id: String },
    /// Replace a user's settings with a JSON value (`@path` reads a file)
    Set { user_id: String, settings: String },
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum DeviceGroupAction {
    List,
    Get { id: String },
    Delete { id: String },
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum PackageAction {
    /// List packages, optionally filtered
    List {
        #[arg(long, default_value = "")]
        package_type: String,
        #[arg(long, default_value = "")]
        config_type: String,
    },
    /// Add a package (`@path` reads the content from a file)
    Add {
        #[arg(long)]
        name: String,
        #[arg(long = "type")]
        package_type: String,
        #[arg(long, default_value = "")]
        config_type: String,
        content: String,
    },
    Delete { id: String },
}

/// Reads an argument that is either literal text or `@path`.
pub fn read_text_arg(arg: &str) -> Result<String> {
    match arg.strip_prefix('@') {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("failed to read {path}"))
        }
        None => Ok(arg.to_string()),
    }
}

fn read_json_arg(arg: &str) -> Result<Value> {
    let text = read_text_arg(arg)?;
    serde_json::from_str(&text).context("argument is not valid JSON")
}

/// Builds the services config: file (or defaults), environment, then flags.
pub fn resolve_config(cli: &Cli) -> Result<ServicesConfig> {
    let config = match &cli.config {
        Some(path) => ServicesConfig::from_json_file(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => ServicesConfig::default(),
    };

    let mut config = config.with_env_overrides();
    if let Some(url) = &cli.adapter_url {
        config.storage_adapter.base_url = url.clone();
    }
    if let Some(key) = &cli.maps_key {
        config.azure_maps_key = key.clone();
    }

    debug!(
        "Resolved config: adapter={} timeout={}s catalog_max_attempts={} maps_key_set={}",
        config.storage_adapter.base_url,
        config.storage_adapter.timeout_secs,
        config.catalog_max_attempts,
        !config.azure_maps_key.is_empty()
    );
    Ok(config)
}

pub fn open_storage(cli: &Cli, config: &ServicesConfig) -> Result<UiConfigStorage> {
    if cli.in_memory {
        return Ok(UiConfigStorage::new(
            Arc::new(MemoryDocumentClient::new()),
            config,
        ));
    }
    UiConfigStorage::connect(config).context("failed to set up storage adapter client")
}

/// Runs one command and returns its JSON result.
pub async fn execute(command: &Command, storage: &UiConfigStorage) -> Result<Value> {
    let output = match command {
        Command::Status => serde_json::to_value(storage.ping().await?)?,

        Command::Theme { action } => match action {
            ThemeAction::Get => storage.theme.get().await?.into_value(),
            ThemeAction::Set { theme } => {
                let theme = Theme::from_value(read_json_arg(theme)?)?;
                storage.theme.set(theme).await?.into_value()
            }
        },

        Command::Logo { action } => match action {
            LogoAction::Get => serde_json::to_value(storage.logo.get().await?)?,
            LogoAction::Set {
                image,
                image_type,
                name,
            } => {
                let logo = Logo::new(read_text_arg(image)?, image_type.clone(), name.clone());
                serde_json::to_value(storage.logo.set(logo).await?)?
            }
        },

        Command::UserSetting { action } => match action {
            UserSettingAction::Get { user_id } => {
                storage.user_settings.get(user_id).await?.into_value()
            }
            UserSettingAction::Set { user_id, settings } => {
                let setting = UserSetting::from(read_json_arg(settings)?);
                storage.user_settings.set(user_id, setting).await?.into_value()
            }
        },

        Command::DeviceGroups { action } => match action {
            DeviceGroupAction::List => serde_json::to_value(storage.device_groups.get_all().await?)?,
            DeviceGroupAction::Get { id } => {
                serde_json::to_value(storage.device_groups.get(id).await?)?
            }
            DeviceGroupAction::Delete { id } => {
                storage.device_groups.delete(id).await?;
                json!({ "deleted": id })
            }
        },

        Command::Packages { action } => match action {
            PackageAction::List {
                package_type,
                config_type,
            } => serde_json::to_value(
                storage
                    .packages
                    .get_filtered(package_type, config_type)
                    .await?,
            )?,
            PackageAction::Add {
                name,
                package_type,
                config_type,
                content,
            } => {
                let package_type: PackageType = package_type.parse()?;
                let package = Package::new(
                    name.clone(),
                    package_type,
                    config_type.clone(),
                    read_text_arg(content)?,
                );
                serde_json::to_value(storage.packages.add(package).await?)?
            }
            PackageAction::Delete { id } => {
                storage.packages.delete(id).await?;
                json!({ "deleted": id })
            }
        },

        Command::ConfigTypes => {
            serde_json::to_value(storage.packages.get_all_config_types().await?)?
        }
    };

    Ok(output)
}
