use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

use crate::domain::UserId;

pub const DEFAULT_USER_ENV: &str = "SHOP_DEFAULT_USER";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// Application settings, read from the `[shop]` table of a TOML file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ShopConfig {
    /// Identity recorded on orders when the caller has none of its own.
    pub default_user: String,
    /// Capacity of every actor mailbox.
    pub mailbox_size: usize,
    /// Demo products created at startup.
    pub seed_products: usize,
    pub page_size: usize,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            default_user: "shopper@example.com".to_string(),
            mailbox_size: 100,
            seed_products: 0,
            page_size: crate::domain::DEFAULT_PAGE_SIZE,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    shop: ShopConfig,
}

impl ShopConfig {
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str::<ConfigFile>(content).map(|file| file.shop)
    }

    /// Loads `path` if given, otherwise defaults; then applies environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => {
                let display = path.display().to_string();
                let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
                    path: display.clone(),
                    source,
                })?;
                Self::from_toml(&content).map_err(|source| ConfigError::Parse { path: display, source })?
            }
            None => Self::default(),
        };
        Ok(config.with_env_overrides(|key| std::env::var(key).ok()))
    }

    fn with_env_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(user) = lookup(DEFAULT_USER_ENV).filter(|user| !user.is_empty()) {
            self.default_user = user;
        }
        self
    }

    pub fn default_user_id(&self) -> UserId {
        UserId::new(self.default_user.clone())
    }
}
