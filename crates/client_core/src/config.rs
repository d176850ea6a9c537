use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{anyhow, Context};
use serde::Deserialize;
use shared::domain::DEFAULT_CONTACT_EMAIL;

use crate::transport::search_endpoint;

pub const DEFAULT_SETTINGS_PATH: &str = "client.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ClientSettings {
    pub backend_url: String,
    pub storage_url: String,
    pub contact_email: String,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            backend_url: "http://127.0.0.1:8000".into(),
            storage_url: default_storage_url(),
            contact_email: DEFAULT_CONTACT_EMAIL.into(),
        }
    }
}

impl ClientSettings {
    /// Fails when the backend base URL cannot carry a `/search` path.
    pub fn validate(&self) -> anyhow::Result<()> {
        let endpoint = search_endpoint(&self.backend_url)
            .with_context(|| format!("invalid backend url '{}'", self.backend_url))?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(anyhow!(
                "backend url '{}' must use http or https",
                self.backend_url
            ));
        }
        Ok(())
    }
}

fn default_storage_url() -> String {
    let path = dirs::data_local_dir()
        .map(|base| base.join("trade_search").join("client.sqlite3"))
        .unwrap_or_else(|| PathBuf::from("./data/client.sqlite3"));
    format!("sqlite://{}", path.to_string_lossy().replace('\\', "/"))
}

pub fn load_settings() -> ClientSettings {
    load_settings_from(Path::new(DEFAULT_SETTINGS_PATH), |key| {
        std::env::var(key).ok()
    })
}

/// File values override defaults; environment values override the file.
pub fn load_settings_from(
    path: &Path,
    env: impl Fn(&str) -> Option<String>,
) -> ClientSettings {
    let mut settings = ClientSettings::default();

    if let Ok(raw) = fs::read_to_string(path) {
        match toml::from_str::<HashMap<String, String>>(&raw) {
            Ok(file_cfg) => {
                if let Some(v) = file_cfg.get("backend_url") {
                    settings.backend_url = v.clone();
                }
                if let Some(v) = file_cfg.get("storage_url") {
                    settings.storage_url = v.clone();
                }
                if let Some(v) = file_cfg.get("contact_email") {
                    settings.contact_email = v.clone();
                }
            }
            Err(error) => {
                tracing::warn!(path = %path.display(), %error, "ignoring unreadable client settings file");
            }
        }
    }

    if let Some(v) = env("BACKEND_URL") {
        settings.backend_url = v;
    }
    if let Some(v) = env("APP__BACKEND_URL") {
        settings.backend_url = v;
    }

    if let Some(v) = env("STORAGE_URL") {
        settings.storage_url = v;
    }
    if let Some(v) = env("APP__STORAGE_URL") {
        settings.storage_url = v;
    }

    if let Some(v) = env("CONTACT_EMAIL") {
        settings.contact_email = v;
    }
    if let Some(v) = env("APP__CONTACT_EMAIL") {
        settings.contact_email = v;
    }

    settings
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
