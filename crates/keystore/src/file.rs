//! TOML-file-backed key store.

use crate::KeyStore;
use anyhow::{Context, Result};
use ecore::ProviderId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Config directory name under the platform config dir.
const CONFIG_DIR: &str = "easel";
/// Key file name inside the config directory.
const KEYS_FILE: &str = "keys.toml";

/// Resolve the default key file path (`~/.config/easel/keys.toml` on unix).
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .expect("no platform config directory")
        .join(CONFIG_DIR)
        .join(KEYS_FILE)
}

/// On-disk layout: a single `[keys]` table.
#[derive(Debug, Default, Serialize, Deserialize)]
struct KeyFile {
    #[serde(default)]
    keys: BTreeMap<ProviderId, String>,
}

/// Durable key store persisting to a TOML file.
///
/// The whole map is rewritten on every `set`; a missing file reads as an
/// empty store.
#[derive(Debug)]
pub struct TomlKeyStore {
    path: PathBuf,
    keys: BTreeMap<ProviderId, String>,
}

impl TomlKeyStore {
    /// Open the store at a path, loading any existing keys.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let keys = match std::fs::read_to_string(&path) {
            Ok(contents) => {
                let file: KeyFile = toml::from_str(&contents)
                    .with_context(|| format!("failed to parse {}", path.display()))?;
                file.keys
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                return Err(e).with_context(|| format!("failed to read {}", path.display()));
            }
        };
        Ok(Self { path, keys })
    }

    /// Open the store at the default platform path.
    pub fn open_default() -> Result<Self> {
        Self::open(default_path())
    }

    /// The file this store persists to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let contents = toml::to_string_pretty(&KeyFile {
            keys: self.keys.clone(),
        })
        .context("failed to serialize key file")?;
        std::fs::write(&self.path, contents)
            .with_context(|| format!("failed to write {}", self.path.display()))
    }
}

impl KeyStore for TomlKeyStore {
    fn get(&self, provider: ProviderId) -> Option<&str> {
        self.keys.get(&provider).map(String::as_str)
    }

    fn set(&mut self, provider: ProviderId, secret: &str) -> Result<Option<String>> {
        crate::validate(secret)?;
        let prev = self.keys.insert(provider, secret.to_owned());
        self.persist()?;
        Ok(prev)
    }

    fn entries(&self) -> Vec<ProviderId> {
        self.keys.keys().copied().collect()
    }
}
