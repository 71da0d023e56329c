// drone-client/src/layer_store.rs
// Layer persistence - JSON key/value file standing in for browser local storage

use serde::{Deserialize, Serialize};
use shared::Layer;
use shared::layer::LAYER_KEY;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name of the store inside its directory
pub const STORE_FILE: &str = "storage.json";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
struct StoreFile {
    entries: BTreeMap<String, String>,
}

/// File-backed string map. Every write goes straight to disk.
#[derive(Debug, Clone)]
pub struct LayerStore {
    path: PathBuf,
    data: StoreFile,
}

impl LayerStore {
    /// Open the store in `dir`; a missing file is an empty store
    pub fn open(dir: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = dir.as_ref().join(STORE_FILE);
        let data = if path.exists() {
            let content = fs::read_to_string(&path)?;
            serde_json::from_str(&content)?
        } else {
            StoreFile::default()
        };
        Ok(Self { path, data })
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.data.entries.get(key).map(String::as_str)
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.data.entries.insert(key.to_string(), value.to_string());
        self.save()
    }

    pub fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        if self.data.entries.remove(key).is_some() {
            self.save()?;
        }
        Ok(())
    }

    /// Drop every entry and delete the file
    pub fn clear(&mut self) -> Result<(), StoreError> {
        self.data.entries.clear();
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(&self.data)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

/// Process-wide layer choice, persisted under the `"layer"` key
#[derive(Debug, Clone)]
pub struct LayerSelector {
    store: LayerStore,
    current: Layer,
}

impl LayerSelector {
    /// Initialize from the stored layer, or unselected when none is stored
    pub fn load(store: LayerStore) -> Self {
        let current = store.get(LAYER_KEY).map(Layer::from).unwrap_or_default();
        tracing::debug!(layer = %current, path = %store.path().display(), "layer loaded");
        Self { store, current }
    }

    pub fn current(&self) -> &Layer {
        &self.current
    }

    /// Change the layer and write it through. Any token is accepted.
    pub fn set(&mut self, layer: impl Into<Layer>) -> Result<(), StoreError> {
        let layer = layer.into();
        self.store.set(LAYER_KEY, layer.as_str())?;
        tracing::info!(layer = %layer, "layer selected");
        self.current = layer;
        Ok(())
    }

    /// Forget the stored layer; other keys stay
    pub fn clear(&mut self) -> Result<(), StoreError> {
        self.store.remove(LAYER_KEY)?;
        self.current = Layer::default();
        Ok(())
    }
}
