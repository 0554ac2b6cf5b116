//! The front-end's deployed-address book.
//!
//! `networkMapping.json` maps chain identifier -> contract name -> list of
//! deployed addresses, first deployment first. The file is shared state
//! across independent script invocations, so it is handled as one explicit
//! load/merge/save operation and replaced atomically on save.

use std::{
    collections::BTreeMap,
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

/// chain id -> contract name -> deployed addresses, insertion order kept
pub type NetworkMapping = BTreeMap<String, BTreeMap<String, Vec<String>>>;

#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("network mapping file not found at {} (seed it with `{{}}` first)", .0.display())]
    Missing(PathBuf),
    #[error("failed to access {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{} does not contain valid JSON", path.display())]
    InvalidJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to serialize network mapping")]
    Serialize(#[source] serde_json::Error),
}

/// Key-value store over the network mapping file.
pub struct NetworkRegistry {
    path: PathBuf,
}

impl NetworkRegistry {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the full mapping. The file must already exist and hold valid
    /// JSON (possibly `{}`).
    pub fn load(&self) -> Result<NetworkMapping, RegistryError> {
        let raw = fs::read_to_string(&self.path).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                RegistryError::Missing(self.path.clone())
            } else {
                RegistryError::Io {
                    path: self.path.clone(),
                    source,
                }
            }
        })?;
        serde_json::from_str(&raw).map_err(|source| RegistryError::InvalidJson {
            path: self.path.clone(),
            source,
        })
    }

    /// Record a deployment: append the address to the chain/contract list
    /// unless it is already present, creating the entry if needed, as one
    /// load/merge/save step. Returns whether the address was newly added.
    pub fn register(
        &self,
        chain_id: &str,
        contract: &str,
        address: &str,
    ) -> Result<bool, RegistryError> {
        let mut mapping = self.load()?;
        let added = Self::merge(&mut mapping, chain_id, contract, address);
        self.save(&mapping)?;
        Ok(added)
    }

    /// Append-if-absent on an in-memory mapping.
    pub fn merge(
        mapping: &mut NetworkMapping,
        chain_id: &str,
        contract: &str,
        address: &str,
    ) -> bool {
        let addresses = mapping
            .entry(chain_id.to_string())
            .or_default()
            .entry(contract.to_string())
            .or_default();
        if addresses.iter().any(|known| known == address) {
            false
        } else {
            addresses.push(address.to_string());
            true
        }
    }

    /// Serialize without pretty-printing and replace the file atomically:
    /// write to a temporary file in the same directory, then rename over
    /// the original, so a crash mid-write cannot truncate the mapping.
    pub fn save(&self, mapping: &NetworkMapping) -> Result<(), RegistryError> {
        let raw = serde_json::to_string(mapping).map_err(RegistryError::Serialize)?;

        let dir = self
            .path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));

        let io_err = |source: io::Error| RegistryError::Io {
            path: self.path.clone(),
            source,
        };

        let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(io_err)?;
        tmp.write_all(raw.as_bytes()).map_err(io_err)?;
        tmp.persist(&self.path).map_err(|err| io_err(err.error))?;
        Ok(())
    }
}
