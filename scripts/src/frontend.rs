//! Front-end synchronization step.
//!
//! After a deployment, keeps the front-end's address book and interface
//! descriptions consistent with the freshly deployed contract instances.
//! The whole step is gated by the `UPDATE_FRONT_END` environment flag and
//! aborts on the first failure; there is no retry.

use std::{env, path::PathBuf};

use anyhow::Context;
use tracing::{debug, info};

use crate::interface::ContractInterface;
use crate::registry::NetworkRegistry;

pub const UPDATE_FRONT_END_VAR: &str = "UPDATE_FRONT_END";
pub const CONSTANTS_DIR_VAR: &str = "FRONT_END_CONSTANTS_DIR";
pub const CHAIN_ID_VAR: &str = "CHAIN_ID";

/// Chain identifier of the local simulated chain.
pub const LOCAL_CHAIN_ID: &str = "31337";
/// File name of the address book inside the constants directory.
pub const MAPPING_FILE: &str = "networkMapping.json";

const DEFAULT_CONSTANTS_DIR: &str = "../frontend/constants";

/// Environment-derived configuration for the sync step.
#[derive(Debug, Clone)]
pub struct FrontEndConfig {
    /// Whether the step runs at all (`UPDATE_FRONT_END`).
    pub enabled: bool,
    /// Directory holding `networkMapping.json` and the interface files.
    pub constants_dir: PathBuf,
    /// Chain identifier the deployment targets.
    pub chain_id: String,
}

impl FrontEndConfig {
    pub fn from_env() -> Self {
        Self {
            enabled: truthy_env(UPDATE_FRONT_END_VAR),
            constants_dir: env::var(CONSTANTS_DIR_VAR)
                .unwrap_or_else(|_| DEFAULT_CONSTANTS_DIR.to_string())
                .into(),
            chain_id: env::var(CHAIN_ID_VAR).unwrap_or_else(|_| LOCAL_CHAIN_ID.to_string()),
        }
    }

    pub fn mapping_path(&self) -> PathBuf {
        self.constants_dir.join(MAPPING_FILE)
    }
}

fn truthy_env(var: &str) -> bool {
    matches!(
        env::var(var).unwrap_or_default().to_lowercase().as_str(),
        "true" | "1" | "yes"
    )
}

/// Register every deployed contract address under the configured chain id
/// and rewrite each contract's interface description. A no-op when the
/// step is disabled.
pub fn sync_front_end(
    config: &FrontEndConfig,
    deployed: &[(ContractInterface, String)],
) -> anyhow::Result<()> {
    if !config.enabled {
        debug!("front end update disabled, skipping");
        return Ok(());
    }

    info!(dir = %config.constants_dir.display(), "updating front end");
    let registry = NetworkRegistry::new(config.mapping_path());

    for (interface, address) in deployed {
        let contract = interface.contract_name.as_str();
        let added = registry
            .register(&config.chain_id, contract, address)
            .with_context(|| format!("failed to record {contract} deployment"))?;
        if added {
            info!(%contract, %address, chain_id = %config.chain_id, "recorded new deployment");
        } else {
            debug!(%contract, %address, "address already recorded");
        }

        let path = interface
            .write_to_dir(&config.constants_dir)
            .with_context(|| format!("failed to write interface for {contract}"))?;
        debug!(%contract, path = %path.display(), "interface written");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interface::marketplace_interface;
    use std::{fs, path::Path};

    fn config_in(dir: &Path, enabled: bool) -> FrontEndConfig {
        FrontEndConfig {
            enabled,
            constants_dir: dir.to_path_buf(),
            chain_id: LOCAL_CHAIN_ID.to_string(),
        }
    }

    #[test]
    fn disabled_step_touches_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path(), false);

        // No mapping file exists; a disabled run must still succeed.
        sync_front_end(&config, &[(marketplace_interface(), "0xAAA".into())]).unwrap();

        assert!(!config.mapping_path().exists());
        assert!(!dir.path().join("NftMarketplace.json").exists());
    }

    #[test]
    fn enabled_step_records_address_and_writes_interface() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path(), true);
        fs::write(config.mapping_path(), "{}").unwrap();

        sync_front_end(&config, &[(marketplace_interface(), "0xAAA".into())]).unwrap();

        let raw = fs::read_to_string(config.mapping_path()).unwrap();
        assert_eq!(raw, r#"{"31337":{"NftMarketplace":["0xAAA"]}}"#);
        assert!(dir.path().join("NftMarketplace.json").exists());
    }

    #[test]
    fn repeated_sync_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path(), true);
        fs::write(config.mapping_path(), "{}").unwrap();

        let deployed = [(marketplace_interface(), "0xAAA".to_string())];
        sync_front_end(&config, &deployed).unwrap();
        sync_front_end(&config, &deployed).unwrap();

        let raw = fs::read_to_string(config.mapping_path()).unwrap();
        assert_eq!(raw, r#"{"31337":{"NftMarketplace":["0xAAA"]}}"#);
    }

    #[test]
    fn missing_mapping_file_aborts_the_step() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path(), true);

        let result = sync_front_end(&config, &[(marketplace_interface(), "0xAAA".into())]);
        assert!(result.is_err());
    }
}
