//! Typed deployment registry.
//!
//! Resolves contract addresses recorded in the network registry into
//! typed host references, so call sites never look contracts up by name
//! at runtime.

use anyhow::{bail, Context};
use odra::casper_types::{account::AccountHash, ContractPackageHash};
use odra::host::{HostEnv, HostRefLoader};
use odra::Address;

use nft_marketplace::marketplace::NftMarketplaceHostRef;
use nft_marketplace::nft::BasicNftHostRef;

use crate::registry::NetworkRegistry;

pub const MARKETPLACE_CONTRACT: &str = "NftMarketplace";
pub const BASIC_NFT_CONTRACT: &str = "BasicNft";

/// Addresses of one deployed contract set on a single chain.
#[derive(Debug, Clone, Copy)]
pub struct Deployments {
    pub marketplace: Address,
    pub basic_nft: Address,
}

impl Deployments {
    /// Resolve the most recent deployment of each contract for a chain id.
    pub fn from_registry(registry: &NetworkRegistry, chain_id: &str) -> anyhow::Result<Self> {
        let mapping = registry.load()?;
        let chain = mapping
            .get(chain_id)
            .with_context(|| format!("no deployments recorded for chain {chain_id}"))?;

        let latest = |contract: &str| -> anyhow::Result<Address> {
            let raw = chain
                .get(contract)
                .and_then(|addresses| addresses.last())
                .with_context(|| format!("no {contract} deployment on chain {chain_id}"))?;
            parse_address(raw)
        };

        Ok(Self {
            marketplace: latest(MARKETPLACE_CONTRACT)?,
            basic_nft: latest(BASIC_NFT_CONTRACT)?,
        })
    }

    pub fn marketplace(&self, env: &HostEnv) -> NftMarketplaceHostRef {
        NftMarketplaceHostRef::load(env, self.marketplace)
    }

    pub fn basic_nft(&self, env: &HostEnv) -> BasicNftHostRef {
        BasicNftHostRef::load(env, self.basic_nft)
    }
}

/// Render an address in the casper formatted-string notation used in
/// `networkMapping.json`.
pub fn format_address(address: &Address) -> String {
    match address {
        Address::Account(hash) => hash.to_formatted_string(),
        Address::Contract(package) => package.to_formatted_string(),
    }
}

/// Parse an address from the formatted-string notation.
pub fn parse_address(raw: &str) -> anyhow::Result<Address> {
    if let Ok(hash) = AccountHash::from_formatted_str(raw) {
        return Ok(Address::Account(hash));
    }
    if let Ok(package) = ContractPackageHash::from_formatted_str(raw) {
        return Ok(Address::Contract(package));
    }
    bail!("unrecognized address format: {raw}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontend::LOCAL_CHAIN_ID;
    use odra::host::{Deployer, HostRef, NoArgs};
    use std::fs;

    #[test]
    fn address_strings_round_trip() {
        let env = odra_test::env();
        let account = env.get_account(0);
        let contract = BasicNftHostRef::deploy(&env, NoArgs);

        for address in [account, *contract.address()] {
            let raw = format_address(&address);
            assert_eq!(parse_address(&raw).unwrap(), address);
        }
    }

    #[test]
    fn rejects_garbage_address() {
        assert!(parse_address("0xAAA").is_err());
    }

    #[test]
    fn resolves_latest_recorded_deployment() {
        let env = odra_test::env();
        let market = NftMarketplaceHostRef::deploy(&env, NoArgs);
        let nft = BasicNftHostRef::deploy(&env, NoArgs);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("networkMapping.json");
        fs::write(&path, "{}").unwrap();
        let registry = NetworkRegistry::new(&path);

        // A stale first deployment followed by the current one.
        let stale = NftMarketplaceHostRef::deploy(&env, NoArgs);
        for (name, address) in [
            (MARKETPLACE_CONTRACT, *stale.address()),
            (MARKETPLACE_CONTRACT, *market.address()),
            (BASIC_NFT_CONTRACT, *nft.address()),
        ] {
            registry
                .register(LOCAL_CHAIN_ID, name, &format_address(&address))
                .unwrap();
        }

        let deployments = Deployments::from_registry(&registry, LOCAL_CHAIN_ID).unwrap();
        assert_eq!(deployments.marketplace, *market.address());
        assert_eq!(deployments.basic_nft, *nft.address());
    }

    #[test]
    fn unknown_chain_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("networkMapping.json");
        fs::write(&path, "{}").unwrap();

        let registry = NetworkRegistry::new(&path);
        assert!(Deployments::from_registry(&registry, "5").is_err());
    }
}
