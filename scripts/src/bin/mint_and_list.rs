//! Seeds a listing: mints a token, approves the marketplace and lists it
//! at the fixed demo price.

use anyhow::Result;
use tracing::info;

use marketplace_scripts::{buyer, host_env};
use odra::casper_types::U512;

#[cfg(feature = "livenet")]
use marketplace_scripts::{
    deployments::Deployments, frontend::FrontEndConfig, registry::NetworkRegistry,
};
#[cfg(not(feature = "livenet"))]
use {
    nft_marketplace::marketplace::NftMarketplaceHostRef,
    nft_marketplace::nft::BasicNftHostRef,
    odra::host::{Deployer, NoArgs},
};

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let env = host_env();

    #[cfg(feature = "livenet")]
    let (mut market, mut nft) = {
        env.set_gas(10_000_000_000u64);
        let config = FrontEndConfig::from_env();
        let registry = NetworkRegistry::new(config.mapping_path());
        let deployments = Deployments::from_registry(&registry, &config.chain_id)?;
        (deployments.marketplace(&env), deployments.basic_nft(&env))
    };

    // The in-process chain starts empty every run, so deploy fresh
    // contracts before seeding.
    #[cfg(not(feature = "livenet"))]
    let (mut market, mut nft) = (
        NftMarketplaceHostRef::deploy(&env, NoArgs),
        BasicNftHostRef::deploy(&env, NoArgs),
    );

    let token_id = buyer::mint_and_list(&mut market, &mut nft, U512::from(buyer::LISTING_PRICE))?;
    info!(token_id, "listing seeded");

    Ok(())
}
