//! One-shot purchase of the fixed demo item. Exits 0 on success, 1 on any
//! failure, with the raw error printed to stderr.

use anyhow::Result;

use marketplace_scripts::frontend::FrontEndConfig;
use marketplace_scripts::{buyer, host_env};

#[cfg(feature = "livenet")]
use marketplace_scripts::{deployments::Deployments, registry::NetworkRegistry};
#[cfg(not(feature = "livenet"))]
use {
    anyhow::anyhow,
    marketplace_scripts::deployments::Deployments,
    nft_marketplace::marketplace::NftMarketplaceHostRef,
    nft_marketplace::nft::BasicNftHostRef,
    odra::casper_types::U512,
    odra::host::{Deployer, HostRef, NoArgs},
};

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let env = host_env();
    let config = FrontEndConfig::from_env();

    #[cfg(feature = "livenet")]
    let deployments = {
        let registry = NetworkRegistry::new(config.mapping_path());
        Deployments::from_registry(&registry, &config.chain_id)?
    };

    // The in-process chain starts empty every run: deploy fresh contracts
    // and seed tokens up to the fixed item id, then buy as a second
    // account.
    #[cfg(not(feature = "livenet"))]
    let deployments = {
        let mut market = NftMarketplaceHostRef::deploy(&env, NoArgs);
        let mut nft = BasicNftHostRef::deploy(&env, NoArgs);
        for _ in 0..buyer::TOKEN_ID {
            nft.try_mint()
                .map_err(|err| anyhow!("mint reverted: {err:?}"))?;
        }
        buyer::mint_and_list(&mut market, &mut nft, U512::from(buyer::LISTING_PRICE))?;

        env.set_caller(env.get_account(1));
        Deployments {
            marketplace: *market.address(),
            basic_nft: *nft.address(),
        }
    };

    buyer::buy_item(&env, &deployments, &config.chain_id, buyer::TOKEN_ID)?;

    Ok(())
}
