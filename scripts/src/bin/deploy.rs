//! Deploys the marketplace contracts and, when `UPDATE_FRONT_END` is set,
//! synchronizes the front-end address book and interface files.

use anyhow::Result;
use tracing::info;

use marketplace_scripts::deployments::format_address;
use marketplace_scripts::frontend::{sync_front_end, FrontEndConfig};
use marketplace_scripts::{host_env, interface};
use nft_marketplace::marketplace::NftMarketplaceHostRef;
use nft_marketplace::nft::BasicNftHostRef;
use odra::host::{Deployer, HostRef, NoArgs};

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let env = host_env();
    #[cfg(feature = "livenet")]
    env.set_gas(400_000_000_000u64);

    let market = NftMarketplaceHostRef::deploy(&env, NoArgs);
    let nft = BasicNftHostRef::deploy(&env, NoArgs);
    info!(
        marketplace = %format_address(market.address()),
        basic_nft = %format_address(nft.address()),
        "contracts deployed"
    );

    let config = FrontEndConfig::from_env();
    sync_front_end(
        &config,
        &[
            (
                interface::marketplace_interface(),
                format_address(market.address()),
            ),
            (
                interface::basic_nft_interface(),
                format_address(nft.address()),
            ),
        ],
    )?;

    Ok(())
}
