//! One-shot marketplace actions: seed a listing, buy an item.
//!
//! These are the script bodies behind the `mint_and_list` and `buy_item`
//! binaries. Contract reverts are not translated; the raw failure is
//! propagated so the process exits non-zero with the original reason.

use anyhow::{anyhow, Result};
use odra::casper_types::U512;
use odra::host::{HostEnv, HostRef};
use tracing::info;

use nft_marketplace::marketplace::NftMarketplaceHostRef;
use nft_marketplace::nft::BasicNftHostRef;

use crate::deployments::Deployments;
use crate::frontend::LOCAL_CHAIN_ID;

/// Item the buyer script purchases.
pub const TOKEN_ID: u64 = 6;
/// Price used when seeding a listing: 100 CSPR in motes.
pub const LISTING_PRICE: u64 = 100_000_000_000;

/// Simulated block time advance, in milliseconds.
const BLOCK_TIME_MS: u64 = 1_000;

/// Mint a token to the caller, approve the marketplace and list it.
/// Returns the minted token id.
pub fn mint_and_list(
    market: &mut NftMarketplaceHostRef,
    nft: &mut BasicNftHostRef,
    price: U512,
) -> Result<u64> {
    let token_id = nft
        .try_mint()
        .map_err(|err| anyhow!("mint reverted: {err:?}"))?;
    nft.try_approve(*market.address(), token_id)
        .map_err(|err| anyhow!("approve reverted: {err:?}"))?;
    market
        .try_list_item(*nft.address(), token_id, price)
        .map_err(|err| anyhow!("list_item reverted: {err:?}"))?;

    info!(token_id, %price, "minted and listed");
    Ok(token_id)
}

/// Buy one item: fetch its listing, re-submit the stored price as the
/// payment, and wait for the call to complete. On the local simulated
/// chain one extra block is produced afterwards, since simulated chains
/// do not auto-mine; on any other chain that step is skipped.
pub fn buy_item(
    env: &HostEnv,
    deployments: &Deployments,
    chain_id: &str,
    token_id: u64,
) -> Result<()> {
    let mut market = deployments.marketplace(env);
    let nft_contract = deployments.basic_nft;

    let listing = market.get_listing(nft_contract, token_id);
    info!(token_id, price = %listing.price, "submitting purchase");

    market
        .with_tokens(listing.price)
        .try_buy_item(nft_contract, token_id)
        .map_err(|err| anyhow!("buy_item reverted: {err:?}"))?;
    info!(token_id, "bought NFT");

    if chain_id == LOCAL_CHAIN_ID {
        env.advance_block_time(BLOCK_TIME_MS);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use odra::host::{Deployer, NoArgs};

    struct Scenario {
        env: HostEnv,
        deployments: Deployments,
        market: NftMarketplaceHostRef,
        nft: BasicNftHostRef,
    }

    fn deploy() -> Scenario {
        let env = odra_test::env();
        let market = NftMarketplaceHostRef::deploy(&env, NoArgs);
        let nft = BasicNftHostRef::deploy(&env, NoArgs);
        let deployments = Deployments {
            marketplace: *market.address(),
            basic_nft: *nft.address(),
        };
        Scenario {
            env,
            deployments,
            market,
            nft,
        }
    }

    #[test]
    fn buys_the_seeded_listing_at_its_stored_price() {
        let mut scenario = deploy();
        let seller = scenario.env.get_account(0);
        let buyer = scenario.env.get_account(1);

        let token_id = mint_and_list(
            &mut scenario.market,
            &mut scenario.nft,
            U512::from(LISTING_PRICE),
        )
        .unwrap();

        scenario.env.set_caller(buyer);
        buy_item(
            &scenario.env,
            &scenario.deployments,
            LOCAL_CHAIN_ID,
            token_id,
        )
        .unwrap();

        assert_eq!(scenario.nft.owner_of(token_id), buyer);
        assert_eq!(
            scenario.market.get_proceeds(seller),
            U512::from(LISTING_PRICE)
        );
    }

    #[test]
    fn buying_an_unlisted_item_fails() {
        let scenario = deploy();
        let result = buy_item(
            &scenario.env,
            &scenario.deployments,
            LOCAL_CHAIN_ID,
            TOKEN_ID,
        );
        assert!(result.is_err());
    }

    #[test]
    fn surfaces_the_revert_when_price_moved() {
        let mut scenario = deploy();
        let buyer = scenario.env.get_account(1);

        let token_id = mint_and_list(
            &mut scenario.market,
            &mut scenario.nft,
            U512::from(LISTING_PRICE),
        )
        .unwrap();

        // Listing canceled between the fetch and the purchase of a second
        // script run: the contract revert is passed through unchanged.
        scenario
            .market
            .cancel_listing(scenario.deployments.basic_nft, token_id);

        scenario.env.set_caller(buyer);
        let result = buy_item(
            &scenario.env,
            &scenario.deployments,
            LOCAL_CHAIN_ID,
            token_id,
        );
        assert!(result.unwrap_err().to_string().contains("buy_item reverted"));
    }
}
