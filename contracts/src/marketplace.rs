//! NFT Marketplace - Main Contract Module
//!
//! This module implements the core marketplace functionality: listing
//! NFTs for sale, buying them, updating or canceling listings, and
//! withdrawing sale proceeds.

use odra::prelude::*;
use odra::casper_types::U512;
use odra::prelude::{Address, Mapping};
use odra::ContractRef;

use crate::errors::Error;
use crate::events::{ItemBought, ItemCanceled, ItemListed};
use crate::nft::BasicNftContractRef;
use crate::types::Listing;

/// Main marketplace contract module
#[odra::module(events = [ItemListed, ItemBought, ItemCanceled], errors = Error)]
pub struct NftMarketplace {
    /// Active listings keyed by (NFT contract, token ID).
    /// A default entry (price zero) means "not listed".
    listings: Mapping<(Address, u64), Listing>,
    /// Withdrawable sale proceeds per seller
    proceeds: Mapping<Address, U512>,
}

#[odra::module]
impl NftMarketplace {
    // ============================================
    // Core Entry Points
    // ============================================

    /// List an owned NFT for sale.
    ///
    /// The caller must own the token and the marketplace must be the
    /// token's approved operator, so the sale can be settled later
    /// without further action from the seller.
    ///
    /// # Arguments
    /// * `nft_contract` - Address of the NFT contract
    /// * `token_id` - Token to list
    /// * `price` - Asking price in motes, strictly positive
    pub fn list_item(&mut self, nft_contract: Address, token_id: u64, price: U512) {
        let caller = self.env().caller();
        let key = (nft_contract, token_id);

        if self.listings.get_or_default(&key).is_active() {
            self.env().revert(Error::AlreadyListed);
        }

        let nft = BasicNftContractRef::new(self.env(), nft_contract);
        if nft.owner_of(token_id) != caller {
            self.env().revert(Error::NotOwner);
        }
        if price == U512::zero() {
            self.env().revert(Error::PriceMustBeAboveZero);
        }
        if nft.get_approved(token_id) != Some(self.env().self_address()) {
            self.env().revert(Error::NotApprovedForMarketplace);
        }

        self.listings.set(
            &key,
            Listing {
                price,
                seller: caller,
            },
        );

        self.env().emit_event(ItemListed {
            seller: caller,
            nft_contract,
            token_id,
            price,
        });
    }

    /// Buy a listed NFT.
    ///
    /// The attached payment must cover the asking price. The full
    /// attached amount is credited to the seller's proceeds, the listing
    /// is cleared, and the token is transferred to the buyer.
    #[odra(payable)]
    pub fn buy_item(&mut self, nft_contract: Address, token_id: u64) {
        let caller = self.env().caller();
        let attached_value = self.env().attached_value();
        let key = (nft_contract, token_id);

        let listing = self.listings.get_or_default(&key);
        if !listing.is_active() {
            self.env().revert(Error::NotListed);
        }
        if attached_value < listing.price {
            self.env().revert(Error::PriceNotMet);
        }

        // Credit proceeds and clear the listing before the external
        // transfer (checks-effects-interactions).
        let seller_proceeds = self.proceeds.get_or_default(&listing.seller) + attached_value;
        self.proceeds.set(&listing.seller, seller_proceeds);
        self.listings.set(&key, Listing::default());

        let mut nft = BasicNftContractRef::new(self.env(), nft_contract);
        nft.transfer_from(listing.seller, caller, token_id);

        self.env().emit_event(ItemBought {
            buyer: caller,
            nft_contract,
            token_id,
            price: listing.price,
        });
    }

    /// Cancel an active listing.
    ///
    /// Only the current owner of the token may cancel.
    pub fn cancel_listing(&mut self, nft_contract: Address, token_id: u64) {
        let caller = self.env().caller();
        let key = (nft_contract, token_id);

        let nft = BasicNftContractRef::new(self.env(), nft_contract);
        if nft.owner_of(token_id) != caller {
            self.env().revert(Error::NotOwner);
        }
        if !self.listings.get_or_default(&key).is_active() {
            self.env().revert(Error::NotListed);
        }

        self.listings.set(&key, Listing::default());

        self.env().emit_event(ItemCanceled {
            seller: caller,
            nft_contract,
            token_id,
        });
    }

    /// Update the asking price of an active listing.
    ///
    /// A zero price would turn the entry back into "not listed", so it
    /// is rejected the same way as on `list_item`.
    pub fn update_listing(&mut self, nft_contract: Address, token_id: u64, new_price: U512) {
        let caller = self.env().caller();
        let key = (nft_contract, token_id);

        if !self.listings.get_or_default(&key).is_active() {
            self.env().revert(Error::NotListed);
        }
        let nft = BasicNftContractRef::new(self.env(), nft_contract);
        if nft.owner_of(token_id) != caller {
            self.env().revert(Error::NotOwner);
        }
        if new_price == U512::zero() {
            self.env().revert(Error::PriceMustBeAboveZero);
        }

        self.listings.set(
            &key,
            Listing {
                price: new_price,
                seller: caller,
            },
        );

        self.env().emit_event(ItemListed {
            seller: caller,
            nft_contract,
            token_id,
            price: new_price,
        });
    }

    /// Withdraw accumulated sale proceeds.
    pub fn withdraw_proceeds(&mut self) {
        let caller = self.env().caller();

        let proceeds = self.proceeds.get_or_default(&caller);
        if proceeds == U512::zero() {
            self.env().revert(Error::NoProceeds);
        }

        // Reset proceeds before transfer (CEI pattern)
        self.proceeds.set(&caller, U512::zero());

        self.env().transfer_tokens(&caller, &proceeds);
    }

    // ============================================
    // View Functions
    // ============================================

    /// Get the listing for a token; a zero price means "not listed".
    pub fn get_listing(&self, nft_contract: Address, token_id: u64) -> Listing {
        self.listings.get_or_default(&(nft_contract, token_id))
    }

    /// Get a seller's withdrawable proceeds.
    pub fn get_proceeds(&self, seller: Address) -> U512 {
        self.proceeds.get_or_default(&seller)
    }
}

// ============================================
// Tests
// ============================================
