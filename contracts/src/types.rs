//! Data type definitions for the NFT Marketplace

use odra::prelude::*;
use odra::casper_types::account::AccountHash;
use odra::casper_types::U512;
use odra::prelude::Address;

/// A marketplace listing: the asking price and the seller it belongs to.
///
/// A zero price marks the "not listed" state; canceling a listing resets
/// the stored entry to the default value.
#[odra::odra_type]
pub struct Listing {
    /// Asking price in motes (1 CSPR = 10^9 motes)
    pub price: U512,
    /// Address of the seller
    pub seller: Address,
}

impl Default for Listing {
    fn default() -> Self {
        Self {
            price: U512::zero(),
            seller: Address::Account(AccountHash::new([0u8; 32])),
        }
    }
}

impl Listing {
    /// Whether this entry represents an active listing.
    pub fn is_active(&self) -> bool {
        self.price > U512::zero()
    }
}

/// Constants shared by the contracts
pub mod constants {
    /// Token URI served for every `BasicNft` token
    pub const TOKEN_URI: &str =
        "ipfs://bafybeig37ioir76s7mg5oobetncojcm3c3hxasyd4rvid4jqhy4gkaheg4/?filename=0-PUG.json";
}
