//! Event definitions for the NFT Marketplace
//!
//! Events are emitted for important state changes and can be
//! indexed by off-chain services.

use odra::prelude::*;
use odra::casper_types::U512;

/// Emitted when an item is listed, and again whenever its price is updated
#[odra::event]
pub struct ItemListed {
    /// Address of the seller
    pub seller: Address,
    /// NFT contract the token belongs to
    pub nft_contract: Address,
    /// Token identifier within the NFT contract
    pub token_id: u64,
    /// Asking price in motes (1 CSPR = 10^9 motes)
    pub price: U512,
}

/// Emitted when a listed item is purchased
#[odra::event]
pub struct ItemBought {
    /// Address of the buyer
    pub buyer: Address,
    /// NFT contract the token belongs to
    pub nft_contract: Address,
    /// Token identifier within the NFT contract
    pub token_id: u64,
    /// Amount paid in motes
    pub price: U512,
}

/// Emitted when a listing is canceled by its seller
#[odra::event]
pub struct ItemCanceled {
    /// Address of the seller who canceled
    pub seller: Address,
    /// NFT contract the token belongs to
    pub nft_contract: Address,
    /// Token identifier within the NFT contract
    pub token_id: u64,
}

// ============================================
// Basic NFT Events
// ============================================

/// Emitted when a new token is minted
#[odra::event]
pub struct Minted {
    /// Token identifier assigned to the new token
    pub token_id: u64,
    /// Address the token was minted to
    pub owner: Address,
}

/// Emitted when an operator is approved or the approval is revoked
#[odra::event]
pub struct Approval {
    /// Current owner of the token
    pub owner: Address,
    /// Approved operator, `None` when the approval was revoked
    pub approved: Option<Address>,
    /// Token identifier
    pub token_id: u64,
}

/// Emitted when a token changes owner
#[odra::event]
pub struct Transfer {
    /// Previous owner
    pub from: Address,
    /// New owner
    pub to: Address,
    /// Token identifier
    pub token_id: u64,
}
