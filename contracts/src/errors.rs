//! Error definitions for the NFT Marketplace

use odra::prelude::*;

/// Custom errors for the marketplace and NFT contracts
#[odra::odra_error]
pub enum Error {
    /// Listing price must be strictly greater than zero
    PriceMustBeAboveZero = 1,
    /// Marketplace is not the approved operator for this token
    NotApprovedForMarketplace = 2,
    /// Item is already listed on the marketplace
    AlreadyListed = 3,
    /// Caller does not own the token backing this listing
    NotOwner = 4,
    /// Item is not listed on the marketplace
    NotListed = 5,
    /// Attached payment is below the listed price
    PriceNotMet = 6,
    /// No proceeds available to withdraw
    NoProceeds = 7,

    // ============================================
    // Basic NFT Errors (20-39)
    // ============================================

    /// Token with given ID has not been minted
    TokenDoesNotExist = 20,
    /// Caller is not the owner of this token
    NotTokenOwner = 21,
    /// Caller is neither the owner nor the approved operator
    NotAuthorized = 22,
}
