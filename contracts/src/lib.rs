//! NFT Marketplace on Casper Network
//!
//! Two contracts make up the system:
//! - `NftMarketplace` lets token owners list NFTs for sale, buyers purchase
//!   them, and sellers withdraw accumulated proceeds.
//! - `BasicNft` is a minimal single-collection NFT used as the traded asset.
//!
//! Built with Odra framework for Casper Network.

#![cfg_attr(target_arch = "wasm32", no_std)]
#![cfg_attr(target_arch = "wasm32", no_main)]

extern crate alloc;

pub mod errors;
pub mod events;
pub mod marketplace;
pub mod nft;
pub mod types;

pub use marketplace::NftMarketplace;
pub use nft::BasicNft;
