//! Deployment, front-end synchronization and demo scripts for the NFT
//! marketplace contracts.
//!
//! The binaries in `src/bin/` are thin wrappers over the library modules:
//! - [`registry`] keeps the front-end's `networkMapping.json` address book
//!   consistent with the latest deployments.
//! - [`interface`] dumps each contract's callable surface to a JSON file
//!   the front-end can build calls from.
//! - [`frontend`] ties both together behind the `UPDATE_FRONT_END` flag.
//! - [`deployments`] resolves registered addresses into typed host
//!   references.
//! - [`buyer`] performs the one-shot mint/list and buy actions.

pub mod buyer;
pub mod deployments;
pub mod frontend;
pub mod interface;
pub mod registry;

use odra::host::HostEnv;

/// Host environment for the binaries: the real network when the `livenet`
/// feature is enabled, the in-process simulated chain otherwise.
pub fn host_env() -> HostEnv {
    #[cfg(feature = "livenet")]
    {
        odra_casper_livenet_env::env()
    }
    #[cfg(not(feature = "livenet"))]
    {
        odra_test::env()
    }
}
