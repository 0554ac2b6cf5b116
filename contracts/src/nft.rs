//! Basic NFT Contract
//!
//! A minimal single-collection NFT used as the asset traded on the
//! marketplace. Anyone can mint; every token serves the same fixed URI.
//! Ownership and per-token operator approval are the only state the
//! marketplace relies on.

use odra::prelude::*;
use odra::prelude::{Address, Mapping, Var};

use crate::errors::Error;
use crate::events::{Approval, Minted, Transfer};
use crate::types::constants::TOKEN_URI;

/// Basic NFT contract module
#[odra::module(events = [Minted, Approval, Transfer], errors = Error)]
pub struct BasicNft {
    /// Owner of each minted token
    owners: Mapping<u64, Address>,
    /// Approved operator per token, cleared on transfer
    approvals: Mapping<u64, Option<Address>>,
    /// Next token ID to be minted
    token_counter: Var<u64>,
}

#[odra::module]
impl BasicNft {
    // ============================================
    // Entry Points
    // ============================================

    /// Mint a new token to the caller and return its ID.
    ///
    /// Token IDs are assigned sequentially starting at 0.
    pub fn mint(&mut self) -> u64 {
        let caller = self.env().caller();

        let token_id = self.token_counter.get_or_default();
        self.owners.set(&token_id, caller);
        self.token_counter.set(token_id + 1);

        self.env().emit_event(Minted {
            token_id,
            owner: caller,
        });

        token_id
    }

    /// Approve an operator to transfer the given token.
    ///
    /// Only the token owner may approve; a later call replaces the
    /// previous operator.
    pub fn approve(&mut self, operator: Address, token_id: u64) {
        let owner = self.require_owner(token_id);
        if self.env().caller() != owner {
            self.env().revert(Error::NotTokenOwner);
        }

        self.approvals.set(&token_id, Some(operator));

        self.env().emit_event(Approval {
            owner,
            approved: Some(operator),
            token_id,
        });
    }

    /// Remove any operator approval from the given token.
    pub fn revoke_approval(&mut self, token_id: u64) {
        let owner = self.require_owner(token_id);
        if self.env().caller() != owner {
            self.env().revert(Error::NotTokenOwner);
        }

        self.approvals.set(&token_id, None);

        self.env().emit_event(Approval {
            owner,
            approved: None,
            token_id,
        });
    }

    /// Transfer a token from its owner to a new owner.
    ///
    /// The caller must be the owner or the approved operator. Approval is
    /// cleared on transfer.
    pub fn transfer_from(&mut self, from: Address, to: Address, token_id: u64) {
        let owner = self.require_owner(token_id);
        if owner != from {
            self.env().revert(Error::NotTokenOwner);
        }

        let caller = self.env().caller();
        let approved = self.approvals.get_or_default(&token_id);
        if caller != owner && approved != Some(caller) {
            self.env().revert(Error::NotAuthorized);
        }

        self.owners.set(&token_id, to);
        self.approvals.set(&token_id, None);

        self.env().emit_event(Transfer { from, to, token_id });
    }

    // ============================================
    // View Functions
    // ============================================

    /// Get the owner of a token; reverts if the token was never minted.
    pub fn owner_of(&self, token_id: u64) -> Address {
        self.require_owner(token_id)
    }

    /// Get the approved operator for a token, if any.
    pub fn get_approved(&self, token_id: u64) -> Option<Address> {
        self.approvals.get_or_default(&token_id)
    }

    /// Total number of tokens minted so far.
    pub fn token_counter(&self) -> u64 {
        self.token_counter.get_or_default()
    }

    /// Metadata URI for a token.
    pub fn token_uri(&self, token_id: u64) -> String {
        self.require_owner(token_id);
        TOKEN_URI.to_string()
    }

    // ============================================
    // Internal Functions
    // ============================================

    fn require_owner(&self, token_id: u64) -> Address {
        self.owners
            .get(&token_id)
            .unwrap_or_else(|| self.env().revert(Error::TokenDoesNotExist))
    }
}

// ============================================
// Tests
// ============================================

#[cfg(test)]
mod tests {
    use super::*;
    use odra::host::{Deployer, HostEnv, NoArgs};

    fn setup() -> (BasicNftHostRef, HostEnv) {
        let env = odra_test::env();
        let contract = BasicNftHostRef::deploy(&env, NoArgs);
        (contract, env)
    }

    #[test]
    fn mint_assigns_sequential_ids_to_caller() {
        let (mut nft, env) = setup();
        let minter = env.get_account(1);
        env.set_caller(minter);

        assert_eq!(nft.mint(), 0);
        assert_eq!(nft.mint(), 1);
        assert_eq!(nft.owner_of(0), minter);
        assert_eq!(nft.owner_of(1), minter);
        assert_eq!(nft.token_counter(), 2);
    }

    #[test]
    fn owner_of_unminted_token_reverts() {
        let (nft, _env) = setup();
        assert_eq!(nft.try_owner_of(42), Err(Error::TokenDoesNotExist.into()));
    }

    #[test]
    fn only_owner_can_approve() {
        let (mut nft, env) = setup();
        let owner = env.get_account(1);
        let stranger = env.get_account(2);

        env.set_caller(owner);
        let token_id = nft.mint();

        env.set_caller(stranger);
        assert_eq!(
            nft.try_approve(stranger, token_id),
            Err(Error::NotTokenOwner.into())
        );
    }

    #[test]
    fn approved_operator_can_transfer_and_approval_is_cleared() {
        let (mut nft, env) = setup();
        let owner = env.get_account(1);
        let operator = env.get_account(2);
        let recipient = env.get_account(3);

        env.set_caller(owner);
        let token_id = nft.mint();
        nft.approve(operator, token_id);
        assert_eq!(nft.get_approved(token_id), Some(operator));

        env.set_caller(operator);
        nft.transfer_from(owner, recipient, token_id);

        assert_eq!(nft.owner_of(token_id), recipient);
        assert_eq!(nft.get_approved(token_id), None);
    }

    #[test]
    fn unauthorized_transfer_reverts() {
        let (mut nft, env) = setup();
        let owner = env.get_account(1);
        let stranger = env.get_account(2);

        env.set_caller(owner);
        let token_id = nft.mint();

        env.set_caller(stranger);
        assert_eq!(
            nft.try_transfer_from(owner, stranger, token_id),
            Err(Error::NotAuthorized.into())
        );
    }

    #[test]
    fn revoked_approval_blocks_transfer() {
        let (mut nft, env) = setup();
        let owner = env.get_account(1);
        let operator = env.get_account(2);

        env.set_caller(owner);
        let token_id = nft.mint();
        nft.approve(operator, token_id);
        nft.revoke_approval(token_id);

        env.set_caller(operator);
        assert_eq!(
            nft.try_transfer_from(owner, operator, token_id),
            Err(Error::NotAuthorized.into())
        );
    }

    #[test]
    fn token_uri_is_fixed() {
        let (mut nft, env) = setup();
        env.set_caller(env.get_account(1));
        let token_id = nft.mint();
        assert_eq!(nft.token_uri(token_id), TOKEN_URI);
    }
}
