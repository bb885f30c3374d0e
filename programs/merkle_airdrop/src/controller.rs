use anchor_lang::prelude::*;

use crate::error::AirdropError;
use crate::state::AirdropState;
use crate::utils::{leaf_hash, verify, Digest};

/// Records which leaves have been paid out, per epoch.
pub trait ClaimLedger {
    fn is_claimed(&self, epoch: u64, leaf: &Digest) -> bool;

    /// Compare-and-set: fails with `AlreadyClaimed`, leaving the ledger
    /// untouched, if `(epoch, leaf)` is already marked.
    fn mark_claimed(&mut self, epoch: u64, leaf: &Digest) -> Result<()>;
}

/// Token ledger capability bound to the airdrop's pool account.
pub trait TokenLedger {
    fn pool_balance(&self) -> Result<u64>;

    /// Moves `amount` from the pool to `to`.
    fn transfer(&mut self, to: &Pubkey, amount: u64) -> Result<()>;
}

/// Outcome of a successful claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClaimReceipt {
    pub epoch: u64,
    pub leaf: Digest,
    pub amount: u64,
    /// Airdrop-wide total after this claim
    pub total_claimed: u64,
}

/**
 * Claim and sweep state machine, independent of where state is stored
 *
 * The program drives it with a `ClaimRecord` account and a `VaultLedger`;
 * `host::SharedAirdrop` drives it with in-memory collaborators under a lock.
 */
pub struct AirdropController<'a, T: TokenLedger> {
    state: &'a mut AirdropState,
    ledger: &'a mut T,
}

impl<'a, T: TokenLedger> AirdropController<'a, T> {
    pub fn new(state: &'a mut AirdropState, ledger: &'a mut T) -> Self {
        Self { state, ledger }
    }

    /**
     * Pays `amount` to `identity` if `(identity, amount)` is in the active tree
     * and has not been paid in this epoch.
     *
     * Checks, in order: open, caller is the identity, amount, proof, replay,
     * pool balance. Nothing is written until all of them pass.
     *
     * The claim is marked before the transfer and `total_claimed` is only
     * bumped after it. If the transfer fails the error is returned and the
     * claim stays consumed while the total is untouched; inside a program
     * instruction the runtime discards the mark together with the failed
     * transaction.
     */
    pub fn claim<C: ClaimLedger>(
        &mut self,
        claims: &mut C,
        identity: &Pubkey,
        amount: u64,
        proof: &[Digest],
        caller: &Pubkey,
    ) -> Result<ClaimReceipt> {
        self.state.ensure_open()?;
        require_keys_eq!(*caller, *identity, AirdropError::ClaimantMismatch);
        require!(amount > 0, AirdropError::InvalidAmount);

        let leaf = leaf_hash(identity, amount);
        require!(
            verify(&leaf, proof, &self.state.merkle_root),
            AirdropError::InvalidProof
        );

        let epoch = self.state.epoch;
        require!(!claims.is_claimed(epoch, &leaf), AirdropError::AlreadyClaimed);
        require!(
            self.ledger.pool_balance()? >= amount,
            AirdropError::InsufficientPool
        );
        let total_claimed = self
            .state
            .total_claimed
            .checked_add(amount)
            .ok_or(AirdropError::ArithmeticOverflow)?;

        claims.mark_claimed(epoch, &leaf)?;
        self.ledger.transfer(identity, amount)?;
        self.state.total_claimed = total_claimed;
        msg!("claimed {} in epoch {}", amount, epoch);

        Ok(ClaimReceipt {
            epoch,
            leaf,
            amount,
            total_claimed,
        })
    }

    /**
     * Sends the whole pool to the admin and closes the airdrop for good.
     *
     * A non-cancelable airdrop refuses this for every caller, admin included.
     * Returns the amount swept.
     */
    pub fn sweep_and_close(&mut self, caller: &Pubkey) -> Result<u64> {
        require!(self.state.cancelable, AirdropError::NotCancelable);
        require!(!self.state.closed, AirdropError::AlreadyClosed);
        self.state.ensure_admin(caller)?;

        let remaining = self.ledger.pool_balance()?;
        if remaining > 0 {
            let admin = self.state.admin;
            self.ledger.transfer(&admin, remaining)?;
        }
        self.state.closed = true;
        msg!("airdrop closed, swept {}", remaining);

        Ok(remaining)
    }
}
