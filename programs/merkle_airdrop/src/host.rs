use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard, PoisonError};

use anchor_lang::prelude::*;

use crate::controller::{AirdropController, ClaimLedger, ClaimReceipt, TokenLedger};
use crate::error::AirdropError;
use crate::state::AirdropState;
use crate::utils::Digest;

/// Claim ledger keyed by `(epoch, leaf)`.
#[derive(Debug, Default, Clone)]
pub struct MemoryClaimLedger {
    claimed: HashSet<(u64, Digest)>,
}

impl MemoryClaimLedger {
    pub fn len(&self) -> usize {
        self.claimed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.claimed.is_empty()
    }
}

impl ClaimLedger for MemoryClaimLedger {
    fn is_claimed(&self, epoch: u64, leaf: &Digest) -> bool {
        self.claimed.contains(&(epoch, *leaf))
    }

    fn mark_claimed(&mut self, epoch: u64, leaf: &Digest) -> Result<()> {
        require!(
            self.claimed.insert((epoch, *leaf)),
            AirdropError::AlreadyClaimed
        );
        Ok(())
    }
}

struct Inner<T> {
    state: AirdropState,
    claims: MemoryClaimLedger,
    ledger: T,
}

/**
 * Process-local airdrop for off-chain hosts (indexers, simulations, tests)
 *
 * All mutations of one airdrop run under a single mutex, which makes the
 * replay check and the mark a single step and keeps root rotation and
 * closing from interleaving with a claim.
 */
pub struct SharedAirdrop<T> {
    inner: Mutex<Inner<T>>,
}

impl<T: TokenLedger> SharedAirdrop<T> {
    pub fn new(admin: Pubkey, initial_root: Digest, cancelable: bool, ledger: T) -> Result<Self> {
        Ok(Self {
            inner: Mutex::new(Inner {
                state: AirdropState::new(admin, initial_root, cancelable)?,
                claims: MemoryClaimLedger::default(),
                ledger,
            }),
        })
    }

    pub fn claim(
        &self,
        identity: &Pubkey,
        amount: u64,
        proof: &[Digest],
        caller: &Pubkey,
    ) -> Result<ClaimReceipt> {
        let mut inner = self.lock();
        let Inner {
            state,
            claims,
            ledger,
        } = &mut *inner;
        AirdropController::new(state, ledger).claim(claims, identity, amount, proof, caller)
    }

    pub fn rotate_root(&self, caller: &Pubkey, new_root: Digest) -> Result<u64> {
        self.lock().state.rotate_root(caller, new_root)
    }

    pub fn sweep_and_close(&self, caller: &Pubkey) -> Result<u64> {
        let mut inner = self.lock();
        let Inner { state, ledger, .. } = &mut *inner;
        AirdropController::new(state, ledger).sweep_and_close(caller)
    }

    pub fn is_claimed(&self, epoch: u64, leaf: &Digest) -> bool {
        self.lock().claims.is_claimed(epoch, leaf)
    }

    /// Copy of the current state.
    pub fn state(&self) -> AirdropState {
        self.lock().state.clone()
    }

    pub fn with_ledger<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.lock().ledger)
    }

    // A panic inside `TokenLedger::transfer` leaves the claim marked with
    // `total_claimed` unchanged, the same as a transfer error.
    fn lock(&self) -> MutexGuard<'_, Inner<T>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
