use anchor_lang::prelude::*;

use crate::controller::ClaimLedger;
use crate::error::AirdropError;
use crate::utils::Digest;

/**
 * Claim record for one leaf in one epoch
 *
 * Derivation: ["claim", airdrop_key, epoch, leaf]
 *
 * Lifecycle:
 * 1. Created by the claim instruction (init_if_needed, paid by the claimant)
 * 2. Marked claimed exactly once; a second claim for the same key finds the
 *    flag set and fails with `AlreadyClaimed`
 * 3. Can be closed for rent once its epoch is no longer active
 *
 * The runtime write-locks this account for the whole claim instruction, which
 * makes the check-and-mark below atomic across concurrent transactions.
 */
#[account]
#[derive(Default, Debug)]
pub struct ClaimRecord {
    /// Airdrop this record belongs to
    pub airdrop: Pubkey,
    /// Claimant who paid for the account and receives its rent back
    pub claimant: Pubkey,
    /// Epoch the leaf was claimed in
    pub epoch: u64,
    /// The consumed leaf
    pub leaf: [u8; 32],
    /// Amount paid out
    pub amount: u64,
    /// Set once, never cleared
    pub claimed: bool,
}

impl ClaimRecord {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<ClaimRecord>();
}

impl ClaimLedger for ClaimRecord {
    fn is_claimed(&self, epoch: u64, leaf: &Digest) -> bool {
        self.claimed && self.epoch == epoch && self.leaf == *leaf
    }

    fn mark_claimed(&mut self, epoch: u64, leaf: &Digest) -> Result<()> {
        require!(!self.claimed, AirdropError::AlreadyClaimed);

        self.epoch = epoch;
        self.leaf = *leaf;
        self.claimed = true;
        Ok(())
    }
}
