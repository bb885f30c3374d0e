use anchor_lang::prelude::*;

use crate::constants::{EMPTY_ROOT, INITIAL_EPOCH};
use crate::error::AirdropError;
use crate::state::ClaimRecord;

/**
 * Airdrop state account
 *
 * Holds the single active merkle root, the epoch it belongs to and the
 * lifecycle flags of one airdrop. Every operation goes through the methods
 * below, which check everything before writing anything.
 *
 * Derivation: ["airdrop", token_mint, admin, airdrop_id]
 *
 * Lifecycle:
 * 1. Created with the initial root in epoch 1
 * 2. Each root rotation starts a new epoch
 * 3. Claims increment total_claimed
 * 4. Sweep-and-close sets `closed`; the account is kept so that every later
 *    instruction fails with `Closed` instead of a missing-account error
 */
#[account]
#[derive(Default, Debug)]
pub struct AirdropState {
    /// Bump seed for PDA derivation
    pub bump: u8,

    /// Caller-chosen id, lets one admin run several airdrops per mint
    pub airdrop_id: u64,

    /// Administrator
    /// - Can rotate the root and, if cancelable, sweep and close
    pub admin: Pubkey,

    /// Token mint being distributed
    pub token_mint: Pubkey,

    /// Vault PDA holding the pool, derived from: ["vault", airdrop_key]
    pub token_vault: Pubkey,

    /// Root claims are verified against
    pub merkle_root: [u8; 32],

    /// Incremented on every root rotation
    /// - Claim records are keyed by (epoch, leaf)
    pub epoch: u64,

    /// Fixed at creation, allows sweep-and-close
    pub cancelable: bool,

    /// Terminal flag, set by sweep-and-close
    pub closed: bool,

    /// Amount deposited at creation
    pub initial_total_amount: u64,

    /// Total amount paid out through claims, across epochs
    pub total_claimed: u64,
}

impl AirdropState {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<AirdropState>();

    /// Fresh state in the first epoch. Mint, vault and PDA fields are filled
    /// in by `create_airdrop`.
    pub fn new(admin: Pubkey, initial_root: [u8; 32], cancelable: bool) -> Result<Self> {
        require!(initial_root != EMPTY_ROOT, AirdropError::InvalidMerkleRoot);

        Ok(Self {
            admin,
            merkle_root: initial_root,
            epoch: INITIAL_EPOCH,
            cancelable,
            ..Default::default()
        })
    }

    pub fn ensure_open(&self) -> Result<()> {
        require!(!self.closed, AirdropError::Closed);
        Ok(())
    }

    pub fn ensure_admin(&self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(*caller, self.admin, AirdropError::Unauthorized);
        Ok(())
    }

    /// A claim record is only consulted while its epoch is the active one, so
    /// it can be closed once the root has rotated past it or the airdrop is
    /// closed.
    pub fn is_record_inert(&self, record: &ClaimRecord) -> bool {
        self.closed || record.epoch < self.epoch
    }

    /// Replaces the active root and starts a new epoch.
    ///
    /// Claim records of earlier epochs stay on chain but are never consulted
    /// again, so an entitlement re-included in the new tree can be claimed once
    /// more. Returns the new epoch.
    pub fn rotate_root(&mut self, caller: &Pubkey, new_root: [u8; 32]) -> Result<u64> {
        self.ensure_open()?;
        self.ensure_admin(caller)?;
        require!(new_root != EMPTY_ROOT, AirdropError::InvalidMerkleRoot);
        let epoch = self
            .epoch
            .checked_add(1)
            .ok_or(AirdropError::ArithmeticOverflow)?;

        self.merkle_root = new_root;
        self.epoch = epoch;
        msg!("merkle root rotated, epoch {}", epoch);

        Ok(epoch)
    }
}
