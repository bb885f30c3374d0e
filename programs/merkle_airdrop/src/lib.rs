use anchor_lang::prelude::*;

declare_id!("7rNfqZBhUaYzyUBXWVyd5nEvLxVZs8NeLkxMjsQpd3Vf");

pub mod constants;
pub mod controller;
pub mod error;
pub mod event;
pub mod instructions;
pub mod state;
pub mod utils;

#[cfg(not(target_os = "solana"))]
pub mod host;

#[cfg(test)]
pub mod test;

use instructions::*;

/**
 * Merkle Airdrop Program
 *
 * Distributes a fixed pool of tokens to a committed list of (identity, amount)
 * entitlements. Only the 32-byte merkle root of the list lives on chain; each
 * recipient claims with an inclusion proof.
 *
 * Key Features:
 * - Sorted-pair merkle proofs (no left/right flags), keccak256 leaves over
 *   "0x<hex identity> <amount>"
 * - Exactly one payout per (epoch, leaf)
 * - Root rotation: each new root starts a new epoch
 * - Optional cancelation: the admin sweeps the pool and closes the airdrop
 * - Support for both SPL Token and Token 2022
 *
 * Architecture:
 * - Airdrop PDA: active root, epoch, lifecycle flags
 * - Token Vault PDA: holds the pool, signed for by the airdrop PDA
 * - Claim Record PDAs: one per claimed (epoch, leaf)
 *
 * Workflow:
 * 1. Off-line: build the tree from the whitelist, publish the root and proofs
 * 2. Admin creates the airdrop with the root and funds the vault
 * 3. Recipients claim with their proofs
 * 4. Admin may rotate the root to a new list at any time
 * 5. If cancelable, admin sweeps the rest and closes the airdrop
 */
#[program]
pub mod merkle_airdrop {
    use super::*;

    /**
     * Creates a new airdrop
     *
     * @param airdrop_id - Caller-chosen id, lets one admin run several airdrops
     * @param initial_root - Root of the first epoch's tree
     * @param cancelable - Fixed forever; allows sweep_and_close
     * @param initial_total_amount - Deposit moved from the admin into the vault
     *
     * Access Control: Signer becomes admin
     */
    pub fn create_airdrop(
        ctx: Context<CreateAirdrop>,
        airdrop_id: u64,
        initial_root: [u8; 32],
        cancelable: bool,
        initial_total_amount: u64,
    ) -> Result<()> {
        handle_create_airdrop(ctx, airdrop_id, initial_root, cancelable, initial_total_amount)
    }

    /**
     * Rotates the merkle root and starts a new epoch
     *
     * Access Control: Admin only
     */
    pub fn set_root(ctx: Context<SetRoot>, new_root: [u8; 32]) -> Result<()> {
        handle_set_root(ctx, new_root)
    }

    /**
     * Claims the signer's entitlement with a merkle proof
     *
     * @param amount - Amount in the claimant's leaf
     * @param proof - Sibling hashes from the leaf to the root
     *
     * Access Control: Any signer with a valid proof for their own key
     */
    pub fn claim(ctx: Context<Claim>, amount: u64, proof: Vec<[u8; 32]>) -> Result<()> {
        handle_claim(ctx, amount, proof)
    }

    /**
     * Sweeps the remaining pool to the admin and closes the airdrop
     *
     * Access Control: Admin only, cancelable airdrops only
     */
    pub fn sweep_and_close(ctx: Context<SweepAndClose>) -> Result<()> {
        handle_sweep_and_close(ctx)
    }

    /**
     * Closes a claim record of an inactive epoch and refunds its rent
     *
     * Access Control: Claimant only
     */
    pub fn close_claim_record(ctx: Context<CloseClaimRecord>) -> Result<()> {
        handle_close_claim_record(ctx)
    }

    /// Returns whether `proof` links `leaf` to the active root
    pub fn check_proof(ctx: Context<CheckProof>, leaf: [u8; 32], proof: Vec<[u8; 32]>) -> Result<bool> {
        handle_check_proof(ctx, leaf, proof)
    }

    /// Returns the vault balance
    pub fn pool_balance(ctx: Context<PoolBalance>) -> Result<u64> {
        handle_pool_balance(ctx)
    }
}
