use anchor_lang::prelude::*;
use anchor_spl::token_interface::TokenAccount;
use crate::state::*;
use crate::constants::*;
use crate::utils::verify;

/**
 * Read-only account context for proof checks
 *
 * Lets clients ask the program itself whether a proof matches the active
 * root before paying for a claim.
 */
#[derive(Accounts)]
pub struct CheckProof<'info> {
    pub airdrop: Account<'info, AirdropState>,
}

/// Returns whether `proof` links `leaf` to the active root.
pub fn handle_check_proof(
    ctx: Context<CheckProof>,
    leaf: [u8; 32],
    proof: Vec<[u8; 32]>,
) -> Result<bool> {
    Ok(verify(&leaf, &proof, &ctx.accounts.airdrop.merkle_root))
}

/// Read-only account context for the pool balance
#[derive(Accounts)]
pub struct PoolBalance<'info> {
    pub airdrop: Account<'info, AirdropState>,

    /// Derived from: ["vault", airdrop_key]
    #[account(
        seeds = [VAULT_SEED.as_bytes(), airdrop.key().as_ref()],
        bump
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,
}

/// Returns the amount still waiting in the vault.
pub fn handle_pool_balance(ctx: Context<PoolBalance>) -> Result<u64> {
    Ok(ctx.accounts.token_vault.amount)
}
