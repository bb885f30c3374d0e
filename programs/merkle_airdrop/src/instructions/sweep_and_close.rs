use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use crate::state::*;
use crate::error::*;
use crate::constants::*;
use crate::controller::AirdropController;
use crate::utils::{AirdropSeeds, VaultLedger};
use crate::event::*;

/**
 * Account context for sweeping the pool and closing the airdrop
 *
 * Moves every token left in the vault to the admin and marks the airdrop
 * closed. The state account is kept, so later claims, rotations and sweeps
 * fail with a stable reason.
 *
 * Access Control: Admin only, and only if the airdrop was created cancelable
 */
#[event_cpi]
#[derive(Accounts)]
pub struct SweepAndClose<'info> {
    /// The airdrop account to close
    #[account(mut)]
    pub airdrop: Account<'info, AirdropState>,

    /// Token vault containing the remaining pool
    /// - Derived from: ["vault", airdrop_key]
    #[account(
        mut,
        seeds = [VAULT_SEED.as_bytes(), airdrop.key().as_ref()],
        bump
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    /// Admin's token account to receive the remaining tokens
    #[account(
        mut,
        token::mint = token_mint,
        token::authority = admin,
        token::token_program = token_program,
    )]
    pub admin_token_account: InterfaceAccount<'info, TokenAccount>,

    /// The token mint for verification
    #[account(
        token::token_program = token_program,
        constraint = token_mint.key() == airdrop.token_mint @ AirdropError::TokenMintMismatch
    )]
    pub token_mint: InterfaceAccount<'info, Mint>,

    /// Compared against the stored admin by the controller, after the
    /// cancelable and closed checks
    pub admin: Signer<'info>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

/**
 * Sweeps the remaining pool to the admin and closes the airdrop
 *
 * Rejections, in order: NotCancelable, AlreadyClosed, Unauthorized.
 */
pub fn handle_sweep_and_close(ctx: Context<SweepAndClose>) -> Result<()> {
    let admin = ctx.accounts.admin.key();
    let airdrop_key = ctx.accounts.airdrop.key();

    let mut ledger = VaultLedger {
        authority: ctx.accounts.airdrop.to_account_info(),
        vault: ctx.accounts.token_vault.to_account_info(),
        destination: ctx.accounts.admin_token_account.to_account_info(),
        recipient: admin,
        mint: ctx.accounts.token_mint.to_account_info(),
        token_program: ctx.accounts.token_program.to_account_info(),
        decimals: ctx.accounts.token_mint.decimals,
        balance: ctx.accounts.token_vault.amount,
        seeds: AirdropSeeds::of(&ctx.accounts.airdrop),
    };

    let amount_swept =
        AirdropController::new(&mut ctx.accounts.airdrop, &mut ledger).sweep_and_close(&admin)?;

    emit_cpi!(AirdropClosed {
        airdrop: airdrop_key,
        admin,
        amount_swept,
    });

    Ok(())
}
