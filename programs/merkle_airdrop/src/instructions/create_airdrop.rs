use crate::constants::*;
use crate::event::*;
use crate::state::*;
use crate::utils::transfer_token;
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

/**
 * Account context for creating a new airdrop
 *
 * This instruction initializes a new airdrop:
 * - Creates the airdrop state PDA holding the initial merkle root
 * - Creates a token vault PDA owned by the airdrop PDA
 * - Optionally deposits the initial pool from the admin's token account
 *
 * The signer becomes the airdrop's admin.
 */
#[event_cpi]
#[derive(Accounts)]
#[instruction(airdrop_id: u64)]
pub struct CreateAirdrop<'info> {
    /// The airdrop state account (PDA)
    /// - Derived from: ["airdrop", token_mint, admin, airdrop_id]
    #[account(
        init,
        payer = admin,
        space = AirdropState::LEN,
        seeds = [
            AIRDROP_SEED.as_bytes(),
            token_mint.key().as_ref(),
            admin.key().as_ref(),
            airdrop_id.to_le_bytes().as_ref()
        ],
        bump
    )]
    pub airdrop: Account<'info, AirdropState>,

    /// Token vault account (PDA) that holds the pool
    /// - Controlled by the airdrop PDA as token authority
    /// - Derived from: ["vault", airdrop_key]
    #[account(
        init,
        token::mint = token_mint,
        token::authority = airdrop,
        token::token_program = token_program,
        seeds = [VAULT_SEED.as_bytes(), airdrop.key().as_ref()],
        bump,
        payer = admin,
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    /// The token mint for the tokens being distributed
    /// - Supports both SPL Token and Token 2022 programs
    #[account(
        token::token_program = token_program,
    )]
    pub token_mint: InterfaceAccount<'info, Mint>,

    /// Admin's token account funding the initial deposit
    #[account(
        mut,
        token::mint = token_mint,
        token::authority = admin,
        token::token_program = token_program,
    )]
    pub admin_token_account: InterfaceAccount<'info, TokenAccount>,

    /// The admin of the airdrop
    /// - Can rotate the root and sweep a cancelable airdrop
    #[account(mut)]
    pub admin: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,

    /// Rent sysvar for rent exemption calculations
    pub rent: Sysvar<'info, Rent>,
}

/**
 * Creates a new airdrop
 *
 * @param airdrop_id - Caller-chosen id, part of the airdrop PDA seeds
 * @param initial_root - Root of the first epoch's tree, must not be zero
 * @param cancelable - Whether the admin may later sweep and close
 * @param initial_total_amount - Deposit moved into the vault now; zero leaves
 *   funding to plain transfers into the vault
 */
pub fn handle_create_airdrop(
    ctx: Context<CreateAirdrop>,
    airdrop_id: u64,
    initial_root: [u8; 32],
    cancelable: bool,
    initial_total_amount: u64,
) -> Result<()> {
    let admin = ctx.accounts.admin.key();
    let token_mint = ctx.accounts.token_mint.key();
    let token_vault = ctx.accounts.token_vault.key();

    let airdrop = &mut ctx.accounts.airdrop;
    **airdrop = AirdropState {
        bump: ctx.bumps.airdrop,
        airdrop_id,
        token_mint,
        token_vault,
        initial_total_amount,
        ..AirdropState::new(admin, initial_root, cancelable)?
    };
    let airdrop_key = airdrop.key();

    if initial_total_amount > 0 {
        transfer_token(
            ctx.accounts.admin.to_account_info(),
            ctx.accounts.admin_token_account.to_account_info(),
            ctx.accounts.token_vault.to_account_info(),
            ctx.accounts.token_mint.to_account_info(),
            ctx.accounts.token_program.to_account_info(),
            initial_total_amount,
            ctx.accounts.token_mint.decimals,
            None, // Admin-signed deposit
        )?;
    }

    emit_cpi!(AirdropCreated {
        airdrop: airdrop_key,
        airdrop_id,
        admin,
        token_mint,
        token_vault,
        merkle_root: initial_root,
        cancelable,
        initial_total_amount,
    });

    Ok(())
}
