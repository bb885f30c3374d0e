use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use crate::state::*;
use crate::error::*;
use crate::constants::*;
use crate::controller::AirdropController;
use crate::utils::{leaf_hash, AirdropSeeds, VaultLedger};
use crate::event::*;

/**
 * Account context for claiming tokens
 *
 * The claimant proves that (claimant, amount) is a leaf of the active tree.
 * The claim record PDA is keyed by the current epoch and that leaf, so each
 * entitlement has exactly one record per epoch and a replay finds it marked.
 *
 * Access Control: Any signer with a valid merkle proof for their own key
 */
#[event_cpi]
#[derive(Accounts)]
#[instruction(amount: u64)]
pub struct Claim<'info> {
    /// The airdrop account holding the active root
    /// - Will be modified to update total_claimed
    #[account(mut)]
    pub airdrop: Account<'info, AirdropState>,

    /// Claim record for (epoch, leaf)
    /// - Derived from: ["claim", airdrop_key, epoch, leaf(claimant, amount)]
    #[account(
        init_if_needed,
        payer = claimant,
        space = ClaimRecord::LEN,
        seeds = [
            CLAIM_SEED.as_bytes(),
            airdrop.key().as_ref(),
            airdrop.epoch.to_le_bytes().as_ref(),
            leaf_hash(&claimant.key(), amount).as_ref()
        ],
        bump
    )]
    pub claim_record: Account<'info, ClaimRecord>,

    /// Token vault holding the pool
    /// - Derived from: ["vault", airdrop_key]
    #[account(
        mut,
        seeds = [VAULT_SEED.as_bytes(), airdrop.key().as_ref()],
        bump
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    /// Claimant's token account to receive the tokens
    #[account(
        mut,
        token::mint = token_mint,
        token::authority = claimant,
        token::token_program = token_program,
    )]
    pub claimant_token_account: InterfaceAccount<'info, TokenAccount>,

    /// The token mint for verification
    #[account(
        token::token_program = token_program,
        constraint = token_mint.key() == airdrop.token_mint @ AirdropError::TokenMintMismatch
    )]
    pub token_mint: InterfaceAccount<'info, Mint>,

    /// The claimant, who is also the identity inside the leaf
    #[account(mut)]
    pub claimant: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

/**
 * Processes a claim
 *
 * @param amount - Amount the claimant is entitled to in the active tree
 * @param proof - Sibling hashes from the claimant's leaf up to the root
 *
 * See `AirdropController::claim` for the order of checks. A failed transfer
 * aborts the transaction, which also discards the new claim record.
 */
pub fn handle_claim(ctx: Context<Claim>, amount: u64, proof: Vec<[u8; 32]>) -> Result<()> {
    let claimant = ctx.accounts.claimant.key();
    let airdrop_key = ctx.accounts.airdrop.key();

    let mut ledger = VaultLedger {
        authority: ctx.accounts.airdrop.to_account_info(),
        vault: ctx.accounts.token_vault.to_account_info(),
        destination: ctx.accounts.claimant_token_account.to_account_info(),
        recipient: claimant,
        mint: ctx.accounts.token_mint.to_account_info(),
        token_program: ctx.accounts.token_program.to_account_info(),
        decimals: ctx.accounts.token_mint.decimals,
        balance: ctx.accounts.token_vault.amount,
        seeds: AirdropSeeds::of(&ctx.accounts.airdrop),
    };

    let receipt = AirdropController::new(&mut ctx.accounts.airdrop, &mut ledger).claim(
        &mut *ctx.accounts.claim_record,
        &claimant,
        amount,
        &proof,
        &claimant,
    )?;

    let claim_record = &mut ctx.accounts.claim_record;
    claim_record.airdrop = airdrop_key;
    claim_record.claimant = claimant;
    claim_record.amount = amount;

    emit_cpi!(TokensClaimed {
        airdrop: airdrop_key,
        claimant,
        epoch: receipt.epoch,
        leaf: receipt.leaf,
        amount: receipt.amount,
        total_claimed: receipt.total_claimed,
    });

    Ok(())
}
