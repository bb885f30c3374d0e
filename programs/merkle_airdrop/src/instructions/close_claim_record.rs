use anchor_lang::prelude::*;
use crate::state::*;
use crate::error::*;
use crate::event::*;

/**
 * Account context for closing claim records
 *
 * A claim record is only consulted while its epoch is the active one. Once
 * the root has been rotated past it, or the airdrop is closed, the claimant
 * who paid for it can take the rent back.
 *
 * Access Control: Only the claimant stored in the record
 */
#[event_cpi]
#[derive(Accounts)]
pub struct CloseClaimRecord<'info> {
    /// ClaimRecord to be closed, rent returned to claimant
    #[account(
        mut,
        close = claimant,
        has_one = airdrop,
        has_one = claimant @ AirdropError::Unauthorized
    )]
    pub claim_record: Account<'info, ClaimRecord>,

    /// The claimant who created the record
    #[account(mut)]
    pub claimant: Signer<'info>,

    /// Airdrop the record belongs to, used for the epoch check
    pub airdrop: Account<'info, AirdropState>,
}

/**
 * Closes a ClaimRecord and returns rent to the claimant
 *
 * Validation Process:
 * 1. The record's epoch must be inactive, or the airdrop closed
 * 2. Anchor transfers the lamports and closes the account
 */
pub fn handle_close_claim_record(ctx: Context<CloseClaimRecord>) -> Result<()> {
    let airdrop = &ctx.accounts.airdrop;
    let claim_record = &ctx.accounts.claim_record;

    require!(
        airdrop.is_record_inert(claim_record),
        AirdropError::ClaimRecordActive
    );

    emit_cpi!(ClaimRecordClosed {
        airdrop: airdrop.key(),
        claimant: ctx.accounts.claimant.key(),
        epoch: claim_record.epoch,
    });

    Ok(())
}
