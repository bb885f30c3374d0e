use anchor_lang::prelude::*;
use crate::state::*;
use crate::event::*;

/**
 * Account context for rotating the merkle root
 *
 * The admin replaces the active root with the root of a new entitlement list.
 * This starts a new epoch: claim records of earlier epochs are no longer
 * consulted, so entitlements present in the new tree can be claimed again.
 *
 * Access Control: Admin only (checked by `AirdropState::rotate_root` after the
 * closed check, so a closed airdrop reports `Closed` to every caller)
 */
#[event_cpi]
#[derive(Accounts)]
pub struct SetRoot<'info> {
    /// The airdrop account to update
    #[account(mut)]
    pub airdrop: Account<'info, AirdropState>,

    /// Must match the admin stored in the airdrop state
    pub admin: Signer<'info>,
}

/**
 * Rotates the merkle root
 *
 * @param new_root - Root of the new tree, must not be zero
 */
pub fn handle_set_root(ctx: Context<SetRoot>, new_root: [u8; 32]) -> Result<()> {
    let admin = ctx.accounts.admin.key();
    let airdrop = &mut ctx.accounts.airdrop;

    let epoch = airdrop.rotate_root(&admin, new_root)?;
    let airdrop_key = airdrop.key();

    emit_cpi!(MerkleRootRotated {
        airdrop: airdrop_key,
        admin,
        epoch,
        merkle_root: new_root,
    });

    Ok(())
}
