use anchor_lang::prelude::*;
use anchor_spl::token_interface::{transfer_checked, TransferChecked};

use crate::constants::AIRDROP_SEED;
use crate::controller::TokenLedger;
use crate::error::AirdropError;
use crate::state::AirdropState;

/// Universal token transfer function that supports both SPL Token and Token 2022
pub fn transfer_token<'a>(
    authority: AccountInfo<'a>,
    from: AccountInfo<'a>,
    to: AccountInfo<'a>,
    mint: AccountInfo<'a>,
    token_program: AccountInfo<'a>,
    amount: u64,
    decimals: u8,
    signer_seeds: Option<&[&[&[u8]]]>,
) -> Result<()> {
    let cpi_accounts = TransferChecked {
        from,
        mint,
        to,
        authority,
    };

    let cpi_ctx = match signer_seeds {
        Some(seeds) => CpiContext::new_with_signer(token_program, cpi_accounts, seeds),
        None => CpiContext::new(token_program, cpi_accounts),
    };

    transfer_checked(cpi_ctx, amount, decimals)
}

/// Owned copy of the airdrop PDA seeds, so the vault can be signed for while
/// the state account itself is mutably borrowed.
#[derive(Debug, Clone, Copy)]
pub struct AirdropSeeds {
    token_mint: Pubkey,
    admin: Pubkey,
    airdrop_id: [u8; 8],
    bump: [u8; 1],
}

impl AirdropSeeds {
    pub fn of(airdrop: &AirdropState) -> Self {
        Self {
            token_mint: airdrop.token_mint,
            admin: airdrop.admin,
            airdrop_id: airdrop.airdrop_id.to_le_bytes(),
            bump: [airdrop.bump],
        }
    }

    /// ["airdrop", token_mint, admin, airdrop_id, bump]
    pub fn signer(&self) -> [&[u8]; 5] {
        [
            AIRDROP_SEED.as_bytes(),
            self.token_mint.as_ref(),
            self.admin.as_ref(),
            self.airdrop_id.as_ref(),
            self.bump.as_ref(),
        ]
    }
}

/**
 * Token ledger backed by the airdrop's vault
 *
 * Pays out of the vault into a single destination token account per
 * instruction. The balance is read once from the vault and tracked locally,
 * since the deserialized vault account is not reloaded after a CPI.
 */
pub struct VaultLedger<'info> {
    /// Airdrop state PDA, the vault's token authority
    pub authority: AccountInfo<'info>,
    pub vault: AccountInfo<'info>,
    pub destination: AccountInfo<'info>,
    /// Owner of `destination`; the only accepted recipient
    pub recipient: Pubkey,
    pub mint: AccountInfo<'info>,
    pub token_program: AccountInfo<'info>,
    pub decimals: u8,
    pub balance: u64,
    pub seeds: AirdropSeeds,
}

impl TokenLedger for VaultLedger<'_> {
    fn pool_balance(&self) -> Result<u64> {
        Ok(self.balance)
    }

    fn transfer(&mut self, to: &Pubkey, amount: u64) -> Result<()> {
        require_keys_eq!(*to, self.recipient, AirdropError::RecipientMismatch);
        let remaining = self
            .balance
            .checked_sub(amount)
            .ok_or(AirdropError::InsufficientPool)?;

        let seeds = self.seeds.signer();
        let signer = &[&seeds[..]];
        transfer_token(
            self.authority.clone(),
            self.vault.clone(),
            self.destination.clone(),
            self.mint.clone(),
            self.token_program.clone(),
            amount,
            self.decimals,
            Some(signer),
        )?;

        self.balance = remaining;
        Ok(())
    }
}
