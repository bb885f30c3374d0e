use std::str::FromStr;

use anchor_lang::error::Error;
use anchor_lang::prelude::*;

use crate::constants::{HEX_PREFIX, HEX_PREFIX_UPPER, LEAF_SEPARATOR};
use crate::error::AirdropError;
use crate::utils::merkle::{hashv, Digest};

/// Canonical text form of an entitlement: `0x<lowercase hex identity> <decimal amount>`.
///
/// The identity is fixed width and the amount is printed without leading
/// zeros, so two different entitlements never share an encoding.
pub fn encode_leaf(identity: &Pubkey, amount: u64) -> String {
    format!(
        "{}{}{}{}",
        HEX_PREFIX,
        hex::encode(identity.to_bytes()),
        LEAF_SEPARATOR,
        amount
    )
}

/// Leaf committed to the tree for `(identity, amount)`.
pub fn leaf_hash(identity: &Pubkey, amount: u64) -> Digest {
    hashv(&[encode_leaf(identity, amount).as_bytes()])
}

/// One line of an airdrop whitelist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entitlement {
    pub identity: Pubkey,
    pub amount: u64,
}

impl Entitlement {
    pub fn new(identity: Pubkey, amount: u64) -> Self {
        Self { identity, amount }
    }

    pub fn encode(&self) -> String {
        encode_leaf(&self.identity, self.amount)
    }

    pub fn leaf(&self) -> Digest {
        leaf_hash(&self.identity, self.amount)
    }
}

/// Parses `<identity> <amount>`.
///
/// The identity is either 64 hex digits in any case (with or without `0x`) or
/// a base58 public key. Both decode to the same `Pubkey`, which is what gets
/// re-encoded in lowercase, so upper-case whitelists still produce valid proofs.
impl FromStr for Entitlement {
    type Err = Error;

    fn from_str(line: &str) -> Result<Self> {
        let mut fields = line.split_whitespace();
        let (Some(identity), Some(amount), None) = (fields.next(), fields.next(), fields.next())
        else {
            return err!(AirdropError::InvalidEntitlement);
        };

        let identity = parse_identity(identity)?;
        if !amount.bytes().all(|b| b.is_ascii_digit()) {
            return err!(AirdropError::InvalidEntitlement);
        }
        let amount: u64 = amount
            .parse()
            .map_err(|_| error!(AirdropError::InvalidAmount))?;
        require!(amount > 0, AirdropError::InvalidAmount);

        Ok(Self { identity, amount })
    }
}

fn parse_identity(text: &str) -> Result<Pubkey> {
    let digits = text
        .strip_prefix(HEX_PREFIX)
        .or_else(|| text.strip_prefix(HEX_PREFIX_UPPER))
        .unwrap_or(text);
    if digits.len() == 64 {
        let mut bytes = [0u8; 32];
        if hex::decode_to_slice(digits, &mut bytes).is_ok() {
            return Ok(Pubkey::new_from_array(bytes));
        }
    }
    Pubkey::from_str(text).map_err(|_| error!(AirdropError::InvalidEntitlement))
}

/// Parses a whitelist, one entitlement per line.
///
/// Blank lines and lines starting with `#` are skipped; order is kept, since it
/// fixes each recipient's leaf index.
pub fn parse_entitlements(list: &str) -> Result<Vec<Entitlement>> {
    list.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(Entitlement::from_str)
        .collect()
}
