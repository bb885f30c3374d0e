use anchor_lang::prelude::*;

/**
 * Program Constants
 *
 * PDA seeds, epoch numbering and the encoding constants shared by the
 * off-line tree builder and the on-chain verifier.
 */

/// ===== PDA SEED CONSTANTS =====

/// Seed for airdrop state PDA derivation
/// - Used in: ["airdrop", token_mint, admin, airdrop_id]
/// - Lets one admin run several airdrops of the same token
#[constant]
pub const AIRDROP_SEED: &str = "airdrop";

/// Seed for token vault PDA derivation
/// - Used in: ["vault", airdrop_key]
/// - The vault is owned by the airdrop PDA, which signs every payout
#[constant]
pub const VAULT_SEED: &str = "vault";

/// Seed for claim record PDA derivation
/// - Used in: ["claim", airdrop_key, epoch, leaf]
/// - One record per (epoch, leaf), so a rotated root starts from a clean slate
#[constant]
pub const CLAIM_SEED: &str = "claim";

/// ===== MERKLE CONSTANTS =====

/// Epoch assigned to the root an airdrop is created with
pub const INITIAL_EPOCH: u64 = 1;

/// Longest proof the verifier will fold (trees of up to 2^32 leaves)
pub const MAX_PROOF_DEPTH: usize = 32;

/// Prefix of every published digest and of the identity in a leaf encoding
pub const HEX_PREFIX: &str = "0x";

/// Upper-case form of [`HEX_PREFIX`], accepted when parsing
pub const HEX_PREFIX_UPPER: &str = "0X";

/// Separates identity and amount in a leaf encoding
pub const LEAF_SEPARATOR: char = ' ';

/// Never accepted as a root
pub const EMPTY_ROOT: [u8; 32] = [0; 32];
