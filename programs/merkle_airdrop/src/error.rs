use anchor_lang::prelude::*;

#[error_code]
pub enum AirdropError {
    // Access control errors
    #[msg("Only the airdrop admin can perform this action")]
    Unauthorized,
    #[msg("Entitlements can only be claimed by their own identity")]
    ClaimantMismatch,
    #[msg("Transfer recipient does not own the destination token account")]
    RecipientMismatch,

    // Lifecycle errors
    #[msg("Airdrop is closed")]
    Closed,
    #[msg("Airdrop has already been closed")]
    AlreadyClosed,
    #[msg("Airdrop was created as non-cancelable")]
    NotCancelable,

    // Merkle proof errors
    #[msg("Invalid merkle root")]
    InvalidMerkleRoot,
    #[msg("Invalid proof")]
    InvalidProof,
    #[msg("Entitlement already claimed in this epoch")]
    AlreadyClaimed,
    #[msg("Claim record still belongs to the active epoch")]
    ClaimRecordActive,

    // Tree construction errors
    #[msg("Cannot build a merkle tree without leaves")]
    EmptyTree,
    #[msg("Leaf index out of range")]
    IndexOutOfRange,
    #[msg("Malformed entitlement record")]
    InvalidEntitlement,
    #[msg("Malformed hex digest")]
    InvalidDigest,

    // Amount validation errors
    #[msg("Invalid amount")]
    InvalidAmount,
    #[msg("Insufficient pool balance for this transfer")]
    InsufficientPool,

    // System level errors
    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
    #[msg("Token mint does not match the airdrop's token mint")]
    TokenMintMismatch,
}
