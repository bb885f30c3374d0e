use anchor_lang::prelude::*;

/// Event emitted when a new airdrop is created
#[event]
pub struct AirdropCreated {
    /// The airdrop state account public key
    pub airdrop: Pubkey,
    /// Caller-chosen id, part of the airdrop PDA seeds
    pub airdrop_id: u64,
    /// Administrator of the airdrop
    pub admin: Pubkey,
    /// Token mint address
    pub token_mint: Pubkey,
    /// Token vault address
    pub token_vault: Pubkey,
    /// Root active in the first epoch
    pub merkle_root: [u8; 32],
    /// Whether the admin may sweep and close
    pub cancelable: bool,
    /// Amount deposited at creation
    pub initial_total_amount: u64,
}

/// Event emitted when the admin rotates the merkle root
#[event]
pub struct MerkleRootRotated {
    /// The airdrop state account public key
    pub airdrop: Pubkey,
    /// Admin who rotated the root
    pub admin: Pubkey,
    /// Epoch started by this rotation
    pub epoch: u64,
    /// The new merkle root
    pub merkle_root: [u8; 32],
}

/// Event emitted when tokens are claimed
#[event]
pub struct TokensClaimed {
    /// The airdrop state account public key
    pub airdrop: Pubkey,
    /// Address of the claimant
    pub claimant: Pubkey,
    /// Epoch the claim was made in
    pub epoch: u64,
    /// Leaf that was consumed
    pub leaf: [u8; 32],
    /// Amount paid out
    pub amount: u64,
    /// Total amount claimed from the airdrop by all users
    pub total_claimed: u64,
}

/// Event emitted when the admin sweeps the pool and closes the airdrop
#[event]
pub struct AirdropClosed {
    /// The airdrop state account public key
    pub airdrop: Pubkey,
    /// Admin who received the remaining tokens
    pub admin: Pubkey,
    /// Amount swept out of the vault
    pub amount_swept: u64,
}

/// Event emitted when a spent claim record is closed for rent
#[event]
pub struct ClaimRecordClosed {
    /// The airdrop state account public key
    pub airdrop: Pubkey,
    /// Claimant who received the rent
    pub claimant: Pubkey,
    /// Epoch the record belonged to
    pub epoch: u64,
}
