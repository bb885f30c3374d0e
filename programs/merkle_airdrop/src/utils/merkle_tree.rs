use anchor_lang::prelude::*;

use crate::constants::{HEX_PREFIX, HEX_PREFIX_UPPER};
use crate::error::AirdropError;
use crate::utils::leaf::Entitlement;
use crate::utils::merkle::{hash_pair, Digest};

/**
 * Off-line merkle tree over an ordered list of leaves
 *
 * Construction rules (mirrored by `verify`):
 * - Adjacent nodes are paired left to right
 * - A level with an odd count pairs its last node with itself
 * - Pairs are combined with `hash_pair`, which sorts the two digests
 *
 * Leaf order matters: the same leaves in another order give another root.
 */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MerkleTree {
    /// `levels[0]` holds the leaves, the last level holds only the root
    levels: Vec<Vec<Digest>>,
    root: Digest,
}

impl MerkleTree {
    pub fn new(leaves: Vec<Digest>) -> Result<Self> {
        require!(!leaves.is_empty(), AirdropError::EmptyTree);

        let mut levels = vec![leaves];
        loop {
            let level = &levels[levels.len() - 1];
            if level.len() == 1 {
                break;
            }
            let next = next_level(level);
            levels.push(next);
        }
        let root = levels[levels.len() - 1][0];

        Ok(Self { levels, root })
    }

    pub fn from_entitlements(entitlements: &[Entitlement]) -> Result<Self> {
        Self::new(entitlements.iter().map(Entitlement::leaf).collect())
    }

    pub fn root(&self) -> Digest {
        self.root
    }

    pub fn leaf_count(&self) -> usize {
        self.levels[0].len()
    }

    /// Number of siblings in every proof of this tree.
    pub fn depth(&self) -> usize {
        self.levels.len() - 1
    }

    pub fn leaf(&self, index: usize) -> Option<Digest> {
        self.levels[0].get(index).copied()
    }

    /// Index of the first occurrence of `leaf`.
    pub fn position(&self, leaf: &Digest) -> Option<usize> {
        self.levels[0].iter().position(|candidate| candidate == leaf)
    }

    /// Sibling hashes from the leaf at `index` up to (excluding) the root.
    pub fn proof(&self, index: usize) -> Result<Vec<Digest>> {
        require!(index < self.leaf_count(), AirdropError::IndexOutOfRange);

        let mut proof = Vec::with_capacity(self.depth());
        let mut position = index;
        for level in &self.levels[..self.depth()] {
            // Odd tail: the node was paired with itself
            let sibling = level.get(position ^ 1).unwrap_or(&level[position]);
            proof.push(*sibling);
            position /= 2;
        }

        Ok(proof)
    }

    pub fn hex_root(&self) -> String {
        to_hex(&self.root)
    }

    pub fn hex_proof(&self, index: usize) -> Result<Vec<String>> {
        Ok(self.proof(index)?.iter().map(to_hex).collect())
    }
}

fn next_level(level: &[Digest]) -> Vec<Digest> {
    level
        .chunks(2)
        .map(|pair| {
            let left = &pair[0];
            let right = pair.get(1).unwrap_or(left);
            hash_pair(left, right)
        })
        .collect()
}

/// Published form of a digest: `0x` followed by 64 lowercase hex digits.
pub fn to_hex(digest: &Digest) -> String {
    format!("{}{}", HEX_PREFIX, hex::encode(digest))
}

/// Parses a published digest. Either case is accepted, the prefix is optional.
pub fn from_hex(text: &str) -> Result<Digest> {
    let text = text.trim();
    let digits = text
        .strip_prefix(HEX_PREFIX)
        .or_else(|| text.strip_prefix(HEX_PREFIX_UPPER))
        .unwrap_or(text);
    let mut digest = [0u8; 32];
    hex::decode_to_slice(digits, &mut digest).map_err(|_| error!(AirdropError::InvalidDigest))?;
    Ok(digest)
}

pub fn proof_from_hex<S: AsRef<str>>(elements: &[S]) -> Result<Vec<Digest>> {
    elements.iter().map(|element| from_hex(element.as_ref())).collect()
}
