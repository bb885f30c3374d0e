use anchor_lang::solana_program::keccak;

use crate::constants::MAX_PROOF_DEPTH;

/// A leaf, internal node or root.
pub type Digest = [u8; 32];

/// keccak256 over the concatenation of `parts`.
pub fn hashv(parts: &[&[u8]]) -> Digest {
    keccak::hashv(parts).to_bytes()
}

/**
 * Hashes two nodes, smaller digest first
 *
 * Sorting makes `hash_pair(a, b) == hash_pair(b, a)`, so a proof is just the
 * list of siblings and never records which side they sit on. The builder in
 * `merkle_tree` combines nodes with the same function.
 */
pub fn hash_pair(a: &Digest, b: &Digest) -> Digest {
    if a <= b {
        hashv(&[&a[..], &b[..]])
    } else {
        hashv(&[&b[..], &a[..]])
    }
}

/// Folds `proof` over `leaf` and compares the result with `root`.
///
/// Malformed proofs (wrong siblings, wrong length, deeper than
/// [`MAX_PROOF_DEPTH`]) verify to `false`.
pub fn verify(leaf: &Digest, proof: &[Digest], root: &Digest) -> bool {
    if proof.len() > MAX_PROOF_DEPTH {
        return false;
    }
    proof
        .iter()
        .fold(*leaf, |node, sibling| hash_pair(&node, sibling))
        == *root
}
