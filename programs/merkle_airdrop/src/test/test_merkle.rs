use proptest::prelude::*;

use super::*;
use crate::constants::MAX_PROOF_DEPTH;
use crate::utils::{
    from_hex, hash_pair, hashv, leaf_hash, proof_from_hex, to_hex, verify, Digest, MerkleTree,
};

fn leaves(count: usize, seed: u64) -> Vec<Digest> {
    (0..count as u64)
        .map(|i| hashv(&[&seed.to_le_bytes()[..], &i.to_le_bytes()[..]]))
        .collect()
}

#[test]
fn test_merkle_tree_consistency() {
    let tree = MerkleTree::from_entitlements(&sample_entitlements()).unwrap();
    let again = MerkleTree::from_entitlements(&sample_entitlements()).unwrap();
    assert_eq!(tree.root(), again.root());

    let mut reordered = sample_entitlements();
    reordered.swap(0, 2);
    let reordered = MerkleTree::from_entitlements(&reordered).unwrap();
    assert_ne!(tree.root(), reordered.root(), "leaf order is part of the commitment");
}

#[test]
fn test_root_layout_for_small_trees() {
    let l = leaves(4, 7);

    assert_eq!(MerkleTree::new(l[..1].to_vec()).unwrap().root(), l[0]);
    assert_eq!(
        MerkleTree::new(l[..2].to_vec()).unwrap().root(),
        hash_pair(&l[0], &l[1])
    );
    assert_eq!(
        MerkleTree::new(l[..3].to_vec()).unwrap().root(),
        hash_pair(&hash_pair(&l[0], &l[1]), &hash_pair(&l[2], &l[2]))
    );
    assert_eq!(
        MerkleTree::new(l.clone()).unwrap().root(),
        hash_pair(&hash_pair(&l[0], &l[1]), &hash_pair(&l[2], &l[3]))
    );
}

#[test]
fn test_get_proof_and_verify() {
    for count in [1, 2, 3, 4, 5, 7, 8, 16, 33] {
        let leaves = leaves(count, count as u64);
        let tree = MerkleTree::new(leaves.clone()).unwrap();
        let root = tree.root();

        for (index, leaf) in leaves.iter().enumerate() {
            let proof = tree.proof(index).unwrap();
            assert_eq!(proof.len(), tree.depth());
            assert!(
                verify(leaf, &proof, &root),
                "proof failed for index {} of {}",
                index,
                count
            );
        }
    }
}

#[test]
fn test_odd_level_duplication() {
    let l = leaves(3, 1);
    let tree = MerkleTree::new(l.clone()).unwrap();

    let proof = tree.proof(2).unwrap();
    assert_eq!(proof[0], l[2], "odd tail is paired with itself");
    assert_eq!(proof[1], hash_pair(&l[0], &l[1]));
}

#[test]
fn test_invalid_proof() {
    let entitlements = sample_entitlements();
    let tree = MerkleTree::from_entitlements(&entitlements).unwrap();
    let root = tree.root();
    let proof = tree.proof(0).unwrap();

    // Wrong leaf
    let wrong_leaf = leaf_hash(&identity(9), 9999);
    assert!(!verify(&wrong_leaf, &proof, &root));

    // Right identity, wrong amount
    assert!(!verify(&leaf_hash(&identity(1), 101), &proof, &root));

    // Tampered proof
    let mut tampered = proof.clone();
    tampered[0][0] = tampered[0][0].wrapping_add(1);
    assert!(!verify(&entitlements[0].leaf(), &tampered, &root));

    // Truncated and extended proofs
    assert!(!verify(&entitlements[0].leaf(), &proof[..1], &root));
    let mut extended = proof.clone();
    extended.push(root);
    assert!(!verify(&entitlements[0].leaf(), &extended, &root));
}

#[test]
fn test_proof_edge_cases() {
    // Single node
    let single = leaves(1, 3);
    let tree = MerkleTree::new(single.clone()).unwrap();
    let proof = tree.proof(0).unwrap();
    assert!(proof.is_empty(), "single node should have empty proof");
    assert!(verify(&single[0], &proof, &tree.root()));

    // Empty tree
    assert_rejected(MerkleTree::new(Vec::new()), AirdropError::EmptyTree);

    // Out of bounds
    let tree = MerkleTree::new(leaves(4, 3)).unwrap();
    assert_rejected(tree.proof(4), AirdropError::IndexOutOfRange);
    assert_rejected(tree.hex_proof(10), AirdropError::IndexOutOfRange);
}

#[test]
fn test_pairing_is_order_insensitive() {
    let l = leaves(2, 11);
    assert_eq!(hash_pair(&l[0], &l[1]), hash_pair(&l[1], &l[0]));

    // Both siblings of a pair verify with the other as their single proof element
    let tree = MerkleTree::new(l.clone()).unwrap();
    assert!(verify(&l[0], &[l[1]], &tree.root()));
    assert!(verify(&l[1], &[l[0]], &tree.root()));
}

#[test]
fn test_overlong_proof_is_rejected() {
    let leaf = leaves(1, 5)[0];
    let proof = leaves(MAX_PROOF_DEPTH + 1, 6);
    let fold = |proof: &[Digest]| {
        proof
            .iter()
            .fold(leaf, |node, sibling| hash_pair(&node, sibling))
    };

    let deepest = &proof[..MAX_PROOF_DEPTH];
    assert!(verify(&leaf, deepest, &fold(deepest)));
    assert!(!verify(&leaf, &proof, &fold(&proof)));
}

#[test]
fn test_hex_wire_format() {
    let tree = MerkleTree::from_entitlements(&sample_entitlements()).unwrap();

    let root = tree.hex_root();
    assert_eq!(root.len(), 66);
    assert!(root.starts_with("0x"));
    assert_eq!(root, root.to_lowercase());
    assert_eq!(from_hex(&root).unwrap(), tree.root());
    assert_eq!(from_hex(&root.to_uppercase()).unwrap(), tree.root());
    assert_eq!(from_hex(&root[2..]).unwrap(), tree.root());

    let proof = tree.hex_proof(1).unwrap();
    assert_eq!(proof_from_hex(&proof).unwrap(), tree.proof(1).unwrap());
    assert_eq!(to_hex(&tree.proof(1).unwrap()[0]), proof[0]);

    assert_rejected(from_hex("0x1234"), AirdropError::InvalidDigest);
    assert_rejected(from_hex(&format!("0x{}", "zz".repeat(32))), AirdropError::InvalidDigest);
}

#[test]
fn test_airdrop_scenario_proofs() {
    let entitlements = sample_entitlements();
    let tree = MerkleTree::from_entitlements(&entitlements).unwrap();
    let proof = tree.proof(0).unwrap();

    assert!(verify(&leaf_hash(&identity(1), 100), &proof, &tree.root()));
    assert!(!verify(&leaf_hash(&identity(2), 88), &proof, &tree.root()));
    assert_eq!(tree.position(&entitlements[2].leaf()), Some(2));
    assert_eq!(tree.leaf(1), Some(entitlements[1].leaf()));
    assert_eq!(tree.leaf_count(), 3);
}

proptest! {
    #[test]
    fn prop_every_leaf_verifies(count in 1usize..80, seed in any::<u64>()) {
        let leaves = leaves(count, seed);
        let tree = MerkleTree::new(leaves.clone()).unwrap();

        for (index, leaf) in leaves.iter().enumerate() {
            let proof = tree.proof(index).unwrap();
            prop_assert!(verify(leaf, &proof, &tree.root()));
        }
    }

    #[test]
    fn prop_bit_flip_in_proof_fails(
        count in 2usize..80,
        seed in any::<u64>(),
        index in any::<prop::sample::Index>(),
        element in any::<prop::sample::Index>(),
        bit in 0usize..256,
    ) {
        let leaves = leaves(count, seed);
        let tree = MerkleTree::new(leaves.clone()).unwrap();
        let index = index.index(count);
        let mut proof = tree.proof(index).unwrap();

        let element = element.index(proof.len());
        proof[element][bit / 8] ^= 1 << (bit % 8);
        prop_assert!(!verify(&leaves[index], &proof, &tree.root()));
    }

    #[test]
    fn prop_bit_flip_in_leaf_fails(
        count in 1usize..80,
        seed in any::<u64>(),
        index in any::<prop::sample::Index>(),
        bit in 0usize..256,
    ) {
        let leaves = leaves(count, seed);
        let tree = MerkleTree::new(leaves.clone()).unwrap();
        let index = index.index(count);
        let proof = tree.proof(index).unwrap();

        let mut leaf = leaves[index];
        leaf[bit / 8] ^= 1 << (bit % 8);
        prop_assert!(!verify(&leaf, &proof, &tree.root()));
    }

    #[test]
    fn prop_substituted_sibling_fails(
        count in 2usize..80,
        seed in any::<u64>(),
        index in any::<prop::sample::Index>(),
        element in any::<prop::sample::Index>(),
        substitute in any::<prop::sample::Index>(),
    ) {
        let leaves = leaves(count, seed);
        let tree = MerkleTree::new(leaves.clone()).unwrap();
        let index = index.index(count);
        let mut proof = tree.proof(index).unwrap();

        let element = element.index(proof.len());
        let substitute = leaves[substitute.index(count)];
        prop_assume!(proof[element] != substitute);
        proof[element] = substitute;
        prop_assert!(!verify(&leaves[index], &proof, &tree.root()));
    }
}
