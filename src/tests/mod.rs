#![cfg(test)]
//! End to end tests running whole inputs through `encode` and `decode`.

use crate::decoding::bit_reader::BitReader;
use crate::huff0::{build_tree, CodeTable, FrequencyTable, Node};
use crate::{decode, encode};
use rand::{Rng, SeedableRng};
use std::vec::Vec;

/// ```text
///                20
///        12               8
///    C,6     A,6     E,5      3
///                         D,2   B,1
/// ```
/// Serialized as `00101000 01110100 00010101 00010101 01000100 1`, 49 bits.
pub(crate) fn reference_tree() -> Node {
    Node::internal(
        Node::internal(Node::leaf(b'C', 6), Node::leaf(b'A', 6)),
        Node::internal(
            Node::leaf(b'E', 5),
            Node::internal(Node::leaf(b'D', 2), Node::leaf(b'B', 1)),
        ),
    )
}

fn random_input(rng: &mut rand::rngs::SmallRng, len: usize, alphabet: u16) -> Vec<u8> {
    (0..len)
        .map(|_| (rng.gen_range(0..alphabet)) as u8)
        .collect()
}

fn tree_size(encoded: &[u8]) -> u32 {
    u32::from_be_bytes([encoded[0], encoded[1], encoded[2], encoded[3]])
}

/// Checks everything that must hold for the payload of `data`, then decodes it.
fn check_payload(data: &[u8]) {
    let encoded = encode(data);
    let tree_bits = tree_size(&encoded) as usize;
    let sentinel = *encoded.last().unwrap();
    assert!(sentinel <= 7, "sentinel out of range: {}", sentinel);

    let freqs = FrequencyTable::from_data(data);
    let payload_bits = build_tree(&freqs)
        .map(|root| CodeTable::build(&root).encoded_len(&freqs) as usize)
        .unwrap_or(0);
    let total_bits = tree_bits + payload_bits;
    assert_eq!(usize::from(sentinel), total_bits % 8);
    assert_eq!(encoded.len(), 4 + (total_bits + 7) / 8 + 1);

    // the header is exactly the size of the tree in front of the codes
    if tree_bits > 0 {
        let mut br = BitReader::new(&encoded[4..]).unwrap();
        br.read_tree(0, tree_bits).unwrap();
        assert_eq!(br.bit_pos(), tree_bits);
        assert_eq!(br.bits_remaining(), payload_bits);
    }

    assert_eq!(decode(&encoded).unwrap(), data);
}

#[test]
fn scenario_three_symbols() {
    let data = b"AAABBC";
    check_payload(data);
    let encoded = encode(data);
    assert_eq!(tree_size(&encoded), 29);
    assert_eq!(decode(&encoded).unwrap(), data);
}

#[test]
fn scenario_single_symbol_keeps_count() {
    for len in 1..40 {
        let data = std::vec![b'X'; len];
        check_payload(&data);
    }
    assert_eq!(encode(b"XXXXXX"), [0, 0, 0, 9, 0b1010_1100, 0, 7]);
    assert_eq!(decode(&encode(b"X")).unwrap(), b"X");
}

#[test]
fn scenario_two_symbols() {
    let encoded = encode(b"ABABABAB");
    // header + 19 tree bits + 8 code bits + sentinel
    assert_eq!(encoded.len(), 4 + 4 + 1);
    assert_eq!(*encoded.last().unwrap(), 3);
    check_payload(b"ABABABAB");
}

#[test]
fn scenario_empty() {
    assert_eq!(encode(&[]), [0, 0, 0, 0, 0]);
    assert_eq!(decode(&[0, 0, 0, 0, 0]).unwrap(), Vec::<u8>::new());
}

#[test]
fn deterministic() {
    let mut rng = rand::rngs::SmallRng::seed_from_u64(0xDEADBEEF);
    for _ in 0..20 {
        let data = random_input(&mut rng, 1000, 40);
        assert_eq!(encode(&data), encode(&data));
    }
}

#[test]
fn random_round_trips() {
    let mut rng = rand::rngs::SmallRng::seed_from_u64(0x5EED);
    for _ in 0..200 {
        let len = rng.gen_range(1..2000);
        let alphabet = rng.gen_range(1..=256);
        let data = random_input(&mut rng, len, alphabet);
        check_payload(&data);
    }
}

#[test]
fn every_byte_value() {
    let data: Vec<u8> = (0..=255u8).cycle().take(256 * 7 + 13).collect();
    check_payload(&data);
    // 256 leaves and 255 internal nodes
    assert_eq!(tree_size(&encode(&data)), 256 * 9 + 255);
}

#[test]
fn skewed_frequencies() {
    // fibonacci counts give the deepest possible tree for their alphabet
    let mut data = Vec::new();
    let (mut a, mut b) = (1usize, 1usize);
    for symbol in 0..20u8 {
        data.extend(core::iter::repeat(symbol).take(a));
        let next = a + b;
        a = b;
        b = next;
    }
    let root = build_tree(&FrequencyTable::from_data(&data)).unwrap();
    assert_eq!(root.depth(), 19);
    check_payload(&data);
}

#[test]
fn text() {
    check_payload(
        b"It is a truth universally acknowledged, that a single man in possession \
          of a good fortune, must be in want of a wife.",
    );
}

#[test]
fn garbage_does_not_panic() {
    let mut rng = rand::rngs::SmallRng::seed_from_u64(0xBADC0DE);
    for _ in 0..2000 {
        let len = rng.gen_range(0..64);
        let mut data = random_input(&mut rng, len, 256);
        if data.len() > 4 && rng.gen_bool(0.5) {
            // keep the tree size plausible so the tree parser gets exercised
            data[0] = 0;
            data[1] = 0;
            data[2] = rng.gen_range(0..2);
        }
        let _ = decode(&data);
    }
}

#[test]
fn corrupted_payloads_do_not_panic() {
    let mut rng = rand::rngs::SmallRng::seed_from_u64(7);
    let original = encode(b"the quick brown fox jumps over the lazy dog");
    for _ in 0..2000 {
        let mut data = original.clone();
        let idx = rng.gen_range(0..data.len());
        data[idx] ^= 1u8 << rng.gen_range(0..8u32);
        let _ = decode(&data);
    }
    for len in 0..original.len() {
        let _ = decode(&original[..len]);
    }
}
