// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rusthasher

use hex_literal::hex;
use md5::Md5;
use rusthasher::{hash_text, AlgorithmId};
use sha1::{Digest, Sha1};
use sha2::{Sha256, Sha512};

const PHRASE: &str = "Jeder wackere Bayer vertilgt bequem zwo Pfund Kalbshaxen.";

fn engine_digest(alg: AlgorithmId) -> Vec<u8> {
	let result = hash_text(PHRASE, Some(&[alg.id()][..]), 1).unwrap();
	hex::decode(result.get(alg).unwrap()).unwrap()
}

#[test]
fn lib_sha1_hash() {
	let mut hasher = Sha1::new();
	hasher.update(PHRASE.as_bytes());
	let result = hasher.finalize();
	assert_eq!(result[..], hex!("1C90817FE5067AB226A331D4E7454858F6DD966A"));
	assert_eq!(engine_digest(AlgorithmId::Sha1), result[..]);
}

#[test]
fn lib_md5_matches_engine() {
	let mut hasher = Md5::new();
	hasher.update(PHRASE.as_bytes());
	assert_eq!(engine_digest(AlgorithmId::Md5), hasher.finalize()[..]);
}

#[test]
fn lib_sha256_matches_engine() {
	let mut hasher = Sha256::new();
	hasher.update(PHRASE.as_bytes());
	assert_eq!(engine_digest(AlgorithmId::Sha256), hasher.finalize()[..]);
}

#[test]
fn lib_sha512_matches_engine() {
	let mut hasher = Sha512::new();
	hasher.update(PHRASE.as_bytes());
	assert_eq!(engine_digest(AlgorithmId::Sha512), hasher.finalize()[..]);
}

#[test]
fn abc_vectors_for_all_algorithms() {
	let result = hash_text::<&str>("abc", None, 8).unwrap();
	assert_eq!(
		result.get(AlgorithmId::Md5),
		Some("900150983cd24fb0d6963f7d28e17f72")
	);
	assert_eq!(
		result.get(AlgorithmId::Sha1),
		Some("a9993e364706816aba3e25717850c26c9cd0d89d")
	);
	assert_eq!(
		result.get(AlgorithmId::Sha256),
		Some("ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad")
	);
	assert_eq!(
		result.get(AlgorithmId::Sha512),
		Some("ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f")
	);
}
