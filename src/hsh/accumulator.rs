// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rusthasher
// File: accumulator.rs
// Author: Volker Schwaberow <volker@schwaberow.de>
// Copyright (c) 2022 Volker Schwaberow

use crate::hsh::algorithm::AlgorithmId;
use digest::Digest;

macro_rules! dispatch {
	($self:expr, $state:ident => $body:expr) => {
		match $self {
			HashAccumulator::Md5($state) => $body,
			HashAccumulator::Sha1($state) => $body,
			HashAccumulator::Sha256($state) => $body,
			HashAccumulator::Sha512($state) => $body,
		}
	};
}

/// Incremental digest state for one algorithm.
///
/// `finalize` takes the accumulator by value, so it cannot be fed again
/// once a digest has been produced.
#[derive(Clone)]
pub enum HashAccumulator {
	Md5(md5::Md5),
	Sha1(sha1::Sha1),
	Sha256(sha2::Sha256),
	Sha512(sha2::Sha512),
}

impl HashAccumulator {
	pub fn new(algorithm: AlgorithmId) -> Self {
		match algorithm {
			AlgorithmId::Md5 => Self::Md5(md5::Md5::new()),
			AlgorithmId::Sha1 => Self::Sha1(sha1::Sha1::new()),
			AlgorithmId::Sha256 => Self::Sha256(sha2::Sha256::new()),
			AlgorithmId::Sha512 => Self::Sha512(sha2::Sha512::new()),
		}
	}

	pub fn algorithm(&self) -> AlgorithmId {
		match self {
			Self::Md5(_) => AlgorithmId::Md5,
			Self::Sha1(_) => AlgorithmId::Sha1,
			Self::Sha256(_) => AlgorithmId::Sha256,
			Self::Sha512(_) => AlgorithmId::Sha512,
		}
	}

	pub fn update(&mut self, data: &[u8]) {
		dispatch!(self, state => Digest::update(state, data))
	}

	/// Consumes the state and returns the lowercase hex digest.
	pub fn finalize(self) -> String {
		dispatch!(self, state => hex::encode(state.finalize()))
	}
}

impl std::fmt::Debug for HashAccumulator {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_tuple("HashAccumulator")
			.field(&self.algorithm())
			.finish()
	}
}

/// Hashes an in-memory buffer in one call.
pub fn digest_bytes(algorithm: AlgorithmId, data: &[u8]) -> String {
	let mut accumulator = HashAccumulator::new(algorithm);
	accumulator.update(data);
	accumulator.finalize()
}
