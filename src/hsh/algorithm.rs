// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rusthasher
// File: algorithm.rs
// Author: Volker Schwaberow <volker@schwaberow.de>
// Copyright (c) 2022 Volker Schwaberow

use crate::hsh::error::HashError;
use std::fmt;
use std::str::FromStr;
use strum::EnumIter;

/// Digest algorithms the engine can fan a chunk out to.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, EnumIter)]
pub enum AlgorithmId {
	Md5,
	Sha1,
	Sha256,
	Sha512,
}

impl AlgorithmId {
	/// Selection used when the caller does not name any algorithm.
	pub const DEFAULT: [AlgorithmId; 4] = [
		AlgorithmId::Md5,
		AlgorithmId::Sha1,
		AlgorithmId::Sha256,
		AlgorithmId::Sha512,
	];

	pub fn id(self) -> &'static str {
		match self {
			Self::Md5 => "md5",
			Self::Sha1 => "sha1",
			Self::Sha256 => "sha256",
			Self::Sha512 => "sha512",
		}
	}

	/// Raw digest size in bytes.
	pub fn digest_len(self) -> usize {
		match self {
			Self::Md5 => 16,
			Self::Sha1 => 20,
			Self::Sha256 => 32,
			Self::Sha512 => 64,
		}
	}

	pub fn hex_len(self) -> usize {
		self.digest_len() * 2
	}
}

impl fmt::Display for AlgorithmId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.id())
	}
}

impl FromStr for AlgorithmId {
	type Err = HashError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let trimmed = s.trim();
		match trimmed.to_ascii_lowercase().as_str() {
			"md5" => Ok(Self::Md5),
			"sha1" | "sha-1" => Ok(Self::Sha1),
			"sha256" | "sha-256" => Ok(Self::Sha256),
			"sha512" | "sha-512" => Ok(Self::Sha512),
			_ => Err(HashError::UnsupportedAlgorithm(trimmed.to_string())),
		}
	}
}

/// Validates a requested algorithm list, stopping at the first entry that
/// is not recognised. `None` selects [`AlgorithmId::DEFAULT`].
///
/// Repeated identifiers are kept here; the engine collapses them.
pub fn select_algorithms<S: AsRef<str>>(
	requested: Option<&[S]>,
) -> Result<Vec<AlgorithmId>, HashError> {
	let Some(requested) = requested else {
		return Ok(AlgorithmId::DEFAULT.to_vec());
	};
	if requested.is_empty() {
		return Err(HashError::NoAlgorithms);
	}
	requested
		.iter()
		.map(|name| name.as_ref().parse::<AlgorithmId>())
		.collect()
}

/// Parses a comma separated list such as `"sha256, md5"`.
pub fn parse_algorithm_list(
	list: &str,
) -> Result<Vec<AlgorithmId>, HashError> {
	let names: Vec<&str> = list
		.split(',')
		.map(str::trim)
		.filter(|name| !name.is_empty())
		.collect();
	select_algorithms(Some(names.as_slice()))
}
