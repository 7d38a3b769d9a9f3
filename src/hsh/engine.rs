// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rusthasher
// File: engine.rs
// Author: Volker Schwaberow <volker@schwaberow.de>
// Copyright (c) 2022 Volker Schwaberow

//! Single-pass, multi-algorithm digest computation.
//!
//! The engine reads its input one chunk at a time and hands every chunk to
//! each selected accumulator before pulling the next one, so the input is
//! read once no matter how many digests are requested and peak memory is
//! bounded by the chunk size.

use crate::hsh::accumulator::HashAccumulator;
use crate::hsh::algorithm::{select_algorithms, AlgorithmId};
use crate::hsh::chunk::{chunk_size_from_mb, ChunkReader};
use crate::hsh::error::HashError;
use crate::hsh::progress::{NoProgress, ProgressSink};
use crate::hsh::source::InputSource;
use std::path::Path;

/// Digests produced by one invocation, in selection order.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct DigestResult {
	entries: Vec<(AlgorithmId, String)>,
	bytes_processed: u64,
}

impl DigestResult {
	pub fn get(&self, algorithm: AlgorithmId) -> Option<&str> {
		self.entries
			.iter()
			.find(|(alg, _)| *alg == algorithm)
			.map(|(_, digest)| digest.as_str())
	}

	pub fn iter(&self) -> impl Iterator<Item = (AlgorithmId, &str)> {
		self.entries
			.iter()
			.map(|(alg, digest)| (*alg, digest.as_str()))
	}

	pub fn algorithms(&self) -> Vec<AlgorithmId> {
		self.entries.iter().map(|(alg, _)| *alg).collect()
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn bytes_processed(&self) -> u64 {
		self.bytes_processed
	}
}

#[derive(Clone, Debug)]
pub struct DigestEngine {
	algorithms: Vec<AlgorithmId>,
	chunk_size: usize,
}

impl DigestEngine {
	/// Repeated algorithms collapse to their first occurrence.
	pub fn new(
		algorithms: &[AlgorithmId],
		chunk_size: usize,
	) -> Result<Self, HashError> {
		if algorithms.is_empty() {
			return Err(HashError::NoAlgorithms);
		}
		if chunk_size == 0 {
			return Err(HashError::InvalidChunkSize(0));
		}
		let mut unique: Vec<AlgorithmId> =
			Vec::with_capacity(algorithms.len());
		for alg in algorithms {
			if !unique.contains(alg) {
				unique.push(*alg);
			}
		}
		Ok(Self {
			algorithms: unique,
			chunk_size,
		})
	}

	pub fn algorithms(&self) -> &[AlgorithmId] {
		&self.algorithms
	}

	pub fn chunk_size(&self) -> usize {
		self.chunk_size
	}

	/// Opens `source` and hashes it. The source is never modified.
	pub fn hash_source(
		&self,
		source: &InputSource,
		progress: &mut dyn ProgressSink,
	) -> Result<DigestResult, HashError> {
		log::debug!(
			"hashing {} input with [{}], chunk size {} bytes",
			source.kind(),
			join_ids(&self.algorithms),
			self.chunk_size
		);
		let reader = source.open(self.chunk_size)?;
		self.hash_reader(reader, progress)
	}

	/// Streams `reader` through a fresh accumulator per algorithm.
	///
	/// On a read error the sink is abandoned and no digests are returned.
	pub fn hash_reader(
		&self,
		mut reader: ChunkReader,
		progress: &mut dyn ProgressSink,
	) -> Result<DigestResult, HashError> {
		let mut accumulators: Vec<HashAccumulator> = self
			.algorithms
			.iter()
			.map(|alg| HashAccumulator::new(*alg))
			.collect();

		progress.start(reader.total_len());
		let mut bytes_processed: u64 = 0;
		let mut chunks: u64 = 0;
		loop {
			let chunk = match reader.next_chunk() {
				Ok(Some(chunk)) => chunk,
				Ok(None) => break,
				Err(err) => {
					log::debug!(
						"aborting after {} bytes: {}",
						bytes_processed,
						err
					);
					progress.abandon();
					return Err(err);
				}
			};
			for accumulator in accumulators.iter_mut() {
				accumulator.update(chunk);
			}
			let len = chunk.len() as u64;
			bytes_processed += len;
			chunks += 1;
			log::trace!("chunk {} ({} bytes) applied", chunks, len);
			progress.advance(len);
		}
		progress.finish();
		log::debug!(
			"read {} bytes in {} chunks, finalizing",
			bytes_processed,
			chunks
		);

		let entries = accumulators
			.into_iter()
			.map(|accumulator| {
				(accumulator.algorithm(), accumulator.finalize())
			})
			.collect();
		Ok(DigestResult {
			entries,
			bytes_processed,
		})
	}
}

/// Hashes a file with the named algorithms (all four when `None`).
pub fn hash_file<S: AsRef<str>>(
	path: impl AsRef<Path>,
	algorithms: Option<&[S]>,
	chunk_size_mb: u64,
) -> Result<DigestResult, HashError> {
	let source = InputSource::File(path.as_ref().to_path_buf());
	hash_with(&source, algorithms, chunk_size_mb)
}

/// Hashes the UTF-8 encoding of `text`.
pub fn hash_text<S: AsRef<str>>(
	text: &str,
	algorithms: Option<&[S]>,
	chunk_size_mb: u64,
) -> Result<DigestResult, HashError> {
	let source = InputSource::Text(text.to_string());
	hash_with(&source, algorithms, chunk_size_mb)
}

fn hash_with<S: AsRef<str>>(
	source: &InputSource,
	algorithms: Option<&[S]>,
	chunk_size_mb: u64,
) -> Result<DigestResult, HashError> {
	let algorithms = select_algorithms(algorithms)?;
	let engine =
		DigestEngine::new(&algorithms, chunk_size_from_mb(chunk_size_mb)?)?;
	engine.hash_source(source, &mut NoProgress)
}

pub(crate) fn join_ids(algorithms: &[AlgorithmId]) -> String {
	algorithms
		.iter()
		.map(|alg| alg.id())
		.collect::<Vec<_>>()
		.join(", ")
}
