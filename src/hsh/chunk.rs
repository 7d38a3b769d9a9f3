// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rusthasher
// File: chunk.rs
// Author: Volker Schwaberow <volker@schwaberow.de>
// Copyright (c) 2022 Volker Schwaberow

use crate::hsh::error::HashError;
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

pub const DEFAULT_CHUNK_SIZE_MB: u64 = 8;

const BYTES_PER_MB: u64 = 1024 * 1024;

/// Converts a chunk size given in megabytes into bytes.
pub fn chunk_size_from_mb(megabytes: u64) -> Result<usize, HashError> {
	if megabytes == 0 {
		return Err(HashError::InvalidChunkSize(megabytes));
	}
	megabytes
		.checked_mul(BYTES_PER_MB)
		.and_then(|bytes| usize::try_from(bytes).ok())
		.ok_or(HashError::InvalidChunkSize(megabytes))
}

enum Feed {
	File {
		file: File,
		path: PathBuf,
		buffer: Vec<u8>,
		consumed: u64,
		exhausted: bool,
	},
	Memory {
		data: Vec<u8>,
		offset: usize,
	},
}

/// Forward-only reader handing out consecutive chunks of its input.
///
/// Every chunk except the last is exactly `chunk_size` bytes long. Once the
/// input is exhausted `next_chunk` keeps returning `Ok(None)`.
pub struct ChunkReader {
	feed: Feed,
	chunk_size: usize,
	total_len: u64,
}

impl ChunkReader {
	/// Opens `path` for binary reading. The handle is closed when the reader
	/// is dropped, whichever way the caller leaves.
	pub fn from_file(
		path: &Path,
		chunk_size: usize,
	) -> Result<Self, HashError> {
		check_chunk_size(chunk_size)?;
		let file = File::open(path).map_err(|err| {
			HashError::io(Some(path.to_path_buf()), err)
		})?;
		let total_len = file
			.metadata()
			.map_err(|err| HashError::io(Some(path.to_path_buf()), err))?
			.len();
		Ok(Self {
			feed: Feed::File {
				file,
				path: path.to_path_buf(),
				buffer: Vec::new(),
				consumed: 0,
				exhausted: false,
			},
			chunk_size,
			total_len,
		})
	}

	pub fn from_bytes(
		data: Vec<u8>,
		chunk_size: usize,
	) -> Result<Self, HashError> {
		check_chunk_size(chunk_size)?;
		let total_len = data.len() as u64;
		Ok(Self {
			feed: Feed::Memory { data, offset: 0 },
			chunk_size,
			total_len,
		})
	}

	pub fn chunk_size(&self) -> usize {
		self.chunk_size
	}

	/// Size of the input as known when the reader was created.
	pub fn total_len(&self) -> u64 {
		self.total_len
	}

	pub fn next_chunk(&mut self) -> Result<Option<&[u8]>, HashError> {
		let chunk_size = self.chunk_size;
		let total_len = self.total_len;
		match &mut self.feed {
			Feed::Memory { data, offset } => {
				if *offset >= data.len() {
					return Ok(None);
				}
				let start = *offset;
				let end = start.saturating_add(chunk_size).min(data.len());
				*offset = end;
				Ok(Some(&data[start..end]))
			}
			Feed::File {
				file,
				path,
				buffer,
				consumed,
				exhausted,
			} => {
				if *exhausted {
					return Ok(None);
				}
				let expected = total_len.saturating_sub(*consumed);
				let filled = read_chunk(file, buffer, chunk_size, expected)
					.map_err(|err| HashError::io(Some(path.clone()), err))?;
				*consumed += filled as u64;
				if filled < chunk_size {
					*exhausted = true;
				}
				if filled == 0 {
					return Ok(None);
				}
				Ok(Some(&buffer[..filled]))
			}
		}
	}
}

fn check_chunk_size(chunk_size: usize) -> Result<(), HashError> {
	if chunk_size == 0 {
		return Err(HashError::InvalidChunkSize(0));
	}
	Ok(())
}

/// Replaces the contents of `buffer` with the next `chunk_size` bytes, or
/// fewer at end of input. Capacity follows the bytes actually read, with
/// `expected` as the first guess, never the configured chunk size.
fn read_chunk<R: Read>(
	reader: &mut R,
	buffer: &mut Vec<u8>,
	chunk_size: usize,
	expected: u64,
) -> io::Result<usize> {
	buffer.clear();
	let hint = usize::try_from(expected).unwrap_or(usize::MAX).min(chunk_size);
	buffer.reserve(hint);
	reader
		.by_ref()
		.take(chunk_size as u64)
		.read_to_end(buffer)
}
