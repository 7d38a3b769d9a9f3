// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rusthasher
// File: source.rs
// Author: Volker Schwaberow <volker@schwaberow.de>
// Copyright (c) 2022 Volker Schwaberow

use crate::hsh::chunk::ChunkReader;
use crate::hsh::error::HashError;
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InputKind {
	File,
	Text,
}

impl fmt::Display for InputKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			Self::File => "file",
			Self::Text => "text",
		})
	}
}

/// What gets hashed: the bytes of a file, or the UTF-8 encoding of a string.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum InputSource {
	File(PathBuf),
	Text(String),
}

impl InputSource {
	/// Picks the input from the CLI surface.
	///
	/// `--file` and `--text` are mutually exclusive and that is checked
	/// before the filesystem is touched. A bare positional value is used only
	/// when neither flag is present; it names a file when such a regular
	/// file exists and is taken as literal text otherwise.
	pub fn resolve(
		positional: Option<&str>,
		file: Option<&str>,
		text: Option<&str>,
	) -> Result<Self, HashError> {
		match (file, text) {
			(Some(_), Some(_)) => Err(HashError::AmbiguousInput),
			(Some(path), None) => Ok(Self::File(PathBuf::from(path))),
			(None, Some(text)) => Ok(Self::Text(text.to_string())),
			(None, None) => match positional {
				Some(value) if Path::new(value).is_file() => {
					Ok(Self::File(PathBuf::from(value)))
				}
				Some(value) if !value.is_empty() => {
					Ok(Self::Text(value.to_string()))
				}
				_ => Err(HashError::MissingInput),
			},
		}
	}

	pub fn kind(&self) -> InputKind {
		match self {
			Self::File(_) => InputKind::File,
			Self::Text(_) => InputKind::Text,
		}
	}

	/// Human readable form of the input, before any shortening.
	pub fn label(&self) -> String {
		match self {
			Self::File(path) => path.display().to_string(),
			Self::Text(text) => text.clone(),
		}
	}

	/// Opens the byte stream behind this source.
	///
	/// A file must exist and be a regular file; anything else is reported
	/// as [`HashError::InputNotFound`] before reading starts.
	pub fn open(&self, chunk_size: usize) -> Result<ChunkReader, HashError> {
		match self {
			Self::File(path) => {
				if !path.is_file() {
					return Err(HashError::InputNotFound(path.clone()));
				}
				ChunkReader::from_file(path, chunk_size)
			}
			Self::Text(text) => {
				ChunkReader::from_bytes(text.as_bytes().to_vec(), chunk_size)
			}
		}
	}
}
