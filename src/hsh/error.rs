// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rusthasher
// File: error.rs
// Author: Volker Schwaberow <volker@schwaberow.de>
// Copyright (c) 2022 Volker Schwaberow

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures surfaced by a single hashing invocation.
///
/// Every variant is terminal: the invocation is abandoned and no partial
/// digest set is handed back to the caller.
#[derive(Debug, Error)]
pub enum HashError {
	#[error("Not found file_path: {}", .0.display())]
	InputNotFound(PathBuf),

	#[error("choose only one of --file or --text")]
	AmbiguousInput,

	#[error("provide --file or --text")]
	MissingInput,

	#[error("Unsupported hash_algorithm: {0}")]
	UnsupportedAlgorithm(String),

	#[error("no hash algorithm selected")]
	NoAlgorithms,

	#[error("chunk size must be at least 1 MB, got {0}")]
	InvalidChunkSize(u64),

	#[error("{}", format_io(.path, .source))]
	Io {
		path: Option<PathBuf>,
		#[source]
		source: io::Error,
	},

	#[error("failed to render output: {0}")]
	Output(String),
}

impl HashError {
	pub fn io(path: Option<PathBuf>, source: io::Error) -> Self {
		Self::Io { path, source }
	}

	/// True for the kinds detected before any byte of input is read.
	pub fn is_configuration(&self) -> bool {
		matches!(
			self,
			Self::AmbiguousInput
				| Self::MissingInput
				| Self::UnsupportedAlgorithm(_)
				| Self::NoAlgorithms
				| Self::InvalidChunkSize(_)
		)
	}
}

fn format_io(path: &Option<PathBuf>, source: &io::Error) -> String {
	match path {
		Some(path) => {
			format!("failed to read {}: {}", path.display(), source)
		}
		None => format!("I/O error: {}", source),
	}
}

impl From<serde_json::Error> for HashError {
	fn from(err: serde_json::Error) -> Self {
		Self::Output(err.to_string())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn unsupported_algorithm_names_the_offender() {
		let err = HashError::UnsupportedAlgorithm("bogus".into());
		assert_eq!(err.to_string(), "Unsupported hash_algorithm: bogus");
		assert!(err.is_configuration());
	}

	#[test]
	fn io_error_mentions_path() {
		let err = HashError::io(
			Some(PathBuf::from("/tmp/x.bin")),
			io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
		);
		let message = err.to_string();
		assert!(message.contains("/tmp/x.bin"));
		assert!(message.contains("denied"));
		assert!(!err.is_configuration());
	}
}
