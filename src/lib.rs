// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rusthasher
// File: lib.rs
// Author: Volker Schwaberow <volker@schwaberow.de>
// Copyright (c) 2022 Volker Schwaberow

pub mod hsh {
	pub mod accumulator;
	pub mod algorithm;
	pub mod app;
	pub mod chunk;
	pub mod engine;
	pub mod error;
	pub mod output;
	pub mod progress;
	pub mod source;
}

pub use hsh::algorithm::AlgorithmId;
pub use hsh::engine::{hash_file, hash_text, DigestEngine, DigestResult};
pub use hsh::error::HashError;
pub use hsh::source::InputSource;
