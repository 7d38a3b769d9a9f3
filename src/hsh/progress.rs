// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rusthasher
// File: progress.rs
// Author: Volker Schwaberow <volker@schwaberow.de>
// Copyright (c) 2022 Volker Schwaberow

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::io::{self, IsTerminal};
use std::str::FromStr;

/// Receives byte counts while the engine streams its input.
///
/// The engine calls `start` once, `advance` after every chunk has reached
/// all accumulators, then either `finish` or `abandon`. Digests never depend
/// on what a sink does with these calls.
pub trait ProgressSink {
	fn start(&mut self, total_bytes: u64);

	fn advance(&mut self, bytes: u64);

	fn finish(&mut self) {}

	fn abandon(&mut self) {}
}

/// Sink that ignores every update.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
	fn start(&mut self, _total_bytes: u64) {}

	fn advance(&mut self, _bytes: u64) {}
}

/// Sink that records what it was told, mostly useful in tests.
#[derive(Debug, Default, Clone)]
pub struct CountingProgress {
	pub total: Option<u64>,
	pub advances: Vec<u64>,
	pub finished: bool,
	pub abandoned: bool,
}

impl CountingProgress {
	pub fn processed(&self) -> u64 {
		self.advances.iter().sum()
	}
}

impl ProgressSink for CountingProgress {
	fn start(&mut self, total_bytes: u64) {
		self.total = Some(total_bytes);
	}

	fn advance(&mut self, bytes: u64) {
		self.advances.push(bytes);
	}

	fn finish(&mut self) {
		self.finished = true;
	}

	fn abandon(&mut self) {
		self.abandoned = true;
	}
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ProgressMode {
	#[default]
	Auto,
	Enabled,
	Disabled,
}

impl FromStr for ProgressMode {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.to_ascii_lowercase().as_str() {
			"auto" => Ok(Self::Auto),
			"always" | "on" => Ok(Self::Enabled),
			"never" | "off" => Ok(Self::Disabled),
			other => Err(format!("unsupported progress mode `{}`", other)),
		}
	}
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ProgressConfig {
	pub mode: ProgressMode,
}

impl ProgressConfig {
	pub fn should_emit(&self, is_tty: bool) -> bool {
		match self.mode {
			ProgressMode::Disabled => false,
			ProgressMode::Enabled => true,
			ProgressMode::Auto => is_tty,
		}
	}
}

const BAR_TEMPLATE: &str = "{msg} {wide_bar} {binary_bytes}/{binary_total_bytes} [{elapsed}<{eta}, {binary_bytes_per_sec}]";

/// Byte progress bar drawn on stderr.
pub struct BarProgress {
	bar: ProgressBar,
	description: String,
}

impl BarProgress {
	pub fn new(description: impl Into<String>) -> Self {
		Self::with_target(description, ProgressDrawTarget::stderr_with_hz(10))
	}

	pub fn with_target(
		description: impl Into<String>,
		target: ProgressDrawTarget,
	) -> Self {
		let bar = ProgressBar::with_draw_target(Some(0), target);
		if let Ok(style) = ProgressStyle::with_template(BAR_TEMPLATE) {
			bar.set_style(style);
		}
		Self {
			bar,
			description: description.into(),
		}
	}

	pub fn position(&self) -> u64 {
		self.bar.position()
	}
}

impl ProgressSink for BarProgress {
	fn start(&mut self, total_bytes: u64) {
		self.bar.set_length(total_bytes);
		self.bar.set_message(self.description.clone());
		self.bar.reset_elapsed();
	}

	fn advance(&mut self, bytes: u64) {
		self.bar.inc(bytes);
	}

	fn finish(&mut self) {
		self.bar.finish();
	}

	fn abandon(&mut self) {
		self.bar.finish_and_clear();
	}
}

/// Builds the sink a CLI run should use.
pub fn progress_sink(
	config: ProgressConfig,
	description: impl Into<String>,
) -> Box<dyn ProgressSink> {
	if config.should_emit(io::stderr().is_terminal()) {
		Box::new(BarProgress::new(description))
	} else {
		Box::new(NoProgress)
	}
}
