// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rusthasher
// Module: output
// Purpose: Render a digest result as a coloured table, plain lines or JSON.

use crate::hsh::engine::DigestResult;
use crate::hsh::error::HashError;
use crate::hsh::source::{InputKind, InputSource};
use clap::ValueEnum;
use colored::{Color, Colorize};
use serde::Serialize;
use std::fmt;

/// Width the input column is shortened to.
pub const DEFAULT_LABEL_WIDTH: usize = 50;

const TABLE_TITLE: &str = "[Hasher Result]";

/// Shortens `text` to at most `max` characters by keeping equally sized
/// head and tail parts around `...`.
pub fn shorten_middle(text: &str, max: usize) -> String {
	let len = text.chars().count();
	if len <= max {
		return text.to_string();
	}
	let part = max.saturating_sub(3) / 2;
	let head: String = text.chars().take(part).collect();
	let tail: String = text.chars().skip(len - part).collect();
	format!("{}...{}", head, tail)
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum OutputFormat {
	#[default]
	Table,
	Plain,
	Json,
}

impl fmt::Display for OutputFormat {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			Self::Table => "table",
			Self::Plain => "plain",
			Self::Json => "json",
		})
	}
}

/// One line of the result table.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct ResultRow {
	pub algorithm: String,
	pub kind: InputKind,
	pub input: String,
	pub digest: String,
}

pub fn rows_for(
	result: &DigestResult,
	source: &InputSource,
) -> Vec<ResultRow> {
	let input = source.label();
	result
		.iter()
		.map(|(alg, digest)| ResultRow {
			algorithm: alg.to_string(),
			kind: source.kind(),
			input: input.clone(),
			digest: digest.to_string(),
		})
		.collect()
}

#[derive(Serialize)]
struct JsonDocument<'a> {
	kind: Option<InputKind>,
	input: Option<&'a str>,
	bytes: u64,
	digests: Vec<JsonDigest<'a>>,
}

#[derive(Serialize)]
struct JsonDigest<'a> {
	algorithm: &'a str,
	digest: &'a str,
}

pub fn render(
	rows: &[ResultRow],
	format: OutputFormat,
	bytes: u64,
) -> Result<String, HashError> {
	match format {
		OutputFormat::Table => Ok(render_table(rows, DEFAULT_LABEL_WIDTH)),
		OutputFormat::Plain => Ok(render_plain(rows)),
		OutputFormat::Json => render_json(rows, bytes),
	}
}

fn render_plain(rows: &[ResultRow]) -> String {
	rows.iter()
		.map(|row| {
			format!("{}  {}  {}", row.digest, row.algorithm, row.input)
		})
		.collect::<Vec<_>>()
		.join("\n")
}

fn render_json(rows: &[ResultRow], bytes: u64) -> Result<String, HashError> {
	let first = rows.first();
	let document = JsonDocument {
		kind: first.map(|row| row.kind),
		input: first.map(|row| row.input.as_str()),
		bytes,
		digests: rows
			.iter()
			.map(|row| JsonDigest {
				algorithm: row.algorithm.as_str(),
				digest: row.digest.as_str(),
			})
			.collect(),
	};
	Ok(serde_json::to_string_pretty(&document)?)
}

struct Column {
	header: &'static str,
	color: Color,
}

const COLUMNS: [Column; 4] = [
	Column {
		header: "Hash Algorithm",
		color: Color::Yellow,
	},
	Column {
		header: "Type",
		color: Color::Magenta,
	},
	Column {
		header: "Input",
		color: Color::Cyan,
	},
	Column {
		header: "Hash",
		color: Color::Green,
	},
];

/// Draws the bordered result table. Widths are measured on the uncoloured
/// cell text so escape sequences never skew the layout.
pub fn render_table(rows: &[ResultRow], label_width: usize) -> String {
	let cells: Vec<[String; 4]> = rows
		.iter()
		.map(|row| {
			[
				row.algorithm.clone(),
				row.kind.to_string(),
				shorten_middle(&row.input, label_width),
				row.digest.clone(),
			]
		})
		.collect();

	let mut widths = COLUMNS.map(|col| col.header.chars().count());
	for row in &cells {
		for (width, cell) in widths.iter_mut().zip(row.iter()) {
			*width = (*width).max(cell.chars().count());
		}
	}

	let border = {
		let segments: Vec<String> =
			widths.iter().map(|w| "-".repeat(w + 2)).collect();
		format!("+{}+", segments.join("+"))
	};

	let mut lines = Vec::with_capacity(cells.len() + 5);
	let table_width = border.chars().count();
	let title_pad = table_width.saturating_sub(TABLE_TITLE.len()) / 2;
	lines.push(format!(
		"{}{}",
		" ".repeat(title_pad),
		TABLE_TITLE.italic()
	));
	lines.push(border.clone());
	let header: Vec<String> = COLUMNS
		.iter()
		.zip(widths.iter())
		.map(|(col, width)| {
			format!(" {} ", pad(col.header, *width).bold())
		})
		.collect();
	lines.push(format!("|{}|", header.join("|")));
	lines.push(border.clone());
	for row in &cells {
		let rendered: Vec<String> = row
			.iter()
			.zip(COLUMNS.iter())
			.zip(widths.iter())
			.map(|((cell, col), width)| {
				format!(" {} ", pad(cell, *width).color(col.color))
			})
			.collect();
		lines.push(format!("|{}|", rendered.join("|")));
	}
	lines.push(border);
	lines.join("\n")
}

fn pad(text: &str, width: usize) -> String {
	let len = text.chars().count();
	format!("{}{}", text, " ".repeat(width.saturating_sub(len)))
}
