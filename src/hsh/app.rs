// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rusthasher
// File: app.rs
// Author: Volker Schwaberow <volker@schwaberow.de>
// Copyright (c) 2022 Volker Schwaberow

use crate::hsh::algorithm::{parse_algorithm_list, AlgorithmId};
use crate::hsh::chunk::{chunk_size_from_mb, DEFAULT_CHUNK_SIZE_MB};
use crate::hsh::engine::{join_ids, DigestEngine};
use crate::hsh::error::HashError;
use crate::hsh::output::{
	render, rows_for, shorten_middle, OutputFormat, DEFAULT_LABEL_WIDTH,
};
use crate::hsh::progress::{progress_sink, ProgressConfig, ProgressMode};
use crate::hsh::source::InputSource;
use clap::{crate_name, Arg, ArgAction, ArgMatches};
use clap_complete::{generate, Generator, Shell};
use std::error::Error;

const BIN_NAME: &str = "hasher";

const HELP_TEMPLATE: &str = "{before-help}{name} {version}
Written by {author-with-newline}{about-with-newline}
Compute hashes for files or text (--file or --text)
  hasher -a sha256 --text 'abc'
  hasher ./image.iso
{usage-heading} {usage}

{all-args}{after-help}
";

/// Everything one invocation needs, resolved from the command line.
#[derive(Clone, Debug)]
pub struct HashOptions {
	pub source: InputSource,
	pub algorithms: Vec<AlgorithmId>,
	pub chunk_size_mb: u64,
	pub format: OutputFormat,
	pub progress: ProgressConfig,
}

impl HashOptions {
	/// Validates the parsed arguments. Input resolution comes first so that
	/// `--file` together with `--text` fails before anything else is checked.
	pub fn from_matches(matches: &ArgMatches) -> Result<Self, HashError> {
		let source = InputSource::resolve(
			matches.get_one::<String>("input").map(String::as_str),
			matches.get_one::<String>("file").map(String::as_str),
			matches.get_one::<String>("text").map(String::as_str),
		)?;
		let algorithms = match matches.get_one::<String>("hash-algorithm") {
			Some(list) => parse_algorithm_list(list)?,
			None => AlgorithmId::DEFAULT.to_vec(),
		};
		let chunk_size_mb = matches
			.get_one::<u64>("chunk-size")
			.copied()
			.unwrap_or(DEFAULT_CHUNK_SIZE_MB);
		let format = matches
			.get_one::<OutputFormat>("format")
			.copied()
			.unwrap_or_default();
		let mode = matches
			.get_one::<ProgressMode>("progress")
			.copied()
			.unwrap_or_default();
		Ok(Self {
			source,
			algorithms,
			chunk_size_mb,
			format,
			progress: ProgressConfig { mode },
		})
	}

	fn description(&self) -> String {
		format!(
			"[Hasher Algorithms ({})] {}",
			join_ids(&self.algorithms),
			shorten_middle(&self.source.label(), DEFAULT_LABEL_WIDTH)
		)
	}
}

pub fn build_cli() -> clap::Command {
	clap::Command::new(crate_name!())
		.help_template(HELP_TEMPLATE)
		.bin_name(BIN_NAME)
		.version(clap::crate_version!())
		.author(clap::crate_authors!())
		.about("Compute MD5, SHA-1, SHA-256 and SHA-512 digests in one pass")
		.arg(
			Arg::new("input")
				.help("Input file or text to hash")
				.value_name("INPUT"),
		)
		.arg(
			Arg::new("file")
				.short('f')
				.long("file")
				.value_name("PATH")
				.help("File to hash"),
		)
		.arg(
			Arg::new("text")
				.short('t')
				.long("text")
				.value_name("TEXT")
				.allow_hyphen_values(true)
				.help("Text to hash"),
		)
		.arg(
			Arg::new("hash-algorithm")
				.short('a')
				.long("hash-algorithm")
				.value_name("LIST")
				.help("Comma separated hash algorithms (default: md5, sha1, sha256, sha512)"),
		)
		.arg(
			Arg::new("chunk-size")
				.short('c')
				.long("chunk-size")
				.value_name("MB")
				.value_parser(clap::value_parser!(u64).range(1..))
				.default_value("8")
				.help("Chunk size in MB"),
		)
		.arg(
			Arg::new("format")
				.long("format")
				.value_parser(clap::value_parser!(OutputFormat))
				.default_value("table")
				.help("Result format (table, plain, json)"),
		)
		.arg(
			Arg::new("progress")
				.long("progress")
				.value_parser(|s: &str| s.parse::<ProgressMode>())
				.default_value("auto")
				.help("Progress bar on stderr (auto, always, never)"),
		)
		.arg(
			Arg::new("verbose")
				.short('v')
				.long("verbose")
				.action(ArgAction::Count)
				.help("Increase log verbosity (repeatable)"),
		)
		.arg(
			Arg::new("completions")
				.long("completions")
				.value_name("SHELL")
				.value_parser(clap::value_parser!(Shell))
				.exclusive(true)
				.help("Print a shell completion script and exit"),
		)
}

fn init_logging(verbosity: u8) {
	let level = match verbosity {
		0 => "warn",
		1 => "info",
		2 => "debug",
		_ => "trace",
	};
	let _ = env_logger::Builder::from_env(
		env_logger::Env::default().default_filter_or(level),
	)
	.format_timestamp(None)
	.try_init();
}

/// Runs one hashing invocation and returns the rendered result.
pub fn execute(options: &HashOptions) -> Result<String, HashError> {
	let engine = DigestEngine::new(
		&options.algorithms,
		chunk_size_from_mb(options.chunk_size_mb)?,
	)?;
	let mut sink = progress_sink(options.progress, options.description());
	let result = engine.hash_source(&options.source, sink.as_mut())?;
	log::info!(
		"hashed {} bytes with {} algorithm(s)",
		result.bytes_processed(),
		result.len()
	);
	let rows = rows_for(&result, &options.source);
	render(&rows, options.format, result.bytes_processed())
}

pub fn run() -> Result<(), Box<dyn Error>> {
	let matches = build_cli().get_matches();
	init_logging(matches.get_count("verbose"));

	if let Some(shell) = matches.get_one::<Shell>("completions").copied() {
		print_completions(shell, &mut build_cli());
		return Ok(());
	}

	let options = HashOptions::from_matches(&matches)
		.inspect_err(log_failure)?;
	log::debug!("resolved options: {:?}", options);
	let rendered = execute(&options).inspect_err(log_failure)?;
	if options.format == OutputFormat::Table {
		println!();
	}
	println!("{}", rendered);
	Ok(())
}

fn log_failure(err: &HashError) {
	if err.is_configuration() {
		log::debug!("rejected before reading any input: {}", err);
	} else {
		log::debug!("aborted while hashing: {}", err);
	}
}

fn print_completions<G: Generator>(gen: G, cmd: &mut clap::Command) {
	generate(gen, cmd, BIN_NAME, &mut std::io::stdout());
}

#[cfg(test)]
mod tests {
	use super::*;

	fn options(args: &[&str]) -> Result<HashOptions, HashError> {
		let matches = build_cli()
			.try_get_matches_from(
				std::iter::once("hasher").chain(args.iter().copied()),
			)
			.unwrap();
		HashOptions::from_matches(&matches)
	}

	#[test]
	fn cli_definition_is_consistent() {
		build_cli().debug_assert();
	}

	#[test]
	fn defaults_apply() {
		let opts = options(&["--text", "abc"]).unwrap();
		assert_eq!(opts.source, InputSource::Text("abc".into()));
		assert_eq!(opts.algorithms, AlgorithmId::DEFAULT.to_vec());
		assert_eq!(opts.chunk_size_mb, 8);
		assert_eq!(opts.format, OutputFormat::Table);
		assert_eq!(opts.progress.mode, ProgressMode::Auto);
	}

	#[test]
	fn both_inputs_fail_before_algorithm_validation() {
		let err =
			options(&["-f", "x", "-t", "y", "-a", "bogus"]).unwrap_err();
		assert!(matches!(err, HashError::AmbiguousInput));
	}

	#[test]
	fn algorithm_list_is_parsed() {
		let opts =
			options(&["-t", "abc", "-a", "sha512,md5", "-c", "2"]).unwrap();
		assert_eq!(
			opts.algorithms,
			vec![AlgorithmId::Sha512, AlgorithmId::Md5]
		);
		assert_eq!(opts.chunk_size_mb, 2);
	}

	#[test]
	fn zero_chunk_size_is_a_usage_error() {
		assert!(build_cli()
			.try_get_matches_from(["hasher", "-t", "abc", "-c", "0"])
			.is_err());
	}

	#[test]
	fn execute_renders_plain_output() {
		let mut opts =
			options(&["-t", "abc", "-a", "sha256", "--format", "plain"])
				.unwrap();
		opts.progress.mode = ProgressMode::Disabled;
		let out = execute(&opts).unwrap();
		assert_eq!(
			out,
			"ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad  sha256  abc"
		);
	}

	#[test]
	fn description_names_algorithms_and_input() {
		let opts = options(&["-t", "abc", "-a", "md5,sha1"]).unwrap();
		assert_eq!(opts.description(), "[Hasher Algorithms (md5, sha1)] abc");
	}
}
