// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rusthasher

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

const ABC_SHA256: &str =
	"ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad";

fn hasher() -> Command {
	let mut cmd = cargo_bin_cmd!("hasher");
	cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
	cmd
}

#[test]
fn text_input_renders_table_with_all_algorithms() {
	hasher()
		.args(["--text", "abc", "--progress", "never"])
		.assert()
		.success()
		.stdout(predicate::str::contains("[Hasher Result]"))
		.stdout(predicate::str::contains("Hash Algorithm"))
		.stdout(predicate::str::contains("900150983cd24fb0d6963f7d28e17f72"))
		.stdout(predicate::str::contains("a9993e364706816aba3e25717850c26c9cd0d89d"))
		.stdout(predicate::str::contains(ABC_SHA256))
		.stdout(predicate::str::contains("text"));
}

#[test]
fn positional_existing_path_is_hashed_as_file() {
	let mut file = tempfile::NamedTempFile::new().unwrap();
	file.write_all(b"abc").unwrap();
	let path = file.path().to_str().unwrap().to_string();
	let assert = hasher()
		.args([path.as_str(), "-a", "sha256", "--format", "plain"])
		.assert()
		.success();
	let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
	assert_eq!(stdout.trim_end(), format!("{ABC_SHA256}  sha256  {path}"));
}

#[test]
fn positional_non_path_is_hashed_as_text() {
	hasher()
		.args(["abc", "-a", "sha256", "--format", "plain"])
		.assert()
		.success()
		.stdout(predicate::str::diff(format!("{ABC_SHA256}  sha256  abc\n")));
}

#[test]
fn json_output_lists_requested_algorithms_in_order() {
	let assert = hasher()
		.args(["-t", "abc", "-a", "sha512,md5", "--format", "json"])
		.assert()
		.success();
	let value: serde_json::Value =
		serde_json::from_slice(&assert.get_output().stdout).unwrap();
	assert_eq!(value["kind"], "text");
	assert_eq!(value["digests"][0]["algorithm"], "sha512");
	assert_eq!(value["digests"][1]["algorithm"], "md5");
	assert_eq!(value["digests"].as_array().map(Vec::len), Some(2));
}

#[test]
fn missing_input_fails() {
	hasher()
		.assert()
		.failure()
		.stderr(predicate::str::contains("Error: provide --file or --text"));
}

#[test]
fn file_and_text_together_fail() {
	hasher()
		.args(["--file", "/does/not/exist", "--text", "abc"])
		.assert()
		.failure()
		.stderr(predicate::str::contains("choose only one of --file or --text"));
}

#[test]
fn unsupported_algorithm_fails_with_name() {
	hasher()
		.args(["-t", "abc", "-a", "sha256,bogus,md5"])
		.assert()
		.failure()
		.stdout(predicate::str::is_empty())
		.stderr(predicate::str::contains("Unsupported hash_algorithm: bogus"));
}

#[test]
fn missing_file_fails() {
	let dir = tempfile::tempdir().unwrap();
	let missing = dir.path().join("missing.bin");
	hasher()
		.arg("--file")
		.arg(&missing)
		.assert()
		.failure()
		.stderr(predicate::str::contains("Not found file_path"));
}

#[test]
fn completions_register_the_binary_name() {
	let assert = hasher()
		.args(["--completions", "bash"])
		.assert()
		.success();
	let stdout =
		String::from_utf8(assert.get_output().stdout.clone()).unwrap();
	let registration = stdout
		.lines()
		.find(|line| line.starts_with("complete "))
		.expect("bash script registers a completion function");
	assert!(
		registration.starts_with("complete -F _hasher "),
		"unexpected registration `{registration}`"
	);
	assert!(registration.ends_with(" hasher"));
	assert!(!stdout.contains("rusthasher"));
}

#[test]
fn empty_text_hashes_to_empty_digest() {
	hasher()
		.args(["--text", "", "-a", "md5", "--format", "plain"])
		.assert()
		.success()
		.stdout(predicate::str::starts_with(
			"d41d8cd98f00b204e9800998ecf8427e  md5",
		));
}

#[test]
fn tiny_file_with_huge_chunk_size_succeeds() {
	let mut file = tempfile::NamedTempFile::new().unwrap();
	file.write_all(b"abc").unwrap();
	hasher()
		.arg("--file")
		.arg(file.path())
		.args(["-c", "1048576", "-a", "sha256", "--format", "plain"])
		.assert()
		.success()
		.stdout(predicate::str::starts_with(ABC_SHA256));
}
