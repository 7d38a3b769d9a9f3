// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rusthasher
// File: main.rs
// Author: Volker Schwaberow <volker@schwaberow.de>
// Copyright (c) 2022 Volker Schwaberow

use colored::Colorize;
use rusthasher::hsh::app;

fn main() {
	if let Err(e) = app::run() {
		eprintln!("{}", format!("Error: {}", e).red());
		std::process::exit(1);
	}
}
