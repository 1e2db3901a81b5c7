// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Kartoteka-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Kartoteka and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Kartoteka CLI entrypoint.
//!
//! Runs the interactive TUI against the built-in demo records backend.

use std::error::Error;

use kartoteka::api::DemoDirectory;
use kartoteka::nav::DEFAULT_HISTORY_DEPTH;
use kartoteka::tui;

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [--history-depth <n>]\n\n--history-depth bounds the back/forward stacks (default {DEFAULT_HISTORY_DEPTH}, minimum 1)."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    history_depth: Option<usize>,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--history-depth" => {
                if options.history_depth.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                let depth = raw.parse::<usize>().map_err(|_| ())?;
                options.history_depth = Some(depth);
            }
            "--help" | "-h" => return Err(()),
            _ => return Err(()),
        }
    }

    Ok(options)
}

fn main() -> Result<(), Box<dyn Error>> {
    let mut args = std::env::args();
    let program = args.next().unwrap_or_else(|| "kartoteka".to_owned());

    let options = match parse_options(args) {
        Ok(options) => options,
        Err(()) => {
            print_usage(&program);
            std::process::exit(2);
        }
    };

    let api = DemoDirectory::from_embedded()?;
    tui::run(api, options.history_depth.unwrap_or(DEFAULT_HISTORY_DEPTH))
}
