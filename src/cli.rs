// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the verso command-line interface.
//!
//! The binary is a thin wrapper around the library's reverse operation: it
//! feeds text in and prints the result, nothing more. Input comes from the
//! positional argument or stdin; `--json` switches to the payload mode used
//! by build pipelines.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "verso",
    about = "Reverse text, character by character",
    version
)]
pub struct Cli {
    /// Text to reverse; stdin is read when omitted
    pub text: Option<String>,

    /// Read a JSON payload from stdin, write a JSON result to stdout
    #[arg(long, conflicts_with = "text")]
    pub json: bool,

    /// Reverse each input line independently instead of the whole input
    #[arg(long, conflicts_with = "json")]
    pub lines: bool,
}
