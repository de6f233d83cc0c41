//! Command-line argument parsing for the editor
//!
//! Supports:
//! - Running an edit script against a file
//! - One-shot case conversion
//! - Literal find/replace over a file
//! - Showing or writing the effective config

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::case::CaseStyle;

/// A plain-text editing core driven from the terminal
#[derive(Parser, Debug)]
#[command(name = "textpad", version, about = "A plain-text editing core")]
pub struct CliArgs {
    /// Use this config file instead of ~/.config/textpad/config.yaml
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Apply an edit script to a file and print the result
    Run(RunArgs),
    /// Convert text to a case style
    Case(CaseArgs),
    /// Replace every occurrence of a term in a file
    Replace(ReplaceArgs),
    /// Print the effective config as YAML
    Config(ConfigArgs),
}

#[derive(Args, Debug)]
pub struct RunArgs {
    /// File to edit
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Script with one editor command per line
    #[arg(short, long, value_name = "SCRIPT")]
    pub script: PathBuf,

    /// Write the result here instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Print the final render state as JSON
    #[arg(long)]
    pub json: bool,

    /// Word list for case conversion (overrides the config)
    #[arg(short, long, value_name = "PATH")]
    pub dictionary: Option<PathBuf>,

    /// Use the system clipboard instead of an in-memory one
    #[arg(long)]
    pub system_clipboard: bool,
}

#[derive(Args, Debug)]
pub struct CaseArgs {
    /// Target style (snake, camel, pascal, upper, lower, title, sentence)
    #[arg(value_name = "STYLE", value_parser = parse_style)]
    pub style: CaseStyle,

    /// Text to convert; multiple words are joined with spaces
    #[arg(value_name = "TEXT", required = true)]
    pub text: Vec<String>,

    /// Word list for case conversion (overrides the config)
    #[arg(short, long, value_name = "PATH")]
    pub dictionary: Option<PathBuf>,
}

impl CaseArgs {
    pub fn joined_text(&self) -> String {
        self.text.join(" ")
    }
}

#[derive(Args, Debug)]
pub struct ReplaceArgs {
    /// File to search
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Literal term to find
    #[arg(short, long, value_name = "TERM")]
    pub find: String,

    /// Replacement text
    #[arg(short = 'w', long = "with", value_name = "TEXT")]
    pub replacement: String,

    /// Rewrite the file instead of printing the result
    #[arg(short, long)]
    pub in_place: bool,

    /// Match without regard to case
    #[arg(long)]
    pub ignore_case: bool,
}

#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Write the effective config to the config file
    #[arg(long)]
    pub init: bool,
}

fn parse_style(s: &str) -> Result<CaseStyle, String> {
    s.parse().map_err(|e: crate::case::CaseError| e.to_string())
}
