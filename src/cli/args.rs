//! CLI argument definitions using clap

use clap::{ArgAction, Parser, Subcommand};

/// Demonstration CLI with three commands: greet, add, repeat
#[derive(Parser, Debug)]
#[command(name = "trifle")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase logging verbosity (use -vv for debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Greet someone
    Greet {
        /// Name to greet
        name: String,
        /// Uppercase the greeting
        #[arg(long)]
        upper: bool,
    },

    /// Add two integers
    Add {
        /// First integer
        #[arg(allow_negative_numbers = true)]
        a: i64,
        /// Second integer
        #[arg(allow_negative_numbers = true)]
        b: i64,
    },

    /// Repeat text
    Repeat {
        /// Text to repeat
        text: String,
        /// How many times to repeat (default: 2)
        #[arg(short = 'n', long, default_value_t = 2, allow_negative_numbers = true)]
        count: i64,
        /// Separator between repeats (default: space)
        #[arg(long, default_value = " ")]
        sep: String,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
