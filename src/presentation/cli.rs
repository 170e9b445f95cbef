//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--verbose, --config, --ascii) are inherited by all subcommands
//! - `browse` is the only interactive command; the others write to stdout

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::domain::value_objects::DisplayOptions;

/// DexView - browse and render the classes of a parsed dex symbol table
#[derive(Parser, Debug)]
#[command(name = "dexview")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file to use instead of the discovered ones
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Use ASCII instead of Unicode glyphs
    #[arg(long, global = true)]
    pub ascii: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Log filter for the `-v` count; `RUST_LOG` takes precedence
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Browse packages, classes and methods interactively
    Browse {
        /// Symbol source (JSON dump)
        source: PathBuf,

        /// Renderer used for the preview pane
        #[arg(short, long)]
        renderer: Option<String>,
    },

    /// Print the visible tree, fully expanded
    Tree {
        /// Symbol source (JSON dump)
        source: PathBuf,

        /// Case-insensitive search applied before printing
        #[arg(short, long)]
        filter: Option<String>,

        /// Emit a JSON outline instead of indented text
        #[arg(long)]
        json: bool,
    },

    /// Render one class, or one of its methods
    Render {
        /// Symbol source (JSON dump)
        source: PathBuf,

        /// Fully-qualified class name
        class: String,

        /// Render only this method
        #[arg(short, long)]
        method: Option<String>,

        /// Renderer to use (see `dexview renderers`)
        #[arg(short, long)]
        renderer: Option<String>,

        #[command(flatten)]
        display: DisplayArgs,
    },

    /// List registered renderers
    Renderers,
}

/// Switches that turn individual display flags off
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct DisplayArgs {
    /// Omit annotations
    #[arg(long)]
    pub no_annotations: bool,

    /// Omit the class name and declaration
    #[arg(long)]
    pub no_name: bool,

    /// Omit supertypes, source file and member classes
    #[arg(long)]
    pub no_details: bool,

    /// Omit fields
    #[arg(long)]
    pub no_fields: bool,
}

impl DisplayArgs {
    /// Clear every flag switched off on the command line
    pub fn apply(&self, options: DisplayOptions) -> DisplayOptions {
        let mut off = DisplayOptions::empty();
        off.set(DisplayOptions::ANNOTATIONS, self.no_annotations);
        off.set(DisplayOptions::NAME, self.no_name);
        off.set(DisplayOptions::DETAILS, self.no_details);
        off.set(DisplayOptions::FIELDS, self.no_fields);
        options - off
    }
}
