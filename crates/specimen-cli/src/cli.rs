//! CLI argument definitions for the specimen tracker.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "specimen-tracker",
    version,
    about = "Filter specimen collections and edit encoded specimen fields",
    long_about = "Filter specimen collections and edit encoded specimen fields.\n\n\
                  Collections are JSON arrays of specimen records. The `type` and\n\
                  `location` fields of sample data use the store's delimited encodings."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the records of a collection that match every given criterion.
    Filter(FilterArgs),

    /// Split an encoded type into its levels.
    DecodeType {
        /// Encoded type, e.g. `blood-dna-library`.
        #[arg(value_name = "ENCODED")]
        encoded: String,
    },

    /// Join up to three type levels. `none` or an empty value skips a level.
    EncodeType {
        #[arg(value_name = "LEVEL", num_args = 1.., required = true)]
        levels: Vec<String>,
    },

    /// Split an encoded location into its five slots.
    DecodeLocation {
        /// Encoded location, e.g. `fridge_1-shelf_2-rack_3-box_4-spot_A7`.
        #[arg(value_name = "ENCODED")]
        encoded: String,

        /// Print the slots as JSON.
        #[arg(long = "json")]
        json: bool,
    },

    /// Build an encoded location from its parts.
    ///
    /// An empty value leaves the slot empty; `none` for either axis leaves
    /// the spot empty.
    EncodeLocation {
        #[arg(value_name = "FRIDGE")]
        fridge: String,
        #[arg(value_name = "SHELF")]
        shelf: String,
        #[arg(value_name = "RACK")]
        rack: String,
        #[arg(value_name = "BOX")]
        box_: String,
        #[arg(value_name = "AXIS1")]
        axis1: String,
        #[arg(value_name = "AXIS2")]
        axis2: String,
    },

    /// Check every record of a collection against the store's vocabularies.
    Validate {
        /// Path to the JSON collection.
        #[arg(value_name = "RECORDS")]
        records: PathBuf,
    },
}

#[derive(Args)]
pub struct FilterArgs {
    /// Path to the JSON collection (`null` for a collection not yet loaded).
    #[arg(value_name = "RECORDS")]
    pub records: PathBuf,

    /// TOML file with base criteria; flags below replace or extend it.
    #[arg(long = "criteria", value_name = "PATH")]
    pub criteria: Option<PathBuf>,

    /// Exact family name.
    #[arg(long = "family")]
    pub family: Option<String>,

    /// Exact bar code.
    #[arg(long = "bar-code")]
    pub bar_code: Option<String>,

    /// Accepted state (repeatable).
    #[arg(long = "state", value_name = "STATE")]
    pub states: Vec<String>,

    /// Accepted first type level (repeatable).
    #[arg(long = "type1", value_name = "VALUE")]
    pub type_level1: Vec<String>,

    /// Accepted second type level (repeatable).
    #[arg(long = "type2", value_name = "VALUE")]
    pub type_level2: Vec<String>,

    /// Accepted third type level (repeatable).
    #[arg(long = "type3", value_name = "VALUE")]
    pub type_level3: Vec<String>,

    /// List matches ordered by family instead of collection order.
    #[arg(long = "by-family")]
    pub by_family: bool,

    /// Print matches as JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
