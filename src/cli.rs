//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use chrono::{NaiveDate, NaiveDateTime};
use clap::{Parser, Subcommand};

/// Query the IETF Datatracker and the RFC index.
///
/// Records are printed to stdout as one JSON object per line; logs go to
/// stderr.
#[derive(Parser, Debug)]
#[command(name = "ietfdata")]
#[command(author, version, about)]
pub struct Args {
    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Directory for the response cache (caching is off when unset)
    #[arg(long, value_name = "DIR", global = true)]
    pub cache_dir: Option<PathBuf>,

    /// Datatracker origin to query
    #[arg(long, value_name = "URL", global = true)]
    pub base_url: Option<String>,

    /// Config file to read instead of the default location
    #[arg(long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Fetch a person by numeric id
    Person { id: u64 },

    /// Fetch the person who owns an email address
    PersonByEmail {
        #[arg(value_name = "ADDRESS")]
        address: String,
    },

    /// Fetch a document by name, e.g. draft-ietf-quic-transport
    Document { name: String },

    /// Fetch the document that was published as an RFC, e.g. rfc9000
    Rfc { name: String },

    /// Fetch a group by acronym, e.g. quic
    Group { acronym: String },

    /// List people, optionally filtered
    People {
        /// Only people modified at or after this time (YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS)
        #[arg(long, value_parser = parse_datetime)]
        since: Option<NaiveDateTime>,

        /// Only people modified before this time
        #[arg(long, value_parser = parse_datetime)]
        until: Option<NaiveDateTime>,

        /// Only people whose name contains this text
        #[arg(long)]
        name_contains: Option<String>,

        /// Stop after this many records
        #[arg(long, value_name = "N")]
        limit: Option<usize>,
    },

    /// List meetings, optionally within a date window
    Meetings {
        /// First day of the window (YYYY-MM-DD)
        #[arg(long, value_parser = parse_date)]
        start: Option<NaiveDate>,

        /// Last day of the window (YYYY-MM-DD)
        #[arg(long, value_parser = parse_date)]
        end: Option<NaiveDate>,

        /// Stop after this many records
        #[arg(long, value_name = "N")]
        limit: Option<usize>,
    },

    /// Fetch the RFC index, printing either one entry or a summary
    RfcIndex {
        /// Location of rfc-index.xml
        #[arg(long, value_name = "URL")]
        url: Option<String>,

        /// Print only this entry, e.g. RFC9000 or BCP0014
        #[arg(long, value_name = "DOC-ID")]
        entry: Option<String>,
    },
}

fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|e| format!("'{value}' is not a YYYY-MM-DD date: {e}"))
}

fn parse_datetime(value: &str) -> Result<NaiveDateTime, String> {
    if let Ok(datetime) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S") {
        return Ok(datetime);
    }
    parse_date(value).map(|date| date.and_time(chrono::NaiveTime::MIN))
}
