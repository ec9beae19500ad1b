//! CLI entry point for the ietfdata tool.

use std::io::{self, Write};

use anyhow::{Context, Result, bail};
use clap::Parser;
use futures_util::TryStreamExt;
use ietfdata_core::uri::{DocumentUri, PersonUri};
use ietfdata_core::{DataTracker, MeetingFilter, PeopleFilter, RecordStream, RfcIndex};
use serde::Serialize;
use tracing::{debug, info};

mod cli;
mod config;

use cli::{Args, Command};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments first (before tracing, so --help works without logs)
    let args = Args::parse();
    let file_config = config::load(args.config.as_deref())?;

    // Priority: RUST_LOG env var > -q/-v flags > config file > default (info)
    let default_level = config::log_level(&args, &file_config);
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    debug!(?args, ?file_config, "CLI arguments parsed");

    if let Command::RfcIndex { url, entry } = &args.command {
        return rfc_index(url.as_deref(), entry.as_deref()).await;
    }

    let tracker = DataTracker::with_config(config::tracker_config(&args, &file_config))
        .context("Failed to set up Datatracker client")?;
    run(&tracker, args.command).await?;
    info!(requests = tracker.request_count(), "done");
    Ok(())
}

async fn run(tracker: &DataTracker, command: Command) -> Result<()> {
    match command {
        Command::Person { id } => {
            let uri = PersonUri::new(format!("/api/v1/person/person/{id}/"))?;
            let person = tracker.person(&uri).await?;
            print_found(person.as_ref(), || format!("person {id}"))
        }
        Command::PersonByEmail { address } => {
            let person = tracker
                .person_from_email(&address)
                .await
                .with_context(|| format!("Failed to look up '{address}'"))?;
            print_found(person.as_ref(), || format!("person with address {address}"))
        }
        Command::Document { name } => {
            let document = if name.starts_with("draft-") {
                tracker.document_from_draft(&name).await?
            } else {
                if name.contains(['/', '?', '#']) {
                    bail!("Invalid document name '{name}'");
                }
                let uri = DocumentUri::new(format!("/api/v1/doc/document/{name}/"))?;
                tracker.document(&uri).await?
            };
            print_found(document.as_ref(), || format!("document {name}"))
        }
        Command::Rfc { name } => {
            let document = tracker.document_from_rfc(&name).await?;
            print_found(document.as_ref(), || format!("document published as {name}"))
        }
        Command::Group { acronym } => {
            let group = tracker.group_from_acronym(&acronym).await?;
            print_found(group.as_ref(), || format!("group {acronym}"))
        }
        Command::People { since, until, name_contains, limit } => {
            let filter = PeopleFilter { since, until, name_contains };
            let printed = print_stream(tracker.people(&filter), limit).await?;
            info!(printed, "listed people");
            Ok(())
        }
        Command::Meetings { start, end, limit } => {
            let filter = MeetingFilter {
                start_date: start,
                end_date: end,
                ..MeetingFilter::default()
            };
            let printed = print_stream(tracker.meetings(&filter), limit).await?;
            info!(printed, "listed meetings");
            Ok(())
        }
        Command::RfcIndex { url, entry } => rfc_index(url.as_deref(), entry.as_deref()).await,
    }
}

async fn rfc_index(url: Option<&str>, entry: Option<&str>) -> Result<()> {
    let url = url.unwrap_or(ietfdata_core::rfcindex::DEFAULT_INDEX_URL);
    let index = RfcIndex::try_fetch_from(url)
        .await
        .with_context(|| format!("Failed to load RFC index from {url}"))?;

    match entry {
        Some(doc_id) => print_found(index.entry(doc_id).as_ref(), || format!("index entry {doc_id}")),
        None => print_json(&IndexSummary {
            rfc: index.rfc.len(),
            rfc_not_issued: index.rfc_not_issued.len(),
            bcp: index.bcp.len(),
            std: index.std.len(),
            fyi: index.fyi.len(),
        }),
    }
}

#[derive(Debug, Serialize)]
struct IndexSummary {
    rfc: usize,
    rfc_not_issued: usize,
    bcp: usize,
    std: usize,
    fyi: usize,
}

/// Prints `record`, or fails naming what was not found.
fn print_found<T: Serialize>(record: Option<&T>, what: impl FnOnce() -> String) -> Result<()> {
    match record {
        Some(record) => print_json(record),
        None => bail!("No {} found", what()),
    }
}

/// Prints up to `limit` records. Pages past the limit are never requested.
async fn print_stream<R: Serialize>(mut stream: RecordStream<'_, R>, limit: Option<usize>) -> Result<usize> {
    let limit = limit.unwrap_or(usize::MAX);
    let mut printed = 0;
    while printed < limit {
        let Some(record) = stream.try_next().await? else {
            break;
        };
        print_json(&record)?;
        printed += 1;
    }
    Ok(printed)
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let mut out = io::stdout().lock();
    serde_json::to_writer(&mut out, value).context("Failed to serialize record")?;
    writeln!(out).context("Failed to write to stdout")?;
    Ok(())
}
