//! Fetches a GitHub user's recent public events and renders them as a
//! human-readable activity feed.

pub mod config;
pub mod event;
pub mod format;
pub mod github;

use crate::github::{ActivityFetcher, FetchError};
use std::io::Write;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Fetches the user's events and writes the activity feed to `out`.
///
/// Events that cannot be formatted are reported inline and skipped; only
/// fetch and write failures abort the report.
pub async fn report_activity<F: ActivityFetcher, W: Write>(
    fetcher: &F,
    username: &str,
    out: &mut W,
) -> Result<(), Error> {
    let events = fetcher.fetch_events(username).await?;
    if events.is_empty() {
        writeln!(out, "No recent activity found.")?;
        return Ok(());
    }
    for line in format::format_events(&events) {
        match line {
            Ok(line) => writeln!(out, "{line}")?,
            Err(err) => writeln!(out, "Error formatting event: {err}")?,
        }
    }
    Ok(())
}
