//! Turns raw event batches into display lines.

use crate::config;
use crate::event::{Event, FormatError, RawEvent};

/// Formats at most [`config::DISPLAY_LIMIT`] events, one result per event.
/// A failed event yields its error in place so callers can report it
/// without losing the rest of the batch.
pub fn format_events(events: &[RawEvent]) -> Vec<Result<String, FormatError>> {
    events
        .iter()
        .take(config::DISPLAY_LIMIT)
        .map(format_event)
        .collect()
}

fn format_event(raw: &RawEvent) -> Result<String, FormatError> {
    Ok(Event::try_from(raw)?.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::RawRepo;

    fn watch_event(repo: &str) -> RawEvent {
        RawEvent {
            event_type: Some("WatchEvent".to_string()),
            repo: Some(RawRepo {
                name: Some(repo.to_string()),
            }),
            created_at: Some("2024-01-02T03:04:05Z".to_string()),
            payload: None,
        }
    }

    #[test]
    fn formats_each_event_in_order() {
        let events = [watch_event("a/b"), watch_event("c/d")];

        let lines = format_events(&events);

        assert_eq!(
            lines,
            vec![
                Ok("- [2024-01-02 03:04:05] Starred a/b".to_string()),
                Ok("- [2024-01-02 03:04:05] Starred c/d".to_string()),
            ]
        );
    }

    #[test]
    fn stops_at_the_display_limit() {
        let events: Vec<_> = (0..config::DISPLAY_LIMIT + 5)
            .map(|index| watch_event(&format!("repo/{index}")))
            .collect();

        let lines = format_events(&events);

        assert_eq!(lines.len(), config::DISPLAY_LIMIT);
        assert_eq!(
            lines.last(),
            Some(&Ok(format!(
                "- [2024-01-02 03:04:05] Starred repo/{}",
                config::DISPLAY_LIMIT - 1
            )))
        );
    }

    #[test]
    fn a_bad_event_reports_its_error_without_dropping_the_rest() {
        let events = [watch_event("a/b"), RawEvent::default(), watch_event("c/d")];

        let lines = format_events(&events);

        assert_eq!(lines.len(), 3);
        assert!(lines[0].is_ok());
        assert_eq!(lines[1], Err(FormatError::MissingField("type")));
        assert!(lines[2].is_ok());
    }

    #[test]
    fn an_empty_batch_formats_to_nothing() {
        assert!(format_events(&[]).is_empty());
    }
}
