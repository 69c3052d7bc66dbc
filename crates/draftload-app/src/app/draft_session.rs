//! Draft Session - live editing state for one draft load
//!
//! The raw text and the parsed fields update synchronously on every edit. The
//! fields used for metric display only settle after the debounce delay.

use std::time::Duration;

use tokio::sync::watch;
use tracing::debug;

use draftload_domain::model::DraftFields;
use draftload_domain::service::{parse_draft, DraftSummary};

use crate::debounce::Debouncer;

pub struct DraftSession {
    text: String,
    fields: DraftFields,
    debouncer: Debouncer<DraftFields>,
}

impl DraftSession {
    /// Create an empty session. The receiver yields debounced fields.
    pub fn new(delay: Duration) -> (Self, watch::Receiver<DraftFields>) {
        let (debouncer, receiver) = Debouncer::new(delay, DraftFields::default());
        let session = Self {
            text: String::new(),
            fields: DraftFields::default(),
            debouncer,
        };
        (session, receiver)
    }

    /// Replace the whole draft text
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.recompute();
    }

    /// Append one line, as typed into the text area
    pub fn push_line(&mut self, line: &str) {
        if !self.text.is_empty() {
            self.text.push('\n');
        }
        self.text.push_str(line);
        self.recompute();
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Fields parsed from the current text (not debounced)
    pub fn fields(&self) -> &DraftFields {
        &self.fields
    }

    /// Summary of the current text (not debounced)
    pub fn summary(&self) -> DraftSummary {
        DraftSummary::from_fields(&self.fields)
    }

    pub fn has_pending_update(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// Push the current fields to subscribers immediately
    pub fn flush(&mut self) {
        self.debouncer.publish_now(self.fields.clone());
    }

    pub fn subscribe(&self) -> watch::Receiver<DraftFields> {
        self.debouncer.subscribe()
    }

    fn recompute(&mut self) {
        self.fields = parse_draft(&self.text);
        debug!(fields = ?self.fields, "draft reparsed");
        self.debouncer.schedule(self.fields.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::{sleep, timeout};

    const DELAY: Duration = Duration::from_millis(200);

    #[tokio::test(start_paused = true)]
    async fn test_fields_update_immediately() {
        let (mut session, rx) = DraftSession::new(DELAY);
        session.set_text("Alice\nTrucking Co");
        assert_eq!(session.fields().driver_name, "Alice");
        assert_eq!(session.fields().carrier_name, "Trucking Co");
        assert!(session.has_pending_update());
        // debounced value has not moved yet
        assert!(rx.borrow().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_burst_of_edits_settles_once() {
        let (mut session, mut rx) = DraftSession::new(DELAY);
        for line in ["Alice", "Trucking Co", "500", "650", "50", "300"] {
            session.push_line(line);
            sleep(Duration::from_millis(50)).await;
        }
        assert_eq!(session.text(), "Alice\nTrucking Co\n500\n650\n50\n300");

        rx.changed().await.unwrap();
        let settled = rx.borrow_and_update().clone();
        assert_eq!(&settled, session.fields());
        assert_eq!(settled.loaded_miles, "300");

        assert!(timeout(Duration::from_secs(1), rx.changed()).await.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_flush_publishes_current_fields() {
        let (mut session, mut rx) = DraftSession::new(DELAY);
        session.set_text("Bob\nHaulers\n$1,000\n$1,250");
        session.flush();
        assert!(!session.has_pending_update());

        let settled = rx.borrow_and_update().clone();
        assert_eq!(settled.broker_rate, "$1,250");
        assert_eq!(session.summary().margin.percentage, "20.0%");
    }

    #[tokio::test(start_paused = true)]
    async fn test_set_text_recomputes_from_scratch() {
        let (mut session, _rx) = DraftSession::new(DELAY);
        session.set_text("Alice\nTrucking Co\n500");
        session.set_text("Carol");
        assert_eq!(session.fields().driver_name, "Carol");
        assert_eq!(session.fields().carrier_name, "");
        assert_eq!(session.fields().driver_rate, "");
    }
}
