//! Sequenced fact fetching
//!
//! Overlapping requests would otherwise race: whichever settled last would
//! overwrite the screen, even when a newer request had already answered.
//! [`FactFetcher`] stamps every request with a monotonically increasing
//! sequence number; only the outcome of the newest ticket may be applied.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::date::DateQuery;
use crate::error::FactResult;
use crate::outcome::RequestOutcome;
use crate::provider::FactProvider;

/// Handle for one issued request; stale tickets settle into nothing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    seq: u64,
}

impl FetchTicket {
    /// Sequence number of this request, for log correlation.
    pub fn seq(&self) -> u64 {
        self.seq
    }
}

/// Issues sequenced fact requests against a [`FactProvider`]
pub struct FactFetcher {
    provider: Arc<dyn FactProvider>,
    seq: AtomicU64,
}

impl FactFetcher {
    pub fn new(provider: Arc<dyn FactProvider>) -> Self {
        Self {
            provider,
            seq: AtomicU64::new(0),
        }
    }

    /// Start a new request, superseding all earlier tickets.
    pub fn begin(&self) -> FetchTicket {
        let seq = self.seq.fetch_add(1, Ordering::SeqCst) + 1;
        FetchTicket { seq }
    }

    /// Supersede all outstanding tickets without starting a request.
    ///
    /// Used when the form turns invalid while a request is in flight, so
    /// the eventual response cannot overwrite the validation message.
    pub fn invalidate(&self) {
        self.seq.fetch_add(1, Ordering::SeqCst);
    }

    /// Whether the ticket is still the newest one issued.
    pub fn is_current(&self, ticket: &FetchTicket) -> bool {
        self.seq.load(Ordering::SeqCst) == ticket.seq
    }

    /// Fetch the fact for `query` and settle the ticket.
    ///
    /// Returns `None` when a newer ticket was issued while this request
    /// was in flight; the caller must leave its state untouched in that
    /// case. Otherwise the outcome is ready to display: the fact text on
    /// success, the fixed fetch message on failure.
    pub async fn run(&self, ticket: &FetchTicket, query: &DateQuery) -> Option<RequestOutcome> {
        let result = self.provider.date_fact(query).await;
        self.settle(ticket, result)
    }

    /// Turn a settled provider result into a displayable outcome, or
    /// discard it when the ticket has been superseded.
    pub fn settle(&self, ticket: &FetchTicket, result: FactResult<String>) -> Option<RequestOutcome> {
        if !self.is_current(ticket) {
            tracing::debug!(seq = ticket.seq, "discarding stale fact response");
            return None;
        }
        Some(match result {
            Ok(text) => RequestOutcome::fact(text),
            Err(err) => {
                tracing::warn!(seq = ticket.seq, error = %err, "fact request failed");
                RequestOutcome::error(err.user_message())
            }
        })
    }
}
