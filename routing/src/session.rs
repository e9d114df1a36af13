//! State of the matching screen: the newest outcome and which submission produced it.
//!
//! A submission is announced with [`MatchingSession::begin`] before ranking starts and handed
//! back with [`MatchingSession::complete`]. Rankings may finish out of order; an outcome is only
//! stored when no newer submission has already been stored.

use crate::candidate::Candidate;
use crate::ranking::MatchRequest;
use log::debug;
use serde::Serialize;

pub const NO_CANDIDATES_MESSAGE: &str = "No trip could be matched to this request";

/// Everything a matching screen shows for one submitted request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchOutcome {
    pub request: MatchRequest,
    pub origin_address: String,
    pub destination_address: String,
    pub candidates: Vec<Candidate>,
}

impl MatchOutcome {
    pub fn best(&self) -> Option<&Candidate> {
        self.candidates.first()
    }

    /// Message to show instead of an empty result list
    pub fn empty_message(&self) -> Option<&'static str> {
        self.candidates.is_empty().then_some(NO_CANDIDATES_MESSAGE)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SubmissionTicket(u64);

#[derive(Debug, Default)]
pub struct MatchingSession {
    issued: u64,
    applied: Option<SubmissionTicket>,
    latest: Option<MatchOutcome>,
}

impl MatchingSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self) -> SubmissionTicket {
        self.issued += 1;
        SubmissionTicket(self.issued)
    }

    /// Store `outcome` unless a newer submission was stored already. Returns whether it was stored.
    pub fn complete(&mut self, ticket: SubmissionTicket, outcome: MatchOutcome) -> bool {
        if self.applied.is_some_and(|applied| applied > ticket) {
            debug!(target: "matching", "Discarding outcome of stale submission {}", ticket.0);
            return false;
        }

        self.applied = Some(ticket);
        self.latest = Some(outcome);
        true
    }

    pub fn latest(&self) -> Option<&MatchOutcome> {
        self.latest.as_ref()
    }
}
