use routing::candidate::{Candidate, CandidateSummary};
use routing::route::Route;
use routing::session::MatchOutcome;
use serde::Serialize;

#[derive(Serialize)]
pub(crate) struct MatchResponse {
    pub(crate) origin_address: String,
    pub(crate) destination_address: String,
    pub(crate) candidates: Vec<CandidateResponse>,
}

#[derive(Serialize)]
pub(crate) struct CandidateResponse {
    #[serde(flatten)]
    pub(crate) summary: CandidateSummary,
    pub(crate) on_route: bool,
    pub(crate) pickup: Route,
    pub(crate) dropoff: Route,
}

impl From<&Candidate> for CandidateResponse {
    fn from(candidate: &Candidate) -> Self {
        Self {
            summary: CandidateSummary::from(candidate),
            on_route: candidate.on_route,
            pickup: candidate.pickup.clone(),
            dropoff: candidate.dropoff.clone(),
        }
    }
}

impl From<&MatchOutcome> for MatchResponse {
    fn from(outcome: &MatchOutcome) -> Self {
        Self {
            origin_address: outcome.origin_address.clone(),
            destination_address: outcome.destination_address.clone(),
            candidates: outcome.candidates.iter().map(CandidateResponse::from).collect(),
        }
    }
}

#[derive(Serialize)]
pub(crate) struct GeocodeResponse {
    pub(crate) address: String,
}
