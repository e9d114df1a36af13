use crate::route::Route;
use common::types::{Trip, TripId};
use serde::Serialize;
use std::fmt::{Display, Formatter};

/// A trip the customer could join, with the detour it takes to get on and off it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Candidate {
    pub trip: Trip,
    /// customer origin -> trip start
    pub pickup: Route,
    /// trip end -> customer destination
    pub dropoff: Route,
    /// minutes
    pub total_time: f64,
    /// kilometres
    pub total_distance: f64,
    /// Both customer points lie on their legs
    pub on_route: bool,
}

/// Display friendly view of a [`Candidate`], numbers rounded to one decimal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandidateSummary {
    pub trip_id: TripId,
    pub trip_name: String,
    pub departure: String,
    pub pickup_minutes: f64,
    pub pickup_km: f64,
    pub dropoff_minutes: f64,
    pub dropoff_km: f64,
    pub total_minutes: f64,
    pub total_km: f64,
    pub pickup_instructions: usize,
    pub dropoff_instructions: usize,
}

impl From<&Candidate> for CandidateSummary {
    fn from(candidate: &Candidate) -> Self {
        Self {
            trip_id: candidate.trip.id.clone(),
            trip_name: candidate.trip.name.clone(),
            departure: candidate.trip.departure.format("%H:%M").to_string(),
            pickup_minutes: round1(candidate.pickup.duration_minutes),
            pickup_km: round1(candidate.pickup.distance_km),
            dropoff_minutes: round1(candidate.dropoff.duration_minutes),
            dropoff_km: round1(candidate.dropoff.distance_km),
            total_minutes: round1(candidate.total_time),
            total_km: round1(candidate.total_distance),
            pickup_instructions: candidate.pickup.instructions.len(),
            dropoff_instructions: candidate.dropoff.instructions.len(),
        }
    }
}

impl Display for CandidateSummary {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}): +{:.1} min, {:.1} km",
            self.trip_name, self.departure, self.total_minutes, self.total_km
        )
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
