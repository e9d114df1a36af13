use common::types::Catalog;
use routing::candidate::CandidateSummary;
use routing::session::MatchOutcome;
use std::io::Write;

pub(super) fn write_outcome(out: &mut impl Write, outcome: &MatchOutcome) -> std::io::Result<()> {
    writeln!(out, "From: {}", outcome.origin_address)?;
    writeln!(out, "To:   {}", outcome.destination_address)?;

    if let Some(message) = outcome.empty_message() {
        writeln!(out, "{}", message)?;
        return Ok(());
    }

    for (rank, candidate) in outcome.candidates.iter().enumerate() {
        let summary = CandidateSummary::from(candidate);
        writeln!(out, "{:>2}. {}", rank + 1, summary)?;
        writeln!(
            out,
            "    pickup {:.1} min / {:.1} km, dropoff {:.1} min / {:.1} km{}",
            summary.pickup_minutes,
            summary.pickup_km,
            summary.dropoff_minutes,
            summary.dropoff_km,
            if candidate.on_route { ", on route" } else { "" },
        )?;
    }
    Ok(())
}

pub(super) fn write_trips(out: &mut impl Write, catalog: &Catalog) -> std::io::Result<()> {
    for trip in catalog.trips() {
        writeln!(
            out,
            "{} {} ({}) {} -> {}",
            trip.id,
            trip.name,
            trip.departure.format("%H:%M"),
            trip.start,
            trip.end,
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;
    use common::types::{Coordinate, Trip, TripId};
    use routing::candidate::Candidate;
    use routing::ranking::MatchRequest;
    use routing::route::Route;
    use routing::session::NO_CANDIDATES_MESSAGE;

    fn coordinate(lat: f64, lng: f64) -> Coordinate {
        Coordinate::new(lat, lng).unwrap()
    }

    fn trip() -> Trip {
        Trip {
            id: TripId("SGN-CTO".to_string()),
            name: "Saigon to Can Tho".to_string(),
            start: coordinate(10.7769, 106.7009),
            end: coordinate(10.0452, 105.7469),
            departure: NaiveTime::from_hms_opt(6, 0, 0).unwrap(),
        }
    }

    fn route(minutes: f64, km: f64) -> Route {
        Route { path: vec![], duration_minutes: minutes, distance_km: km, instructions: vec![] }
    }

    fn outcome(candidates: Vec<Candidate>) -> MatchOutcome {
        MatchOutcome {
            request: MatchRequest { origin: coordinate(10.71, 106.59), destination: coordinate(9.2, 105.2) },
            origin_address: "Nguyen Hue, Ho Chi Minh City".to_string(),
            destination_address: "unknown".to_string(),
            candidates,
        }
    }

    fn render(outcome: &MatchOutcome) -> String {
        let mut out = Vec::new();
        write_outcome(&mut out, outcome).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_outcome_lists_ranked_candidates() {
        let candidate = Candidate {
            trip: trip(),
            pickup: route(12.04, 2.0),
            dropoff: route(35.0, 30.26),
            total_time: 47.04,
            total_distance: 32.26,
            on_route: false,
        };

        let text = render(&outcome(vec![candidate]));

        assert_eq!(
            text,
            "From: Nguyen Hue, Ho Chi Minh City\n\
             To:   unknown\n \
             1. Saigon to Can Tho (06:00): +47.0 min, 32.3 km\n    \
             pickup 12.0 min / 2.0 km, dropoff 35.0 min / 30.3 km\n"
        );
    }

    #[test]
    fn test_empty_outcome_shows_message() {
        let text = render(&outcome(vec![]));
        assert!(text.ends_with(&format!("{}\n", NO_CANDIDATES_MESSAGE)));
    }

    #[test]
    fn test_trips() {
        let catalog = Catalog::from_trips(vec![trip()]).unwrap();
        let mut out = Vec::new();

        write_trips(&mut out, &catalog).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "SGN-CTO Saigon to Can Tho (06:00) 10.7769,106.7009 -> 10.0452,105.7469\n"
        );
    }
}
