use crate::types::errors::CatalogError;
use crate::types::Coordinate;
use chrono::NaiveTime;
use hashbrown::HashSet;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TripId(pub String);

impl Display for TripId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A scheduled long-haul trip. Customers are picked up at `start` and dropped off from `end`;
/// the trip itself never deviates from its route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trip {
    pub id: TripId,
    pub name: String,
    pub start: Coordinate,
    pub end: Coordinate,
    #[serde(with = "departure_time")]
    pub departure: NaiveTime,
}

/// The trips customers can be matched to. Order matters: ranking ties keep catalog order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    trips: Vec<Trip>,
}

// (id, name, start, end, departure hour and minute)
type TripRow = (&'static str, &'static str, (f64, f64), (f64, f64), (u32, u32));

const SAIGON: (f64, f64) = (10.7769, 106.7009);

const BUILTIN_TRIPS: [TripRow; 3] = [
    ("SGN-CTO", "Ho Chi Minh City → Can Tho", SAIGON, (10.0452, 105.7469), (6, 0)),
    ("SGN-VTU", "Ho Chi Minh City → Vung Tau", SAIGON, (10.3460, 107.0843), (7, 30)),
    ("SGN-RGA", "Ho Chi Minh City → Rach Gia", SAIGON, (10.0125, 105.0809), (21, 0)),
];

impl Catalog {
    pub fn builtin() -> Self {
        let trips = BUILTIN_TRIPS
            .iter()
            .map(|(id, name, start, end, (hour, minute))| Trip {
                id: TripId(id.to_string()),
                name: name.to_string(),
                start: Coordinate { lat: start.0, lng: start.1 },
                end: Coordinate { lat: end.0, lng: end.1 },
                departure: NaiveTime::from_hms_opt(*hour, *minute, 0)
                    .expect("built-in departure times are valid"),
            })
            .collect();

        Self { trips }
    }

    pub fn from_trips(trips: Vec<Trip>) -> Result<Self, CatalogError> {
        if trips.is_empty() {
            return Err(CatalogError::Empty);
        }

        {
            let mut seen = HashSet::with_capacity(trips.len());
            for trip in &trips {
                if !seen.insert(&trip.id) {
                    return Err(CatalogError::DuplicateTripId(trip.id.clone()));
                }
            }
        }

        Ok(Self { trips })
    }

    pub fn trips(&self) -> &[Trip] {
        &self.trips
    }

    pub fn len(&self) -> usize {
        self.trips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }
}

/// Departure times are written as "HH:MM" (seconds are accepted when reading).
mod departure_time {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%H:%M";

    pub fn serialize<S: Serializer>(time: &NaiveTime, ser: S) -> Result<S::Ok, S::Error> {
        ser.serialize_str(&time.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(de: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(de)?;
        NaiveTime::parse_from_str(&raw, FORMAT)
            .or_else(|_| NaiveTime::parse_from_str(&raw, "%H:%M:%S"))
            .map_err(|_| serde::de::Error::custom(format!("Invalid departure time '{raw}', expected HH:MM")))
    }
}
