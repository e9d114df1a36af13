use common::types::config::matching::{
    ProximityConfig, ProximityMode, DEFAULT_PROXIMITY_THRESHOLD_DEGREES,
};
use common::types::Coordinate;
use geo::{Line, Point};

/// Whether `point` lies within 0.001° of any vertex of `polyline`.
///
/// Distances are measured in plain degree space, so the threshold covers less ground east-west
/// the further away from the equator the point is.
pub fn is_on_route(point: Coordinate, polyline: &[Coordinate]) -> bool {
    ProximityChecker::default().is_on_route(point, polyline)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProximityChecker {
    mode: ProximityMode,
    threshold_degrees: f64,
}

impl Default for ProximityChecker {
    fn default() -> Self {
        Self::new(ProximityMode::Vertex, DEFAULT_PROXIMITY_THRESHOLD_DEGREES)
    }
}

impl From<&ProximityConfig> for ProximityChecker {
    fn from(config: &ProximityConfig) -> Self {
        Self::new(config.mode, config.threshold_degrees)
    }
}

impl ProximityChecker {
    pub fn new(mode: ProximityMode, threshold_degrees: f64) -> Self {
        Self { mode, threshold_degrees }
    }

    pub fn is_on_route(&self, point: Coordinate, polyline: &[Coordinate]) -> bool {
        let point = Point::from(point);

        match (self.mode, polyline) {
            (_, []) => false,
            (ProximityMode::Vertex, _) | (ProximityMode::Segment, [_]) => polyline
                .iter()
                .any(|vertex| self.within(distance_to_point(point, Point::from(*vertex)))),
            (ProximityMode::Segment, _) => polyline.windows(2).any(|pair| {
                let line = Line::new(Point::from(pair[0]), Point::from(pair[1]));
                self.within(distance_to_line(point, &line))
            }),
        }
    }

    fn within(&self, distance: f64) -> bool {
        distance <= self.threshold_degrees
    }
}

#[allow(deprecated)]
fn distance_to_point(point: Point, other: Point) -> f64 {
    use geo::EuclideanDistance;
    point.euclidean_distance(&other)
}

#[allow(deprecated)]
fn distance_to_line(point: Point, line: &Line) -> f64 {
    use geo::EuclideanDistance;
    point.euclidean_distance(line)
}
