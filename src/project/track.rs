use crate::plan::Coordinate;

/// WGS-84 equatorial radius, meters.
pub const EARTH_RADIUS_M: f64 = 6_378_137.0;

/// Floor on cos(latitude) in the longitude conversion, so the flat-earth
/// approximation degrades instead of blowing up near the poles.
const MIN_COS_LAT: f64 = 1e-6;

/// Per-axis tolerance under which two coordinates count as the same point.
pub const COORD_EPSILON: f64 = 1e-9;

/// Whether two coordinates are within [`COORD_EPSILON`] on both axes.
pub fn almost_equal(a: Coordinate, b: Coordinate) -> bool {
    (a[0] - b[0]).abs() < COORD_EPSILON && (a[1] - b[1]).abs() < COORD_EPSILON
}

/// Wraps degrees into `[0, 360)`, mapping negative results back into range.
pub fn normalize_degrees(degrees: f64) -> f64 {
    let wrapped = degrees % 360.0;
    if wrapped < 0.0 { wrapped + 360.0 } else { wrapped }
}

/// Dead-reckoning state threaded through the step fold: current position
/// and heading (degrees, 0 = north, increasing clockwise).
///
/// Every transition is a pure method returning the next state, so each one
/// can be reasoned about and tested on its own.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Track {
    pub position: Coordinate,
    pub heading: f64,
}

impl Track {
    /// Starts a track at the given origin, facing north.
    pub fn new(origin: Coordinate) -> Self {
        Self {
            position: origin,
            heading: 0.0,
        }
    }

    /// Moves `forward_m` meters ahead and `left_m` meters to the left,
    /// relative to the current heading.
    ///
    /// The (forward, left) vector is rotated into north/east meters by the
    /// heading, then converted to a longitude/latitude delta with a
    /// flat-earth approximation around the current latitude. Valid only for
    /// displacements small relative to the Earth radius.
    #[must_use]
    pub fn advanced(self, forward_m: f64, left_m: f64) -> Self {
        let heading_rad = self.heading.to_radians();
        let north_m = forward_m * heading_rad.cos() + left_m * heading_rad.sin();
        let east_m = forward_m * heading_rad.sin() - left_m * heading_rad.cos();
        Self {
            position: offset_position(self.position, north_m, east_m),
            ..self
        }
    }

    /// Jumps straight to an absolute coordinate, leaving the heading as-is.
    #[must_use]
    pub fn moved_to(self, coordinate: Coordinate) -> Self {
        Self {
            position: coordinate,
            ..self
        }
    }

    /// Applies a heading change: absolute yaw replaces the heading, relative
    /// yaw adds to it. The result is normalized into `[0, 360)`.
    #[must_use]
    pub fn oriented(self, yaw_degrees: f64, absolute: bool) -> Self {
        let heading = if absolute {
            yaw_degrees
        } else {
            self.heading + yaw_degrees
        };
        Self {
            heading: normalize_degrees(heading),
            ..self
        }
    }
}

/// Converts north/east meter offsets into a new coordinate via the local
/// tangent plane: `Δlat = north / R`, `Δlon = east / (R·cos(lat))`.
fn offset_position(position: Coordinate, north_m: f64, east_m: f64) -> Coordinate {
    let [lon, lat] = position;
    let lat_rad = lat.to_radians();
    let d_lat = north_m / EARTH_RADIUS_M;
    let safe_cos_lat = lat_rad.cos().abs().max(MIN_COS_LAT);
    let d_lon = east_m / (EARTH_RADIUS_M * safe_cos_lat);
    [lon + d_lon.to_degrees(), lat + d_lat.to_degrees()]
}
