use std::collections::HashMap;

use helioplot::constants::SECONDS_PER_DAY;
use helioplot::ephemeris::PositionProvider;
use helioplot::HelioplotError;
use hifitime::{Epoch, TimeScale};
use nalgebra::Vector3;

/// Circular coplanar heliocentric orbit, phase measured from +x at the
/// provider's reference epoch.
pub struct CircularOrbit {
    pub radius_km: f64,
    pub period_days: f64,
    pub phase_rad: f64,
}

/// Synthetic ephemeris: bodies on circular coplanar orbits around a common
/// origin, positions analytic in time.
pub struct CircularOrbitProvider {
    epoch0: Epoch,
    bodies: HashMap<String, CircularOrbit>,
}

impl CircularOrbitProvider {
    pub fn new(epoch0: Epoch) -> Self {
        CircularOrbitProvider {
            epoch0,
            bodies: HashMap::new(),
        }
    }

    pub fn with_body(mut self, name: &str, orbit: CircularOrbit) -> Self {
        self.bodies.insert(name.to_string(), orbit);
        self
    }
}

impl PositionProvider for CircularOrbitProvider {
    fn position(&self, body: &str, epoch: Epoch) -> Result<Vector3<f64>, HelioplotError> {
        let orbit =
            self.bodies
                .get(body)
                .ok_or_else(|| HelioplotError::PositionLookupFailed {
                    body: body.to_string(),
                    epoch,
                })?;

        let days = (epoch - self.epoch0).to_seconds() / SECONDS_PER_DAY;
        let angle = orbit.phase_rad + std::f64::consts::TAU * days / orbit.period_days;
        Ok(Vector3::new(
            orbit.radius_km * angle.cos(),
            orbit.radius_km * angle.sin(),
            0.0,
        ))
    }
}

pub fn utc(year: i32, month: u8, day: u8) -> Epoch {
    Epoch::from_gregorian(year, month, day, 0, 0, 0, 0, TimeScale::UTC)
}
