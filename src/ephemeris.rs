//! Position-provider seam between the analysis pipelines and an ephemeris
//! backend (e.g. a SPICE kernel pool). The crate never loads kernels itself;
//! callers inject an implementation of [`PositionProvider`].

use hifitime::Epoch;
use nalgebra::Vector3;

use crate::constants::Kilometer;
use crate::helioplot_errors::HelioplotError;

/// Reference frame shared by all positions unless a provider overrides it.
pub const DEFAULT_FRAME: &str = "ECLIPJ2000";

/// Origin body positions are expressed relative to unless overridden.
pub const DEFAULT_ORIGIN: &str = "SUN";

/// Resolves a body identifier and an epoch to a 3D position vector.
///
/// All positions returned by one provider share a single reference frame and
/// origin, so differences between them are geometrically meaningful. The
/// provider must be fully initialized (kernels loaded, tables parsed) before
/// the first lookup.
///
/// Implementations surface an unresolvable body/epoch as
/// [`HelioplotError::PositionLookupFailed`]; the samplers never retry.
pub trait PositionProvider {
    /// Name of the reference frame the returned positions are expressed in.
    fn frame(&self) -> &str {
        DEFAULT_FRAME
    }

    /// Name of the origin body the returned positions are relative to.
    fn origin(&self) -> &str {
        DEFAULT_ORIGIN
    }

    /// Position of `body` at `epoch`, in kilometers.
    fn position(&self, body: &str, epoch: Epoch) -> Result<Vector3<Kilometer>, HelioplotError>;
}

/// Normalize a target name for heliocentric queries.
///
/// Short ephemeris kernels carry planet *barycenters* rather than planet
/// centers, so heliocentric lookups for a major planet are redirected to the
/// barycenter target. Names already pointing at a barycenter, and
/// non-planetary targets (moons, asteroids), pass through unchanged.
pub fn normalize_heliocentric_target_name(name: &str) -> String {
    let upper = name.to_ascii_uppercase();
    if upper.contains("BARYCENTER") {
        return name.to_string();
    }
    match upper.as_str() {
        "MERCURY" | "VENUS" | "EARTH" | "MARS" | "JUPITER" | "SATURN" | "URANUS" | "NEPTUNE"
        | "PLUTO" => format!("{upper} BARYCENTER"),
        _ => name.to_string(),
    }
}
