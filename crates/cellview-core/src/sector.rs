//! Sector coverage wedge generation.
//!
//! A sector is the stylized pie-slice a directional antenna covers: an arc of
//! boundary samples swept across the aperture, closed back to the apex. The
//! displacement math is an equirectangular approximation (111 km per degree
//! of latitude, longitude degrees shortened by cos(latitude)). It is not
//! geodesically exact; the ranges here are a few kilometers.

use crate::models::{GeoPoint, SectorSpec};

/// Number of boundary samples along the arc
pub const ARC_SAMPLES: usize = 30;

/// Default angular width of a sector wedge in degrees
pub const DEFAULT_APERTURE_DEG: f64 = 120.0;

/// Kilometers per degree of latitude
const KM_PER_DEG: f64 = 111.0;

/// Generate the boundary ring of a sector wedge.
///
/// Returns `ARC_SAMPLES` points in increasing-angle order across
/// `[bearing - aperture/2, bearing + aperture/2]` (both ends inclusive),
/// followed by the apex itself as the closing vertex. The ring is implicitly
/// closed from the apex back to the first arc point.
///
/// Inputs are not validated: a zero aperture collapses the arc onto a single
/// ray and a zero range collapses every sample onto the apex; both produce
/// degenerate but well-formed rings. Angles sampled past 360 degrees need no
/// wraparound handling since the span is a linear interval.
pub fn generate_sector(
    apex: GeoPoint,
    bearing_deg: f64,
    range_km: f64,
    aperture_deg: f64,
) -> Vec<GeoPoint> {
    let start = bearing_deg - aperture_deg / 2.0;
    let end = bearing_deg + aperture_deg / 2.0;
    // Longitude scaling uses the apex latitude only: every sample originates
    // from the same apex.
    let lon_scale = KM_PER_DEG * apex.lat.to_radians().cos();

    let mut ring = Vec::with_capacity(ARC_SAMPLES + 1);
    for i in 0..ARC_SAMPLES {
        let t = i as f64 / (ARC_SAMPLES - 1) as f64;
        let angle = (start + (end - start) * t).to_radians();
        let dlat = (range_km / KM_PER_DEG) * angle.cos();
        let dlon = (range_km / lon_scale) * angle.sin();
        ring.push(GeoPoint::new(apex.lat + dlat, apex.lon + dlon));
    }
    ring.push(apex);
    ring
}

impl SectorSpec {
    /// Boundary ring for this sector
    pub fn ring(&self) -> Vec<GeoPoint> {
        generate_sector(self.apex, self.bearing_deg, self.range_km, self.aperture_deg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const APEX: GeoPoint = GeoPoint { lat: 39.2369, lon: -8.6807 };

    #[test]
    fn test_ring_has_arc_samples_plus_apex() {
        let ring = generate_sector(APEX, 40.0, 3.0, DEFAULT_APERTURE_DEG);
        assert_eq!(ring.len(), ARC_SAMPLES + 1);
        assert_eq!(*ring.last().unwrap(), APEX);
    }

    #[test]
    fn test_zero_range_collapses_onto_apex() {
        let ring = generate_sector(APEX, 40.0, 0.0, DEFAULT_APERTURE_DEG);
        for p in &ring {
            assert!((p.lat - APEX.lat).abs() < 1e-12);
            assert!((p.lon - APEX.lon).abs() < 1e-12);
        }
    }

    #[test]
    fn test_arc_endpoints_symmetric_around_bearing() {
        // With the wedge pointing due north the first and last arc points sit
        // at -60 and +60 degrees: same latitude, mirrored longitude offsets.
        let ring = generate_sector(APEX, 0.0, 3.0, DEFAULT_APERTURE_DEG);
        let first = ring[0];
        let last = ring[ARC_SAMPLES - 1];
        assert!((first.lat - last.lat).abs() < 1e-9);
        assert!(((first.lon - APEX.lon) + (last.lon - APEX.lon)).abs() < 1e-9);
    }

    #[test]
    fn test_arc_points_ordered_by_angle() {
        // For an eastward wedge the sweep runs from north-of-east to
        // south-of-east, so sampled latitudes strictly decrease.
        let ring = generate_sector(APEX, 90.0, 3.0, DEFAULT_APERTURE_DEG);
        for pair in ring[..ARC_SAMPLES].windows(2) {
            assert!(pair[0].lat > pair[1].lat);
        }
    }

    #[test]
    fn test_zero_aperture_degenerates_to_ray() {
        let ring = generate_sector(APEX, 40.0, 3.0, 0.0);
        assert_eq!(ring.len(), ARC_SAMPLES + 1);
        let first = ring[0];
        for p in &ring[..ARC_SAMPLES] {
            assert_eq!(*p, first);
        }
    }

    #[test]
    fn test_bearing_wrap_past_360_is_linear() {
        // A wedge pointing just east of north samples angles beyond 360; the
        // result must match the same wedge described with a negative start.
        let wrapped = generate_sector(APEX, 350.0, 3.0, DEFAULT_APERTURE_DEG);
        let equivalent = generate_sector(APEX, -10.0, 3.0, DEFAULT_APERTURE_DEG);
        for (a, b) in wrapped.iter().zip(equivalent.iter()) {
            assert!((a.lat - b.lat).abs() < 1e-9);
            assert!((a.lon - b.lon).abs() < 1e-9);
        }
    }

    #[test]
    fn test_spec_ring_matches_free_function() {
        let spec = SectorSpec::new(APEX, 40.0, 3.0);
        assert_eq!(spec.ring(), generate_sector(APEX, 40.0, 3.0, DEFAULT_APERTURE_DEG));
    }

    #[test]
    fn test_range_scales_displacement() {
        let near = generate_sector(APEX, 40.0, 1.0, DEFAULT_APERTURE_DEG);
        let far = generate_sector(APEX, 40.0, 10.0, DEFAULT_APERTURE_DEG);
        let d_near = (near[0].lat - APEX.lat).hypot(near[0].lon - APEX.lon);
        let d_far = (far[0].lat - APEX.lat).hypot(far[0].lon - APEX.lon);
        assert!((d_far / d_near - 10.0).abs() < 1e-9);
    }
}
