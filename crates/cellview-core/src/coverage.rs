//! Coverage area: the union of active sector polygons.
//!
//! The union exists only for the duration of one render pass; it drives the
//! grid extent and the viewport fit and is rebuilt from scratch every time.

use geo::algorithm::bounding_rect::BoundingRect;
use geo::{BooleanOps, LineString, MultiPolygon, Polygon};

use crate::models::{BoundingBox, GeoPoint};

/// Convert a sector ring to a `geo` polygon (the constructor closes the ring)
pub fn ring_to_polygon(ring: &[GeoPoint]) -> Polygon<f64> {
    let coords: Vec<geo::Coord<f64>> = ring.iter().map(|&p| p.into()).collect();
    Polygon::new(LineString::new(coords), vec![])
}

/// Union the given sector rings into one coverage area.
///
/// Returns `None` when no rings are given. Degenerate rings (zero range or
/// zero aperture) are fed to the union as-is; they contribute no area and
/// simply vanish from the result, keeping the scene renderable.
pub fn union_sectors(rings: &[Vec<GeoPoint>]) -> Option<MultiPolygon<f64>> {
    let mut polygons = rings.iter().map(|ring| ring_to_polygon(ring));
    let first = polygons.next()?;
    let mut coverage = MultiPolygon::new(vec![first]);
    for polygon in polygons {
        coverage = coverage.union(&MultiPolygon::new(vec![polygon]));
    }
    Some(coverage)
}

/// Bounding box of a coverage area, `None` for an empty one
pub fn coverage_bounds(coverage: &MultiPolygon<f64>) -> Option<BoundingBox> {
    coverage.bounding_rect().map(BoundingBox::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sector::{generate_sector, DEFAULT_APERTURE_DEG};
    use geo::algorithm::area::Area;

    const APEX: GeoPoint = GeoPoint { lat: 39.2369, lon: -8.6807 };

    #[test]
    fn test_empty_input_has_no_coverage() {
        assert!(union_sectors(&[]).is_none());
    }

    #[test]
    fn test_single_sector_coverage() {
        let ring = generate_sector(APEX, 40.0, 3.0, DEFAULT_APERTURE_DEG);
        let coverage = union_sectors(&[ring]).unwrap();

        assert!(coverage.unsigned_area() > 0.0);
        let bounds = coverage_bounds(&coverage).unwrap();
        assert!(bounds.min_lat < bounds.max_lat);
        assert!(bounds.min_lon < bounds.max_lon);
        // The apex is a ring vertex, so it sits on the boundary of the box.
        assert!(bounds.min_lat <= APEX.lat && APEX.lat <= bounds.max_lat);
        assert!(bounds.min_lon <= APEX.lon && APEX.lon <= bounds.max_lon);
    }

    #[test]
    fn test_union_covers_each_sector() {
        let a = generate_sector(APEX, 40.0, 3.0, DEFAULT_APERTURE_DEG);
        let b = generate_sector(APEX, 160.0, 3.0, DEFAULT_APERTURE_DEG);

        let area_a = ring_to_polygon(&a).unsigned_area();
        let area_b = ring_to_polygon(&b).unsigned_area();
        let union = union_sectors(&[a, b]).unwrap();

        let union_area = union.unsigned_area();
        assert!(union_area >= area_a - 1e-9);
        assert!(union_area >= area_b - 1e-9);
        // Adjacent wedges from one apex barely overlap, so the union is close
        // to the sum of the parts.
        assert!(union_area <= area_a + area_b + 1e-9);
    }

    #[test]
    fn test_disjoint_sectors_area_adds_up() {
        let east = GeoPoint::new(APEX.lat, APEX.lon + 1.0);
        let a = generate_sector(APEX, 40.0, 2.0, DEFAULT_APERTURE_DEG);
        let b = generate_sector(east, 40.0, 2.0, DEFAULT_APERTURE_DEG);

        let separate = ring_to_polygon(&a).unsigned_area() + ring_to_polygon(&b).unsigned_area();
        let union = union_sectors(&[a, b]).unwrap();

        assert!((union.unsigned_area() - separate).abs() < 1e-8);
        let bounds = coverage_bounds(&union).unwrap();
        assert!(bounds.max_lon > APEX.lon + 0.9);
    }
}
