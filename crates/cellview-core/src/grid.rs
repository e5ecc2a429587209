//! Reference grid generation over a covered area.
//!
//! The grid partitions a bounding box into square-ish cells of a requested
//! metric size, labeled spreadsheet-style ("A1" at the top-left, columns
//! left-to-right, rows top-to-bottom). The latitude step is the metric size
//! at 111 km per degree; the longitude step is widened by the bounding box's
//! mid-latitude so cells stay near-square away from the equator.

use tracing::debug;

use crate::models::{BoundingBox, GeoLine, GeoPoint, Grid, GridCellLabel};

/// Meters per degree of latitude
const M_PER_DEG: f64 = 111_000.0;

/// Generate grid lines, cell labels, and the bounding perimeter for an area.
///
/// Latitude samples descend from the north edge, longitude samples ascend
/// from the west edge; both exclude the stop value, so a cell exists only
/// where two bounding samples do. A degenerate box (min >= max on either
/// axis) yields empty lines and labels rather than an error; the perimeter
/// ring is emitted either way.
pub fn generate_grid(bounds: BoundingBox, cell_size_m: f64) -> Grid {
    let delta_lat = cell_size_m / M_PER_DEG;
    // Longitude degrees shrink with latitude; evaluate the step where the
    // box is vertically centered.
    let delta_lon = cell_size_m / (M_PER_DEG * bounds.mid_lat().to_radians().cos());

    let lat_samples = descending_samples(bounds.max_lat, bounds.min_lat, delta_lat);
    let lon_samples = ascending_samples(bounds.min_lon, bounds.max_lon, delta_lon);
    debug!(
        rows = lat_samples.len().saturating_sub(1),
        cols = lon_samples.len().saturating_sub(1),
        delta_lat,
        delta_lon,
        "grid sampling"
    );

    let mut lines = Vec::with_capacity(lat_samples.len() + lon_samples.len());
    for &lon in &lon_samples {
        lines.push(GeoLine::new(
            GeoPoint::new(bounds.min_lat, lon),
            GeoPoint::new(bounds.max_lat, lon),
        ));
    }
    for &lat in &lat_samples {
        lines.push(GeoLine::new(
            GeoPoint::new(lat, bounds.min_lon),
            GeoPoint::new(lat, bounds.max_lon),
        ));
    }

    let perimeter = vec![
        GeoPoint::new(bounds.min_lat, bounds.min_lon),
        GeoPoint::new(bounds.min_lat, bounds.max_lon),
        GeoPoint::new(bounds.max_lat, bounds.max_lon),
        GeoPoint::new(bounds.max_lat, bounds.min_lon),
        GeoPoint::new(bounds.min_lat, bounds.min_lon),
    ];

    // A cell needs a bounding sample on each side, so the last sample of
    // each axis starts no cell.
    let rows = lat_samples.len().saturating_sub(1);
    let cols = lon_samples.len().saturating_sub(1);
    let mut labels = Vec::with_capacity(rows * cols);
    for (row, &lat) in lat_samples[..rows].iter().enumerate() {
        for (col, &lon) in lon_samples[..cols].iter().enumerate() {
            labels.push(GridCellLabel {
                anchor: GeoPoint::new(lat - delta_lat / 2.0, lon + delta_lon / 2.0),
                text: format!("{}{}", column_label(col), row + 1),
            });
        }
    }

    Grid { lines, labels, perimeter }
}

/// Spreadsheet-style column label: 0 -> "A", 25 -> "Z", 26 -> "AA".
///
/// Bijective base-26: each digit is `index % 26`, the carry is
/// `index / 26 - 1`, repeated until the carry goes negative.
pub fn column_label(index: usize) -> String {
    let mut digits = Vec::new();
    let mut i = index as i64;
    loop {
        digits.push((b'A' + (i % 26) as u8) as char);
        i = i / 26 - 1;
        if i < 0 {
            break;
        }
    }
    digits.iter().rev().collect()
}

/// Samples from `start` down toward `stop`, excluding the stop value
fn descending_samples(start: f64, stop: f64, step: f64) -> Vec<f64> {
    let mut samples = Vec::new();
    if step <= 0.0 {
        return samples;
    }
    let mut v = start;
    while v > stop {
        samples.push(v);
        v -= step;
    }
    samples
}

/// Samples from `start` up toward `stop`, excluding the stop value
fn ascending_samples(start: f64, stop: f64, step: f64) -> Vec<f64> {
    let mut samples = Vec::new();
    if step <= 0.0 {
        return samples;
    }
    let mut v = start;
    while v < stop {
        samples.push(v);
        v += step;
    }
    samples
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_label_encoding() {
        assert_eq!(column_label(0), "A");
        assert_eq!(column_label(1), "B");
        assert_eq!(column_label(25), "Z");
        assert_eq!(column_label(26), "AA");
        assert_eq!(column_label(27), "AB");
        assert_eq!(column_label(51), "AZ");
        assert_eq!(column_label(52), "BA");
        assert_eq!(column_label(701), "ZZ");
        assert_eq!(column_label(702), "AAA");
    }

    #[test]
    fn test_single_cell_box_labels_a1() {
        // A 0.01 degree box with 1000 m cells (~0.009 degrees) fits exactly
        // one cell; its label anchors half a step in from the top-left.
        let bounds = BoundingBox::new(0.0, 0.0, 0.01, 0.01);
        let grid = generate_grid(bounds, 1000.0);

        assert_eq!(grid.labels.len(), 1);
        let label = &grid.labels[0];
        assert_eq!(label.text, "A1");
        assert!(label.anchor.lat < 0.01 && label.anchor.lat > 0.0);
        assert!(label.anchor.lon > 0.0 && label.anchor.lon < 0.01);
    }

    #[test]
    fn test_line_counts_match_samples() {
        let bounds = BoundingBox::new(39.0, -9.0, 39.05, -8.95);
        let cell_size = 1000.0;
        let grid = generate_grid(bounds, cell_size);

        let delta_lat = cell_size / M_PER_DEG;
        let delta_lon = cell_size / (M_PER_DEG * bounds.mid_lat().to_radians().cos());
        let k = descending_samples(bounds.max_lat, bounds.min_lat, delta_lat).len();
        let m = ascending_samples(bounds.min_lon, bounds.max_lon, delta_lon).len();

        assert_eq!(grid.lines.len(), k + m);
        assert_eq!(grid.labels.len(), (k - 1) * (m - 1));
        assert_eq!(grid.perimeter.len(), 5);
    }

    #[test]
    fn test_perimeter_is_closed_corner_ring() {
        let bounds = BoundingBox::new(39.0, -9.0, 40.0, -8.0);
        let grid = generate_grid(bounds, 500.0);

        let ring = &grid.perimeter;
        assert_eq!(ring[0], GeoPoint::new(39.0, -9.0));
        assert_eq!(ring[1], GeoPoint::new(39.0, -8.0));
        assert_eq!(ring[2], GeoPoint::new(40.0, -8.0));
        assert_eq!(ring[3], GeoPoint::new(40.0, -9.0));
        assert_eq!(ring[4], ring[0]);
    }

    #[test]
    fn test_degenerate_box_yields_empty_grid() {
        let bounds = BoundingBox::new(40.0, -8.0, 39.0, -9.0);
        let grid = generate_grid(bounds, 500.0);

        assert!(grid.lines.is_empty());
        assert!(grid.labels.is_empty());
        assert_eq!(grid.perimeter.len(), 5);
    }

    #[test]
    fn test_labels_read_left_to_right_top_to_bottom() {
        // Two rows by three columns: row 1 is the northern band.
        let bounds = BoundingBox::new(0.0, 0.0, 0.0185, 0.0277);
        let grid = generate_grid(bounds, 1000.0);

        let texts: Vec<&str> = grid.labels.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, vec!["A1", "B1", "C1", "A2", "B2", "C2"]);

        // Row 1 anchors sit north of row 2 anchors.
        assert!(grid.labels[0].anchor.lat > grid.labels[3].anchor.lat);
        // Column A anchors sit west of column B anchors.
        assert!(grid.labels[0].anchor.lon < grid.labels[1].anchor.lon);
    }

    #[test]
    fn test_vertical_lines_span_full_latitude() {
        let bounds = BoundingBox::new(39.0, -9.0, 39.02, -8.98);
        let grid = generate_grid(bounds, 500.0);

        let vertical: Vec<&GeoLine> =
            grid.lines.iter().filter(|l| l.start.lon == l.end.lon).collect();
        assert!(!vertical.is_empty());
        for line in vertical {
            assert_eq!(line.start.lat, bounds.min_lat);
            assert_eq!(line.end.lat, bounds.max_lat);
        }
    }
}
