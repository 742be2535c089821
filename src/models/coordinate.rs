use serde::{Deserialize, Serialize};
use std::fmt;
use crate::error::{Error, Result};

/// Derived points (fallback neighbours, sweep lattice) are rounded to this many decimals.
const COORDINATE_DECIMALS: i32 = 6;

pub fn round_coordinate(value: f64) -> f64 {
    let scale = 10f64.powi(COORDINATE_DECIMALS);
    (value * scale).round() / scale
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Point shifted by the given degrees, rounded to six decimals.
    pub fn offset(&self, dlat: f64, dlng: f64) -> Self {
        Self {
            lat: round_coordinate(self.lat + dlat),
            lng: round_coordinate(self.lng + dlng),
        }
    }

    pub fn rounded(&self) -> Self {
        self.offset(0.0, 0.0)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "lat={}, lng={}", self.lat, self.lng)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}

impl BoundingBox {
    pub fn new(min_lat: f64, max_lat: f64, min_lng: f64, max_lng: f64) -> Result<Self> {
        if !(min_lat < max_lat) || !(min_lng < max_lng) {
            return Err(Error::InvalidArgument(format!(
                "empty bounding box: lat [{min_lat}, {max_lat}), lng [{min_lng}, {max_lng})"
            )));
        }
        Ok(Self { min_lat, max_lat, min_lng, max_lng })
    }

    /// Lattice covering `[min_lat, max_lat) x [min_lng, max_lng)`, latitude-major.
    pub fn lattice(&self, step: f64) -> Result<Vec<Coordinate>> {
        if !(step > 0.0) || !step.is_finite() {
            return Err(Error::InvalidArgument(format!("grid step must be positive, got {step}")));
        }

        let lats = axis(self.min_lat, self.max_lat, step);
        let lngs = axis(self.min_lng, self.max_lng, step);

        Ok(lats
            .iter()
            .flat_map(|&lat| lngs.iter().map(move |&lng| Coordinate::new(lat, lng)))
            .collect())
    }
}

// Indexed rather than accumulated so float drift cannot add or drop a point.
fn axis(start: f64, stop: f64, step: f64) -> Vec<f64> {
    let count = ((stop - start) / step - 1e-9).ceil().max(0.0) as usize;
    (0..count)
        .map(|i| round_coordinate(start + i as f64 * step))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_rounds_to_six_decimals() {
        let origin = Coordinate::new(12.9716, 77.5946);
        let moved = origin.offset(0.002, -0.001);
        assert_eq!(moved, Coordinate::new(12.9736, 77.5936));
    }

    #[test]
    fn lattice_is_half_open() {
        let bbox = BoundingBox::new(10.0, 10.01, 76.0, 76.005).expect("bbox");
        let points = bbox.lattice(0.005).expect("lattice");
        assert_eq!(
            points,
            vec![Coordinate::new(10.0, 76.0), Coordinate::new(10.005, 76.0)]
        );
    }

    #[test]
    fn lattice_covers_partial_last_step() {
        let bbox = BoundingBox::new(0.0, 0.012, 0.0, 0.001).expect("bbox");
        let points = bbox.lattice(0.005).expect("lattice");
        let lats: Vec<f64> = points.iter().map(|p| p.lat).collect();
        assert_eq!(lats, vec![0.0, 0.005, 0.01]);
    }

    #[test]
    fn rejects_degenerate_input() {
        assert!(BoundingBox::new(1.0, 1.0, 0.0, 1.0).is_err());
        let bbox = BoundingBox::new(0.0, 1.0, 0.0, 1.0).expect("bbox");
        assert!(bbox.lattice(0.0).is_err());
        assert!(bbox.lattice(-0.5).is_err());
    }
}
