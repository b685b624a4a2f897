//! Request and response bodies for the JSON API.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_GRID_SOFTENING, DEFAULT_HALF_EXTENT, DEFAULT_POINT_SOFTENING, DEFAULT_RESOLUTION,
};
use crate::fields::Charge;
use crate::math::{R2, Scalar};

fn default_resolution() -> usize {
    DEFAULT_RESOLUTION
}

fn default_grid_softening() -> Scalar {
    DEFAULT_GRID_SOFTENING
}

fn default_point_softening() -> Scalar {
    DEFAULT_POINT_SOFTENING
}

/// Axis-aligned bounding box of a grid request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// Left edge.
    pub xmin: Scalar,
    /// Right edge.
    pub xmax: Scalar,
    /// Bottom edge.
    pub ymin: Scalar,
    /// Top edge.
    pub ymax: Scalar,
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            xmin: -DEFAULT_HALF_EXTENT,
            xmax: DEFAULT_HALF_EXTENT,
            ymin: -DEFAULT_HALF_EXTENT,
            ymax: DEFAULT_HALF_EXTENT,
        }
    }
}

/// Planar `{x, y}` pair used for query points and field vectors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal component.
    pub x: Scalar,
    /// Vertical component.
    pub y: Scalar,
}

impl From<Point> for R2 {
    fn from(p: Point) -> Self {
        R2::new(p.x, p.y)
    }
}

impl From<R2> for Point {
    fn from(v: R2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

/// Body of `POST /api/calculate`.
#[derive(Debug, Clone, Deserialize)]
pub struct GridRequest {
    /// Charges to superpose; an empty list is rejected.
    #[serde(default)]
    pub charges: Vec<Charge>,
    /// Sampling box, defaults to [-2, 2] x [-2, 2].
    #[serde(default)]
    pub bounds: Bounds,
    /// Samples per axis, applied to both X and Y.
    #[serde(default = "default_resolution")]
    pub resolution: usize,
    /// Softening length, defaults to 1e-3.
    #[serde(default = "default_grid_softening")]
    pub softening: Scalar,
}

/// Body of `POST /api/calculate_point`.
#[derive(Debug, Clone, Deserialize)]
pub struct PointRequest {
    /// Charges to superpose; an empty list is rejected.
    #[serde(default)]
    pub charges: Vec<Charge>,
    /// Query point, defaults to the origin.
    #[serde(default)]
    pub point: Point,
    /// Softening length, defaults to 1e-6.
    #[serde(default = "default_point_softening")]
    pub softening: Scalar,
}

/// Mesh-shaped grid result; every array is `resolution` rows of `resolution` values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridResponse {
    /// X coordinate mesh.
    #[serde(rename = "X")]
    pub x: Vec<Vec<Scalar>>,
    /// Y coordinate mesh.
    #[serde(rename = "Y")]
    pub y: Vec<Vec<Scalar>>,
    /// X component of E per node.
    #[serde(rename = "Ex")]
    pub ex: Vec<Vec<Scalar>>,
    /// Y component of E per node.
    #[serde(rename = "Ey")]
    pub ey: Vec<Vec<Scalar>>,
    /// Potential per node.
    #[serde(rename = "V")]
    pub v: Vec<Vec<Scalar>>,
    /// Charges the grid was evaluated for.
    pub charges: Vec<Charge>,
}

/// Single-point result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointResponse {
    /// Query point as received.
    pub point: Point,
    /// Field vector at the point.
    #[serde(rename = "E")]
    pub e: Point,
    /// Euclidean norm of `e`.
    #[serde(rename = "E_magnitude")]
    pub e_magnitude: Scalar,
    /// Potential at the point.
    #[serde(rename = "V")]
    pub v: Scalar,
    /// Charges the point was evaluated for.
    pub charges: Vec<Charge>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_request_fills_defaults() {
        let req: GridRequest =
            serde_json::from_str(r#"{"charges": [{"q": 1, "x": 0, "y": 0}]}"#).unwrap();
        assert_eq!(req.charges.len(), 1);
        assert_eq!(req.bounds, Bounds::default());
        assert_eq!(req.resolution, 50);
        assert_eq!(req.softening, 1.0e-3);
    }

    #[test]
    fn point_request_fills_defaults() {
        let req: PointRequest = serde_json::from_str("{}").unwrap();
        assert!(req.charges.is_empty());
        assert_eq!(req.point, Point::default());
        assert_eq!(req.softening, 1.0e-6);
    }

    #[test]
    fn charge_missing_a_field_is_rejected() {
        let err = serde_json::from_str::<GridRequest>(r#"{"charges": [{"q": 1, "x": 0}]}"#);
        assert!(err.is_err());
    }

    #[test]
    fn partial_bounds_are_rejected() {
        let err = serde_json::from_str::<GridRequest>(
            r#"{"charges": [], "bounds": {"xmin": -1, "xmax": 1}}"#,
        );
        assert!(err.is_err());
    }

    #[test]
    fn point_response_uses_wire_names() {
        let resp = PointResponse {
            point: Point { x: 1.0, y: 0.0 },
            e: Point { x: 2.0, y: 0.0 },
            e_magnitude: 2.0,
            v: f64::INFINITY,
            charges: vec![],
        };
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["E"]["x"], 2.0);
        assert_eq!(json["E_magnitude"], 2.0);
        assert!(json["V"].is_null());
    }
}
