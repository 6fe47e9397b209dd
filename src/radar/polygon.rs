use serde::Serialize;
use std::f64::consts::TAU;

use crate::scoring::{Axis, AxisScores, AXIS_COUNT};

/// Number of vertices in a projected polygon: one per axis plus the closing vertex.
pub const VERTEX_COUNT: usize = AXIS_COUNT + 1;

/// A radar vertex in polar form.
///
/// `angle` is in radians, measured from the "up" direction and increasing
/// clockwise. `radius` is the raw 0-100 score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PolarVertex {
    pub angle: f64,
    pub radius: f64,
}

impl PolarVertex {
    /// Map to screen-style cartesian coordinates (y up).
    ///
    /// Zero angle points straight up and angles grow clockwise, so the
    /// first axis sits at `(0, r)` and the second lies to its right.
    pub fn to_cartesian(self) -> (f64, f64) {
        (
            self.radius * self.angle.sin(),
            self.radius * self.angle.cos(),
        )
    }
}

/// Angle of the vertex for axis number `index`.
pub fn axis_angle(index: usize) -> f64 {
    index as f64 / AXIS_COUNT as f64 * TAU
}

/// Project scores onto a closed polygon.
///
/// Returns [`VERTEX_COUNT`] vertices: one per axis in declared order,
/// then a copy of the first so the outline closes.
pub fn to_polar_polygon(scores: &AxisScores) -> Vec<PolarVertex> {
    let mut vertices: Vec<PolarVertex> = scores
        .iter()
        .map(|(axis, score)| PolarVertex {
            angle: axis_angle(axis.index()),
            radius: f64::from(score),
        })
        .collect();
    vertices.push(vertices[0]);
    vertices
}

/// Chart labels, in the same order as the polygon's vertices.
pub fn axis_labels() -> [&'static str; AXIS_COUNT] {
    Axis::ALL.map(Axis::name)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_polygon_is_closed() {
        let scores = AxisScores::from_values(&[10, 20, 30, 40, 50, 60, 70]).unwrap();
        let polygon = to_polar_polygon(&scores);
        assert_eq!(polygon.len(), VERTEX_COUNT);
        assert_eq!(polygon[0], polygon[7]);
    }

    #[test]
    fn test_radius_is_raw_score() {
        let scores = AxisScores::from_values(&[10, 20, 30, 40, 50, 60, 70]).unwrap();
        let radii: Vec<f64> = to_polar_polygon(&scores).iter().map(|v| v.radius).collect();
        assert_eq!(radii, vec![10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0, 10.0]);
    }

    #[test]
    fn test_angles_evenly_spaced() {
        let polygon = to_polar_polygon(&AxisScores::uniform(70).unwrap());
        assert_eq!(polygon[0].angle, 0.0);
        for pair in polygon[..AXIS_COUNT].windows(2) {
            assert!((pair[1].angle - pair[0].angle - TAU / 7.0).abs() < EPS);
        }
    }

    #[test]
    fn test_first_vertex_points_up() {
        let polygon = to_polar_polygon(&AxisScores::uniform(70).unwrap());
        assert_eq!(polygon[0], PolarVertex { angle: 0.0, radius: 70.0 });
        let (x, y) = polygon[0].to_cartesian();
        assert!(x.abs() < EPS);
        assert!((y - 70.0).abs() < EPS);
    }

    #[test]
    fn test_angles_grow_clockwise() {
        let polygon = to_polar_polygon(&AxisScores::uniform(100).unwrap());
        // Second axis is to the right of the top, the last is to the left
        let (x1, _) = polygon[1].to_cartesian();
        let (x6, _) = polygon[6].to_cartesian();
        assert!(x1 > 0.0);
        assert!(x6 < 0.0);
    }

    #[test]
    fn test_labels_match_axis_order() {
        let labels = axis_labels();
        assert_eq!(labels[0], "Perception");
        assert_eq!(labels[6], "Value Expression");
    }
}
