use crate::system::LinearSystem;
use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

/// Grid density used by the phase portrait unless the caller overrides it.
pub const DEFAULT_RESOLUTION: usize = 20;

/// Velocity samples of the system over a rectangular window of the phase
/// plane. All four grids are flattened row-major: the sample at grid row
/// `j` (along y) and column `i` (along x) lives at index `j * resolution + i`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VectorField {
    pub resolution: usize,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub u: Vec<f64>,
    pub v: Vec<f64>,
}

impl VectorField {
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

/// `samples` evenly spaced values covering [start, end], both endpoints
/// included. A single-sample request or a degenerate range collapses to a
/// constant sequence.
pub fn linspace(start: f64, end: f64, samples: usize) -> Vec<f64> {
    if samples == 0 {
        return Vec::new();
    }
    if samples == 1 {
        return vec![start];
    }
    let step = (end - start) / (samples - 1) as f64;
    (0..samples).map(|i| start + step * i as f64).collect()
}

/// Samples the instantaneous velocity (ẋ, ẏ) = (y, a1·x + a2·y) on a
/// uniform `resolution`×`resolution` grid spanning `x_range` × `y_range`.
///
/// Pure and deterministic; recomputed from scratch on every coefficient
/// change, nothing is cached.
pub fn vector_field(
    system: &LinearSystem,
    x_range: (f64, f64),
    y_range: (f64, f64),
    resolution: usize,
) -> Result<VectorField> {
    if resolution == 0 {
        bail!("Field resolution must be at least 1.");
    }
    if !x_range.0.is_finite() || !x_range.1.is_finite() {
        bail!("x_range must be finite.");
    }
    if !y_range.0.is_finite() || !y_range.1.is_finite() {
        bail!("y_range must be finite.");
    }

    let xs = linspace(x_range.0, x_range.1, resolution);
    let ys = linspace(y_range.0, y_range.1, resolution);

    let count = resolution * resolution;
    let mut x = Vec::with_capacity(count);
    let mut y = Vec::with_capacity(count);
    let mut u = Vec::with_capacity(count);
    let mut v = Vec::with_capacity(count);

    for &yv in &ys {
        for &xv in &xs {
            x.push(xv);
            y.push(yv);
            u.push(yv);
            v.push(system.a1 * xv + system.a2 * yv);
        }
    }

    Ok(VectorField {
        resolution,
        x,
        y,
        u,
        v,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linspace_includes_both_endpoints() {
        let values = linspace(-2.0, 2.0, 5);
        assert_eq!(values, vec![-2.0, -1.0, 0.0, 1.0, 2.0]);
    }

    #[test]
    fn linspace_degenerate_range_is_constant() {
        let values = linspace(1.5, 1.5, 4);
        assert_eq!(values, vec![1.5; 4]);
        assert_eq!(linspace(3.0, -1.0, 1), vec![3.0]);
        assert!(linspace(0.0, 1.0, 0).is_empty());
    }

    #[test]
    fn u_equals_y_for_any_coefficients() {
        for &(a1, a2) in &[(0.0, 0.0), (-1.0, -0.5), (3.0, 2.0), (5.0, -5.0)] {
            let system = LinearSystem::new(a1, a2);
            let field = vector_field(&system, (-3.0, 3.0), (-3.0, 3.0), 20).expect("field");
            assert_eq!(field.len(), 400);
            for i in 0..field.len() {
                assert_eq!(field.u[i], field.y[i]);
            }
        }
    }

    #[test]
    fn v_is_linear_combination_of_coordinates() {
        let system = LinearSystem::new(2.0, -1.0);
        let field = vector_field(&system, (-1.0, 1.0), (-1.0, 1.0), 3).expect("field");
        for i in 0..field.len() {
            let expected = 2.0 * field.x[i] - field.y[i];
            assert!((field.v[i] - expected).abs() < 1e-15);
        }
    }

    #[test]
    fn grid_is_row_major_over_y_then_x() {
        let system = LinearSystem::new(0.0, 0.0);
        let field = vector_field(&system, (0.0, 1.0), (10.0, 11.0), 2).expect("field");
        assert_eq!(field.x, vec![0.0, 1.0, 0.0, 1.0]);
        assert_eq!(field.y, vec![10.0, 10.0, 11.0, 11.0]);
    }

    #[test]
    fn zero_resolution_is_rejected() {
        let system = LinearSystem::new(0.0, 0.0);
        let err = vector_field(&system, (0.0, 1.0), (0.0, 1.0), 0).expect_err("zero resolution");
        assert!(format!("{err}").contains("resolution"));
    }
}
