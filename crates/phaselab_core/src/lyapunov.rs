use crate::field::linspace;
use crate::system::LinearSystem;
use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

/// Floor applied to max|V̇| when rescaling for the heatmap, so a field that
/// is identically zero (a1 = -1, a2 = 0 makes V̇ ≡ 0) maps to zeros instead
/// of NaN.
pub const VDOT_FLOOR: f64 = 1e-12;

/// The fixed quadratic Lyapunov candidate V(x, y) = x² + y² and its time
/// derivative along trajectories, sampled on the same row-major grid layout
/// as [`crate::field::VectorField`].
///
/// V is a candidate, not the solution of the Lyapunov equation for the
/// actual coefficient matrix, so the sign of V̇ is a heuristic indicator:
/// trustworthy near the identity-like damping case, only suggestive
/// elsewhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LyapunovField {
    pub resolution: usize,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub v: Vec<f64>,
    pub v_dot: Vec<f64>,
}

impl LyapunovField {
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// V̇ rescaled by max|V̇| into [-1, 1] for red/blue shading. The
    /// divisor is floored at [`VDOT_FLOOR`].
    pub fn normalized_v_dot(&self) -> Vec<f64> {
        let max_abs = self
            .v_dot
            .iter()
            .fold(0.0_f64, |acc, value| acc.max(value.abs()))
            .max(VDOT_FLOOR);
        self.v_dot.iter().map(|value| value / max_abs).collect()
    }
}

/// Samples V = x² + y² and V̇ = 2xy + 2y(a1·x + a2·y) over the window.
/// V̇ is the chain-rule derivative of V along the flow:
/// ∂V/∂x·ẋ + ∂V/∂y·ẏ with ẋ = y, ẏ = a1·x + a2·y.
pub fn lyapunov_field(
    system: &LinearSystem,
    x_range: (f64, f64),
    y_range: (f64, f64),
    resolution: usize,
) -> Result<LyapunovField> {
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
    let mut v = Vec::with_capacity(count);
    let mut v_dot = Vec::with_capacity(count);

    for &yv in &ys {
        for &xv in &xs {
            x.push(xv);
            y.push(yv);
            v.push(xv * xv + yv * yv);
            v_dot.push(2.0 * xv * yv + 2.0 * yv * (system.a1 * xv + system.a2 * yv));
        }
    }

    Ok(LyapunovField {
        resolution,
        x,
        y,
        v,
        v_dot,
    })
}
