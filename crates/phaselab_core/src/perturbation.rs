use crate::system::LinearSystem;
use crate::trajectory::integrate;
use anyhow::Result;
use serde::{Deserialize, Serialize};

/// A nominal trajectory, the trajectory restarted from an initial state
/// offset by eps in both coordinates, and their Euclidean separation at
/// every shared sample. The separation series is what the dashboard reads
/// to show whether the system forgets or amplifies an initial-condition
/// error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerturbationAnalysis {
    pub t: Vec<f64>,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub x_perturbed: Vec<f64>,
    pub y_perturbed: Vec<f64>,
    pub distance: Vec<f64>,
}

impl PerturbationAnalysis {
    pub fn len(&self) -> usize {
        self.t.len()
    }

    pub fn is_empty(&self) -> bool {
        self.t.is_empty()
    }
}

/// Integrates from (x0, y0) and from (x0 + eps, y0 + eps) on the same time
/// grid and computes distance[i] = √((x[i] − xₚ[i])² + (y[i] − yₚ[i])²).
/// At t = 0 the separation is √2·eps by construction.
pub fn perturbation(
    system: &LinearSystem,
    x0: f64,
    y0: f64,
    eps: f64,
    t_max: f64,
    dt: f64,
) -> Result<PerturbationAnalysis> {
    let nominal = integrate(system, x0, y0, t_max, dt)?;
    let shifted = integrate(system, x0 + eps, y0 + eps, t_max, dt)?;

    let distance = nominal
        .x
        .iter()
        .zip(&nominal.y)
        .zip(shifted.x.iter().zip(&shifted.y))
        .map(|((&x, &y), (&xp, &yp))| {
            let dx = x - xp;
            let dy = y - yp;
            (dx * dx + dy * dy).sqrt()
        })
        .collect();

    Ok(PerturbationAnalysis {
        t: nominal.t,
        x: nominal.x,
        y: nominal.y,
        x_perturbed: shifted.x,
        y_perturbed: shifted.y,
        distance,
    })
}
