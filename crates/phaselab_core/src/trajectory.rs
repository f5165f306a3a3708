use crate::solvers::Euler;
use crate::system::LinearSystem;
use crate::traits::Steppable;
use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

/// A discrete-time approximation of one solution of the system, sampled on
/// the uniform grid t_i = i·dt for i = 0..=n with n = round(t_max/dt). The
/// grid includes both endpoints, so every trajectory carries n + 1 samples
/// and its last time is (numerically) t_max.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trajectory {
    pub t: Vec<f64>,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl Trajectory {
    pub fn len(&self) -> usize {
        self.t.len()
    }

    pub fn is_empty(&self) -> bool {
        self.t.is_empty()
    }

    /// Final sampled state.
    pub fn last_state(&self) -> Option<(f64, f64)> {
        match (self.x.last(), self.y.last()) {
            (Some(&x), Some(&y)) => Some((x, y)),
            _ => None,
        }
    }
}

/// Number of integration steps covering [0, t_max]. Rounded, not ceiled:
/// t_max/dt landing a hair above an integer by floating-point error must
/// not add a phantom step.
pub(crate) fn step_count(t_max: f64, dt: f64) -> usize {
    (t_max / dt).round() as usize
}

/// Integrates the system from (x0, y0) with explicit forward Euler,
///
/// x[i+1] = x[i] + dt·y[i]
/// y[i+1] = y[i] + dt·(a1·x[i] + a2·y[i])
///
/// There is no step-size control: a dt too large for the system's time
/// constants diverges, and that divergence is a valid result the dashboard
/// plots. Pure function of its inputs; identical calls produce bit-identical
/// output.
pub fn integrate(
    system: &LinearSystem,
    x0: f64,
    y0: f64,
    t_max: f64,
    dt: f64,
) -> Result<Trajectory> {
    let mut stepper = Euler::new(2);
    integrate_with(&mut stepper, system, x0, y0, t_max, dt)
}

/// Same sampling contract as [`integrate`], but advancing with any
/// fixed-step solver (RK4 for the high-accuracy comparison plots).
pub fn integrate_with<S: Steppable<f64>>(
    stepper: &mut S,
    system: &LinearSystem,
    x0: f64,
    y0: f64,
    t_max: f64,
    dt: f64,
) -> Result<Trajectory> {
    if !dt.is_finite() || dt <= 0.0 {
        bail!("Step size dt must be positive.");
    }
    if !t_max.is_finite() || t_max < 0.0 {
        bail!("Integration horizon t_max must be finite and non-negative.");
    }

    let steps = step_count(t_max, dt);
    let mut t = Vec::with_capacity(steps + 1);
    let mut x = Vec::with_capacity(steps + 1);
    let mut y = Vec::with_capacity(steps + 1);

    let mut time = 0.0;
    let mut state = [x0, y0];
    t.push(0.0);
    x.push(state[0]);
    y.push(state[1]);

    for i in 1..=steps {
        stepper.step(system, &mut time, &mut state, dt);
        t.push(i as f64 * dt);
        x.push(state[0]);
        y.push(state[1]);
    }

    Ok(Trajectory { t, x, y })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solvers::Rk4;
    use crate::system::{DEFAULT_DT, DEFAULT_T_MAX};

    #[test]
    fn grid_is_inclusive_of_both_endpoints() {
        let system = LinearSystem::new(-1.0, 0.0);
        let traj = integrate(&system, 1.0, 0.0, DEFAULT_T_MAX, DEFAULT_DT).expect("trajectory");
        assert_eq!(traj.len(), 201);
        assert_eq!(traj.t[0], 0.0);
        assert!((traj.t[200] - 10.0).abs() < 1e-12);
    }

    #[test]
    fn zero_horizon_yields_single_sample() {
        let system = LinearSystem::new(1.0, 1.0);
        let traj = integrate(&system, 0.5, -0.5, 0.0, DEFAULT_DT).expect("trajectory");
        assert_eq!(traj.len(), 1);
        assert_eq!(traj.last_state(), Some((0.5, -0.5)));
    }

    #[test]
    fn rejects_non_positive_dt() {
        let system = LinearSystem::new(-1.0, 0.0);
        let err = integrate(&system, 1.0, 0.0, 10.0, 0.0).expect_err("dt = 0");
        assert!(format!("{err}").contains("dt must be positive"));
    }

    #[test]
    fn first_euler_step_matches_recurrence() {
        let system = LinearSystem::new(-1.0, -0.5);
        let traj = integrate(&system, 1.0, 2.0, 0.05, 0.05).expect("trajectory");
        // x1 = x0 + dt*y0, y1 = y0 + dt*(a1*x0 + a2*y0)
        assert_eq!(traj.x[1], 1.0 + 0.05 * 2.0);
        assert_eq!(traj.y[1], 2.0 + 0.05 * (-1.0 * 1.0 + -0.5 * 2.0));
    }

    #[test]
    fn integrate_is_deterministic() {
        let system = LinearSystem::new(-0.7, -0.3);
        let a = integrate(&system, 0.9, -0.1, 10.0, 0.05).expect("first run");
        let b = integrate(&system, 0.9, -0.1, 10.0, 0.05).expect("second run");
        assert_eq!(a, b);
    }

    #[test]
    fn damped_system_converges_to_origin() {
        // Both eigenvalue real parts negative: the trajectory must settle
        // near the origin once the horizon clearly exceeds the decay time.
        let system = LinearSystem::new(-1.0, -0.5);
        let traj = integrate(&system, 1.0, 0.0, 20.0, DEFAULT_DT).expect("trajectory");
        let (x, y) = traj.last_state().expect("non-empty");
        assert!(x.abs() < 0.05, "final x = {x}");
        assert!(y.abs() < 0.05, "final y = {y}");

        // At the default t_max = 10 the envelope e^(-t/4) has only reached
        // ~0.1, so check contraction rather than a tight absolute bound.
        let traj = integrate(&system, 1.0, 0.0, DEFAULT_T_MAX, DEFAULT_DT).expect("trajectory");
        let (x, y) = traj.last_state().expect("non-empty");
        assert!(x.hypot(y) < 0.2, "final radius = {}", x.hypot(y));
    }

    #[test]
    fn strongly_damped_system_reaches_tight_neighborhood() {
        let system = LinearSystem::new(-2.0, -1.0);
        let traj = integrate(&system, 1.0, 0.5, 20.0, DEFAULT_DT).expect("trajectory");
        let (x, y) = traj.last_state().expect("non-empty");
        assert!(x.abs() < 1e-3 && y.abs() < 1e-3);
    }

    #[test]
    fn undamped_oscillator_energy_stays_bounded_without_decaying() {
        let system = LinearSystem::new(-1.0, 0.0);
        let traj = integrate(&system, 1.0, 0.0, DEFAULT_T_MAX, DEFAULT_DT).expect("trajectory");
        // Explicit Euler inflates closed orbits slightly; energy must stay
        // within a loose band around its initial value and never decay away.
        for (x, y) in traj.x.iter().zip(&traj.y) {
            let energy = x * x + y * y;
            assert!((0.5..2.0).contains(&energy), "energy = {energy}");
        }
    }

    #[test]
    fn positive_a1_diverges() {
        let system = LinearSystem::new(1.0, 0.0);
        let traj = integrate(&system, 0.1, 0.0, DEFAULT_T_MAX, DEFAULT_DT).expect("trajectory");
        let (x, _) = traj.last_state().expect("non-empty");
        assert!(x.abs() > 10.0 * 0.1, "final x = {x}");
    }

    #[test]
    fn euler_and_rk4_agree_on_non_stiff_case() {
        let system = LinearSystem::new(-1.0, -0.5);
        let euler = integrate(&system, 1.0, 0.0, 5.0, 0.01).expect("euler");
        let mut stepper = Rk4::new(2);
        let rk4 =
            integrate_with(&mut stepper, &system, 1.0, 0.0, 5.0, 0.01).expect("rk4");
        assert_eq!(euler.len(), rk4.len());
        let (xe, ye) = euler.last_state().expect("non-empty");
        let (xr, yr) = rk4.last_state().expect("non-empty");
        assert!((xe - xr).abs() < 1e-2, "x disagreement {}", (xe - xr).abs());
        assert!((ye - yr).abs() < 1e-2, "y disagreement {}", (ye - yr).abs());
    }
}
