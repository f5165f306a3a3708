use crate::traits::{DynamicalSystem, Scalar};
use serde::{Deserialize, Serialize};

/// Lower bound the UI sliders allow for either coefficient.
pub const COEFF_MIN: f64 = -5.0;
/// Upper bound the UI sliders allow for either coefficient.
pub const COEFF_MAX: f64 = 5.0;

/// Step size used by every plot unless the caller overrides it.
pub const DEFAULT_DT: f64 = 0.05;
/// Integration horizon used by every plot unless the caller overrides it.
pub const DEFAULT_T_MAX: f64 = 10.0;
/// Initial-condition offset used by the perturbation plot.
pub const DEFAULT_EPS: f64 = 1e-3;

/// Clamps a slider value into [`COEFF_MIN`, `COEFF_MAX`].
pub fn clamp_coefficient(value: f64) -> f64 {
    value.clamp(COEFF_MIN, COEFF_MAX)
}

/// The dashboard's plant: a second-order linear system in companion form,
///
/// ẋ = y
/// ẏ = a1·x + a2·y
///
/// x is a position-like quantity (angle, displacement, charge) and y its
/// rate. Every visualization is a pure function of (a1, a2) plus an initial
/// state, so this struct is the whole of the model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearSystem {
    pub a1: f64,
    pub a2: f64,
}

impl LinearSystem {
    /// Builds a system with both coefficients clamped to the slider range.
    pub fn new(a1: f64, a2: f64) -> Self {
        Self {
            a1: clamp_coefficient(a1),
            a2: clamp_coefficient(a2),
        }
    }

    /// Trace of the companion matrix [[0, 1], [a1, a2]].
    pub fn trace(&self) -> f64 {
        self.a2
    }

    /// Determinant of the companion matrix.
    pub fn determinant(&self) -> f64 {
        -self.a1
    }

    /// Discriminant Δ = a2² + 4·a1 of the characteristic polynomial
    /// λ² - a2·λ - a1. Its sign separates the damping regimes the help
    /// text teaches.
    pub fn discriminant(&self) -> f64 {
        self.a2 * self.a2 + 4.0 * self.a1
    }
}

impl<T: Scalar> DynamicalSystem<T> for LinearSystem {
    fn dimension(&self) -> usize {
        2
    }

    fn apply(&self, _t: T, x: &[T], out: &mut [T]) {
        let a1 = T::from_f64(self.a1).unwrap();
        let a2 = T::from_f64(self.a2).unwrap();
        out[0] = x[1];
        out[1] = a1 * x[0] + a2 * x[1];
    }
}

/// Physical setups the dashboard animates. Each maps to a concrete
/// coefficient pair sitting in the regime its help topic explains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scenario {
    MassSpring,
    Pendulum,
    RlcCircuit,
    ShipRoll,
    DoorCloser,
    CarSuspension,
}

impl Scenario {
    /// Preset (a1, a2) for the scenario.
    pub fn coefficients(self) -> (f64, f64) {
        match self {
            // Undamped oscillator, ω² = 1: closed orbits.
            Scenario::MassSpring => (-1.0, 0.0),
            // Linearized pendulum with light pivot friction.
            Scenario::Pendulum => (-2.0, -0.3),
            // Series RLC, charge/current state.
            Scenario::RlcCircuit => (-2.0, -0.5),
            // Roll dynamics of a statically stable hull.
            Scenario::ShipRoll => (-0.5, -0.2),
            // Hydraulic closer tuned to the critical regime, Δ = 0.
            Scenario::DoorCloser => (-1.0, -2.0),
            // Quarter-car model, deliberately underdamped.
            Scenario::CarSuspension => (-4.0, -1.0),
        }
    }

    /// Identifier used by the UI dropdown and the help-topic keys.
    pub fn key(self) -> &'static str {
        match self {
            Scenario::MassSpring => "spring",
            Scenario::Pendulum => "pendulum",
            Scenario::RlcCircuit => "rlc",
            Scenario::ShipRoll => "ship",
            Scenario::DoorCloser => "door",
            Scenario::CarSuspension => "suspension",
        }
    }

    pub fn from_key(key: &str) -> Option<Scenario> {
        match key {
            "spring" => Some(Scenario::MassSpring),
            "pendulum" => Some(Scenario::Pendulum),
            "rlc" => Some(Scenario::RlcCircuit),
            "ship" => Some(Scenario::ShipRoll),
            "door" => Some(Scenario::DoorCloser),
            "suspension" => Some(Scenario::CarSuspension),
            _ => None,
        }
    }

    pub fn system(self) -> LinearSystem {
        let (a1, a2) = self.coefficients();
        LinearSystem::new(a1, a2)
    }

    pub const ALL: [Scenario; 6] = [
        Scenario::MassSpring,
        Scenario::Pendulum,
        Scenario::RlcCircuit,
        Scenario::ShipRoll,
        Scenario::DoorCloser,
        Scenario::CarSuspension,
    ];
}
