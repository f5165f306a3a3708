//! Core WASM dashboard wrapper and plot runners.

use anyhow::Result;
use phaselab_core::field::{vector_field, DEFAULT_RESOLUTION};
use phaselab_core::solvers::Rk4;
use phaselab_core::system::{LinearSystem, Scenario};
use phaselab_core::trajectory::{integrate, integrate_with, Trajectory};
use wasm_bindgen::prelude::*;

/// One dashboard session: the current coefficient pair plus the solver the
/// trajectory plots run with. Every computation is stateless apart from
/// these two knobs; each slider change just calls the runners again.
#[wasm_bindgen]
pub struct WasmDashboard {
    pub(crate) system: LinearSystem,
    pub(crate) solver: SolverKind,
}

#[derive(Clone, Copy)]
pub(crate) enum SolverKind {
    Euler,
    Rk4,
}

impl SolverKind {
    pub(crate) fn parse(name: &str) -> Result<SolverKind, JsValue> {
        match name {
            "euler" => Ok(SolverKind::Euler),
            "rk4" => Ok(SolverKind::Rk4),
            _ => Err(JsValue::from_str("Unknown solver")),
        }
    }
}

#[wasm_bindgen]
impl WasmDashboard {
    #[wasm_bindgen(constructor)]
    pub fn new(a1: f64, a2: f64, solver_name: &str) -> Result<WasmDashboard, JsValue> {
        console_error_panic_hook::set_once();

        Ok(WasmDashboard {
            system: LinearSystem::new(a1, a2),
            solver: SolverKind::parse(solver_name)?,
        })
    }

    /// Builds a dashboard preloaded with a scenario's coefficient preset.
    pub fn from_scenario(name: &str, solver_name: &str) -> Result<WasmDashboard, JsValue> {
        console_error_panic_hook::set_once();

        let scenario =
            Scenario::from_key(name).ok_or_else(|| JsValue::from_str("Unknown scenario"))?;
        Ok(WasmDashboard {
            system: scenario.system(),
            solver: SolverKind::parse(solver_name)?,
        })
    }

    /// Replaces both coefficients, clamped to the slider range.
    pub fn set_coefficients(&mut self, a1: f64, a2: f64) {
        self.system = LinearSystem::new(a1, a2);
    }

    pub fn a1(&self) -> f64 {
        self.system.a1
    }

    pub fn a2(&self) -> f64 {
        self.system.a2
    }

    pub fn compute_trajectory(
        &self,
        x0: f64,
        y0: f64,
        t_max: f64,
        dt: f64,
    ) -> Result<JsValue, JsValue> {
        let trajectory = self
            .run_trajectory(x0, y0, t_max, dt)
            .map_err(|e| JsValue::from_str(&format!("Trajectory computation failed: {}", e)))?;
        serde_wasm_bindgen::to_value(&trajectory)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }

    /// Samples the phase-portrait vector field. A zero resolution asks for
    /// the default grid density.
    pub fn compute_vector_field(
        &self,
        x_min: f64,
        x_max: f64,
        y_min: f64,
        y_max: f64,
        resolution: u32,
    ) -> Result<JsValue, JsValue> {
        let resolution = if resolution == 0 {
            DEFAULT_RESOLUTION
        } else {
            resolution as usize
        };
        let field = vector_field(&self.system, (x_min, x_max), (y_min, y_max), resolution)
            .map_err(|e| JsValue::from_str(&format!("Field computation failed: {}", e)))?;
        serde_wasm_bindgen::to_value(&field)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }

    pub(crate) fn run_trajectory(
        &self,
        x0: f64,
        y0: f64,
        t_max: f64,
        dt: f64,
    ) -> Result<Trajectory> {
        match self.solver {
            SolverKind::Euler => integrate(&self.system, x0, y0, t_max, dt),
            SolverKind::Rk4 => {
                let mut stepper = Rk4::new(2);
                integrate_with(&mut stepper, &self.system, x0, y0, t_max, dt)
            }
        }
    }
}
