//! Perturbation, Lyapunov-field, and classification runners.

use crate::system::WasmDashboard;
use js_sys::Float64Array;
use phaselab_core::field::DEFAULT_RESOLUTION;
use phaselab_core::lyapunov::lyapunov_field;
use phaselab_core::perturbation::perturbation;
use phaselab_core::stability::{classify, separation_trend};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
impl WasmDashboard {
    /// Runs the nominal and eps-shifted trajectories and returns both plus
    /// their separation series.
    pub fn compute_perturbation(
        &self,
        x0: f64,
        y0: f64,
        eps: f64,
        t_max: f64,
        dt: f64,
    ) -> Result<JsValue, JsValue> {
        let analysis = perturbation(&self.system, x0, y0, eps, t_max, dt)
            .map_err(|e| JsValue::from_str(&format!("Perturbation computation failed: {}", e)))?;
        serde_wasm_bindgen::to_value(&analysis)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }

    pub fn compute_lyapunov_field(
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
        let field = lyapunov_field(&self.system, (x_min, x_max), (y_min, y_max), resolution)
            .map_err(|e| JsValue::from_str(&format!("Lyapunov computation failed: {}", e)))?;
        serde_wasm_bindgen::to_value(&field)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }

    /// Flat buffer of V̇ rescaled into [-1, 1] for the heatmap shader,
    /// same row-major layout as the field grids.
    pub fn lyapunov_shading(
        &self,
        x_min: f64,
        x_max: f64,
        y_min: f64,
        y_max: f64,
        resolution: u32,
    ) -> Result<Float64Array, JsValue> {
        let resolution = if resolution == 0 {
            DEFAULT_RESOLUTION
        } else {
            resolution as usize
        };
        let field = lyapunov_field(&self.system, (x_min, x_max), (y_min, y_max), resolution)
            .map_err(|e| JsValue::from_str(&format!("Lyapunov computation failed: {}", e)))?;
        Ok(Float64Array::from(field.normalized_v_dot().as_slice()))
    }

    /// Eigenvalue classification of the current coefficients for the
    /// explanation panel.
    pub fn classify(&self) -> Result<JsValue, JsValue> {
        let report = classify(&self.system);
        serde_wasm_bindgen::to_value(&report)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }

    /// Bins a separation series into converging/bounded/diverging for the
    /// robustness caption.
    pub fn separation_trend(&self, distance: Vec<f64>) -> Result<JsValue, JsValue> {
        let trend = separation_trend(&distance)
            .map_err(|e| JsValue::from_str(&format!("Trend computation failed: {}", e)))?;
        serde_wasm_bindgen::to_value(&trend)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }
}
