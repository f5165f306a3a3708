//! Quiz and help-content getters for the educational panels.

use phaselab_core::content;
use phaselab_core::system::Scenario;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub fn quiz_questions() -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&content::QUIZ_QUESTIONS)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

#[wasm_bindgen]
pub fn quiz_question(id: u32) -> Result<JsValue, JsValue> {
    let question =
        content::question(id).ok_or_else(|| JsValue::from_str("Unknown question id"))?;
    serde_wasm_bindgen::to_value(question)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

#[wasm_bindgen]
pub fn quiz_total() -> u32 {
    content::total_questions() as u32
}

/// Grades one answer; the modal shows the stored explanation either way.
#[wasm_bindgen]
pub fn check_quiz_answer(id: u32, answer: bool) -> Result<bool, JsValue> {
    let question =
        content::question(id).ok_or_else(|| JsValue::from_str("Unknown question id"))?;
    Ok(question.check(answer))
}

#[wasm_bindgen]
pub fn help_topic(key: &str) -> Result<JsValue, JsValue> {
    let topic = content::help_topic(key).ok_or_else(|| JsValue::from_str("Unknown help topic"))?;
    serde_wasm_bindgen::to_value(topic)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Help panel for a scenario dropdown value; unknown scenarios fall back to
/// the custom-coefficients text.
#[wasm_bindgen]
pub fn scenario_help(scenario: &str) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(content::scenario_help(scenario))
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Dropdown values the UI offers, in display order.
#[wasm_bindgen]
pub fn scenario_keys() -> Vec<String> {
    Scenario::ALL
        .iter()
        .map(|scenario| scenario.key().to_string())
        .collect()
}
