//! WebAssembly bindings.
//!
//! Exposes the solver to JavaScript behind the `wasm` feature. The
//! result crosses the boundary as a plain object produced by
//! `serde-wasm-bindgen`, so the JS side sees `{ board, energy, ... }`
//! with the same field names as [`AnnealingResult`](crate::AnnealingResult).

use wasm_bindgen::prelude::*;

/// Runs the annealing search and returns the result as a JS object.
///
/// Invalid parameters reject with an error string rather than throwing
/// a panic across the boundary.
#[wasm_bindgen(js_name = runAnnealing)]
pub fn run_annealing(
    board_size: u32,
    initial_temperature: f64,
    min_temperature: f64,
    cooling_rate: f64,
    max_iterations: u32,
) -> Result<JsValue, JsValue> {
    let result = crate::run_annealing(
        board_size as usize,
        initial_temperature,
        min_temperature,
        cooling_rate,
        max_iterations as usize,
    )
    .map_err(|e| JsValue::from_str(&e.to_string()))?;
    serde_wasm_bindgen::to_value(&result).map_err(JsValue::from)
}
