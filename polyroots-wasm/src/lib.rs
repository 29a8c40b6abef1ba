//! WASM bindings for closed-form linear and quadratic roots.
//!
//! This crate exposes the polyroots-core solvers to JavaScript. Quadratic roots cross the boundary as an array of two
//! `{ re, im }` objects.

use log::{debug, info, error};
use polyroots_core::{Linear, Quadratic};
use wasm_bindgen::prelude::*;
use wasm_bindgen_console_logger::DEFAULT_LOGGER;

/// Initializes the logging system for WASM.
///
/// Sets up console logging and panic hooks for better error reporting in the browser.
/// Should be called once at application startup.
#[wasm_bindgen]
pub fn init_logs() {
    match log::set_logger(&DEFAULT_LOGGER) {
        Ok(_) => info!("Initialized console.logger"),
        Err(e) => error!("failed to set console.logger: {}", e),
    };
    console_error_panic_hook::set_once();
}

/// Updates the log level filter.
///
/// # Arguments
/// * `level` - Log level string: "error", "warn", "info", "debug", or "trace".
///   Defaults to "info" if empty or null.
#[wasm_bindgen]
pub fn update_log_level(level: JsValue) -> Result<(), JsError> {
    let level: Option<String> = serde_wasm_bindgen::from_value(level)?;
    let level = polyroots_core::parse_log_level(level.as_deref())?;
    log::set_max_level(level);
    Ok(())
}

/// Root of `ax + b = 0`.
///
/// # Errors
/// Throws if `a` is zero.
#[wasm_bindgen]
pub fn linear_roots(a: f64, b: f64) -> Result<f64, JsError> {
    Ok(polyroots_core::linear_roots(a, b)?)
}

/// Both roots of `ax² + bx + c = 0`, `+√D` root first.
///
/// # Returns
/// An array of two `{ re, im }` objects; real roots have `im == 0`.
///
/// # Errors
/// Throws if `a` is zero.
#[wasm_bindgen]
pub fn quad_roots(a: f64, b: f64, c: f64) -> Result<JsValue, JsError> {
    let roots = polyroots_core::quad_roots(a, b, c)?;
    Ok(serde_wasm_bindgen::to_value(&roots)?)
}

/// Solves a linear equation given as a `{ a, b }` object.
///
/// Missing coefficients default to `a = 1`, `b = 0`.
#[wasm_bindgen]
pub fn solve_linear(equation: JsValue) -> Result<f64, JsError> {
    let equation: Linear = serde_wasm_bindgen::from_value(equation)?;
    debug!("solve_linear: {:?}", equation);
    Ok(equation.root()?)
}

/// Solves a quadratic equation given as a `{ a, b, c }` object.
///
/// Missing coefficients default to `a = 1`, `b = 2`, `c = 0`.
#[wasm_bindgen]
pub fn solve_quadratic(equation: JsValue) -> Result<JsValue, JsError> {
    let equation: Quadratic = serde_wasm_bindgen::from_value(equation)?;
    debug!("solve_quadratic: {:?}", equation);
    let roots = equation.roots()?;
    Ok(serde_wasm_bindgen::to_value(&roots)?)
}
