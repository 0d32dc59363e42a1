//! WASM bindings for Scheme Fit.
//!
//! This module provides JavaScript-friendly bindings for fitting schemes in
//! the browser before drawing them on a `<canvas>`.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { solve_flat, WasmSchemeFit } from 'scheme_fit';
//!
//! await init();
//!
//! // Constraints as flat (slope, lower, upper) triples
//! const [scale, offset] = solve_flat(new Float64Array([0, 0, 10, 1, 0, 4]));
//!
//! const fit = new WasmSchemeFit(`
//!   resistor -450 0
//!   resistor 450 0
//!   wire -200 0 200 0
//! `, 640, 480);
//! ctx.setTransform(fit.scale, 0, 0, -fit.scale, fit.x_shift, 480 - fit.y_shift);
//! ```

use wasm_bindgen::prelude::*;

use crate::dsl;
use crate::scheme::{fit_scheme, Canvas, Placement, Point};
use crate::solver::{self, Constraint};

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

fn to_js(err: crate::error::FitError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn constraints_from_flat(triples: &[f64]) -> Result<Vec<Constraint>, JsValue> {
    if triples.len() % 3 != 0 {
        return Err(JsValue::from_str(
            "constraint array length must be a multiple of 3",
        ));
    }
    Ok(triples
        .chunks_exact(3)
        .map(|t| Constraint::new(t[0], t[1], t[2]))
        .collect())
}

/// Solve flat `(slope, lower, upper)` triples.
///
/// Returns `[scale, offset]`, with `[0, 0]` for an infeasible set and
/// `[Infinity, 0]` for an unbounded one.
#[wasm_bindgen]
pub fn solve_flat(triples: &[f64]) -> Result<Vec<f64>, JsValue> {
    let constraints = constraints_from_flat(triples)?;
    let (scale, offset) = solver::solve(&constraints).map_err(to_js)?.as_pair();
    Ok(vec![scale, offset])
}

/// Admissible offsets `[lower, upper]` of flat triples at a fixed scale.
#[wasm_bindgen]
pub fn dx_interval_flat(triples: &[f64], scale: f64) -> Result<Vec<f64>, JsValue> {
    let constraints = constraints_from_flat(triples)?;
    let (lo, hi) = solver::dx_interval(&constraints, scale);
    Ok(vec![lo, hi])
}

/// A scheme description fitted into a canvas.
#[wasm_bindgen]
pub struct WasmSchemeFit {
    placement: Placement,
}

#[wasm_bindgen]
impl WasmSchemeFit {
    /// Parse a scheme description and fit it into a `width` x `height` canvas.
    ///
    /// Directives in the description (margin, tolerance, maximum scale) apply;
    /// a `.canvas` directive is overridden by the arguments.
    #[wasm_bindgen(constructor)]
    pub fn new(description: &str, width: f64, height: f64) -> Result<WasmSchemeFit, JsValue> {
        let doc = dsl::parse(description).map_err(to_js)?;
        let placement =
            fit_scheme(&doc.scheme, Canvas::new(width, height), &doc.fit_config()).map_err(to_js)?;
        Ok(WasmSchemeFit { placement })
    }

    #[wasm_bindgen(getter)]
    pub fn scale(&self) -> f64 {
        self.placement.scale()
    }

    #[wasm_bindgen(getter)]
    pub fn x_shift(&self) -> f64 {
        self.placement.transform.x_shift
    }

    #[wasm_bindgen(getter)]
    pub fn y_shift(&self) -> f64 {
        self.placement.transform.y_shift
    }

    /// Canvas position `[x, y]` of a scheme point.
    #[wasm_bindgen]
    pub fn place(&self, x: f64, y: f64) -> Vec<f64> {
        let p = self.placement.place(Point::new(x, y));
        vec![p.x, p.y]
    }
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
