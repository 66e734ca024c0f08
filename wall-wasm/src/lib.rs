use wasm_bindgen::prelude::*;
use wall_core::{GridSpec, StencilSolver, TemperatureField, WallParams, surface_heat_flow};

#[wasm_bindgen]
pub struct WallSolver {
    spec: GridSpec,
    field: Option<TemperatureField>,
}

#[wasm_bindgen]
impl WallSolver {
    #[wasm_bindgen(constructor)]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        length: f64,
        larger: f64,
        lambd: f64,
        delta_xy: f64,
        t_ext: f64,
        t_int: f64,
        h_ext: f64,
        h_int: f64,
    ) -> Result<WallSolver, JsValue> {
        let spec = GridSpec::new(WallParams {
            length,
            larger,
            lambd,
            delta_xy,
            t_ext,
            t_int,
            h_ext,
            h_int,
        })
        .map_err(to_js)?;
        Ok(WallSolver { spec, field: None })
    }

    pub fn n_rows(&self) -> usize { self.spec.n_rows() }
    pub fn n_cols(&self) -> usize { self.spec.n_cols() }
    pub fn delta_t(&self) -> f64 { self.spec.delta_t() }
    pub fn node_index(&self, i: usize, j: usize) -> usize { self.spec.node_index(i, j) }

    // Run + timing (WASM-only)
    pub fn run(&mut self, u_initial: f64, max_iter_time: usize) -> Result<RunInfo, JsValue> {
        let t0 = now_ms();
        let field = StencilSolver::new(&self.spec)
            .solve(u_initial, max_iter_time)
            .map_err(to_js)?;
        let t1 = now_ms();
        self.field = Some(field);
        Ok(RunInfo {
            steps: max_iter_time,
            compute_ms: t1 - t0,
            elapsed: self.spec.elapsed(max_iter_time),
        })
    }

    // Copy-based JS access (reliable)
    pub fn slice(&self, k: usize) -> Result<Vec<f64>, JsValue> {
        let field = self.solved()?;
        if k >= field.n_steps() {
            return Err(JsValue::from_str(&format!(
                "slice {k} out of range (0..{})",
                field.n_steps()
            )));
        }
        Ok(field.slice(k).to_vec())
    }

    pub fn final_slice(&self) -> Result<Vec<f64>, JsValue> {
        Ok(self.solved()?.last().to_vec())
    }

    pub fn heat_flow(&self) -> Result<f64, JsValue> {
        surface_heat_flow(&self.spec, self.solved()?.last()).map_err(to_js)
    }
}

impl WallSolver {
    fn solved(&self) -> Result<&TemperatureField, JsValue> {
        self.field
            .as_ref()
            .ok_or_else(|| JsValue::from_str("no field yet: call run() first"))
    }
}

#[wasm_bindgen]
pub struct RunInfo {
    steps: usize,
    compute_ms: f64,
    elapsed: f64,
}

#[wasm_bindgen]
impl RunInfo {
    pub fn steps(&self) -> usize { self.steps }
    pub fn compute_ms(&self) -> f64 { self.compute_ms }
    pub fn elapsed(&self) -> f64 { self.elapsed }
}

fn to_js(e: wall_core::WallError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}
