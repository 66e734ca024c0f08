use tracing::{debug, trace};

use crate::boundary::resolve_stencil;
use crate::error::{ConfigError, WallError, finite};
use crate::field::{SliceStats, TemperatureField};
use crate::grid::GridSpec;

/// Explicit FTCS time stepper for a `GridSpec`.
#[derive(Debug, Clone, Copy)]
pub struct StencilSolver<'a> {
    spec: &'a GridSpec,
}

impl<'a> StencilSolver<'a> {
    pub fn new(spec: &'a GridSpec) -> Self {
        StencilSolver { spec }
    }

    // ---- Full history ----

    /// Run `max_iter_time` slices starting from a uniform `u_initial`.
    ///
    /// Slice 0 is the initial condition, so `max_iter_time - 1` steps are taken.
    pub fn solve(&self, u_initial: f64, max_iter_time: usize) -> Result<TemperatureField, WallError> {
        validate_run(u_initial, max_iter_time)?;

        let mut u = TemperatureField::with_initial(
            max_iter_time,
            self.spec.n_rows(),
            self.spec.n_cols(),
            u_initial,
        )?;

        for k in 0..max_iter_time - 1 {
            let (current, next) = u.step_pair(k);
            self.step(current, next);
            trace!(k, "step");
        }

        log_summary(u.last(), max_iter_time);
        Ok(u)
    }

    // ---- Final slice only ----

    /// Same final slice as `solve(..).last()`, keeping only two slices alive.
    pub fn solve_final(&self, u_initial: f64, max_iter_time: usize) -> Result<Vec<f64>, WallError> {
        validate_run(u_initial, max_iter_time)?;

        let size = self.spec.n_nodes();
        let mut field = vec![u_initial; size];
        let mut next = vec![0.0; size];

        for k in 0..max_iter_time - 1 {
            self.step(&field, &mut next);
            std::mem::swap(&mut field, &mut next);
            trace!(k, "step");
        }

        log_summary(&field, max_iter_time);
        Ok(field)
    }

    // ---- Core update ----

    /// One Jacobi step: every value of `next` is computed from `current` only.
    ///
    /// Both slices must hold `n_rows * n_cols` values.
    pub fn step(&self, current: &[f64], next: &mut [f64]) {
        let n_rows = self.spec.n_rows();
        let n_cols = self.spec.n_cols();
        let gamma = self.spec.gamma();
        assert_eq!(current.len(), self.spec.n_nodes(), "current slice has wrong size");
        assert_eq!(next.len(), current.len(), "next slice has wrong size");

        for i in 0..n_rows {
            let row = i * n_cols;
            for j in 0..n_cols {
                let s = resolve_stencil(self.spec, current, i, j);
                next[row + j] = gamma * s.laplacian() + s.centre;
            }
        }
    }
}

fn validate_run(u_initial: f64, max_iter_time: usize) -> Result<(), ConfigError> {
    if max_iter_time < 1 {
        return Err(ConfigError::NoTimeSteps);
    }
    finite("u_initial", u_initial)?;
    Ok(())
}

fn log_summary(last: &[f64], max_iter_time: usize) {
    if let Some(stats) = SliceStats::of(last) {
        debug!(
            max_iter_time,
            min = stats.min,
            max = stats.max,
            mean = stats.mean,
            "final slice"
        );
    }
}
