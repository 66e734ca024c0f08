//! Transient 2D conduction in a rectangular wall.
//!
//! Explicit FTCS finite differences on a uniform mesh, convective exchange on
//! the exterior (row 0) and interior (last row) faces, adiabatic vertical
//! faces, and Fourier's-law heat flow post-processing.

pub mod boundary;
pub mod error;
pub mod field;
pub mod flux;
pub mod grid;
pub mod solver;

pub use boundary::{Ambient, Neighbours, Regime, Source, Stencil, resolve_stencil};
pub use error::{ConfigError, WallError};
pub use field::{SliceStats, TemperatureField, max_abs_change};
pub use flux::{heat_flow, surface_heat_flow};
pub use grid::{DIFFUSION_NUMBER, GridSpec, WallParams};
pub use solver::StencilSolver;

/// Build a `GridSpec` from the physical parameters of the wall.
#[allow(clippy::too_many_arguments)]
pub fn build_grid_spec(
    length: f64,
    larger: f64,
    lambd: f64,
    delta_xy: f64,
    t_ext: f64,
    t_int: f64,
    h_ext: f64,
    h_int: f64,
) -> Result<GridSpec, WallError> {
    GridSpec::new(WallParams {
        length,
        larger,
        lambd,
        delta_xy,
        t_ext,
        t_int,
        h_ext,
        h_int,
    })
}

/// Full temperature history for a uniform initial condition.
pub fn solve(spec: &GridSpec, u_initial: f64, max_iter_time: usize) -> Result<TemperatureField, WallError> {
    StencilSolver::new(spec).solve(u_initial, max_iter_time)
}
