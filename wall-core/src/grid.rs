use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{ConfigError, WallError, finite, non_negative, storage_len, strictly_positive};

/// Diffusion number of the explicit scheme.
///
/// This is the largest value for which the 2D five-point FTCS update is stable.
/// The time step is derived from it, never the other way round.
pub const DIFFUSION_NUMBER: f64 = 0.25;

/// Physical description of the wall and its surroundings (SI units, °C).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WallParams {
    /// Horizontal extent of the wall (m), spanned by the columns.
    pub length: f64,
    /// Thickness between exterior and interior faces (m), spanned by the rows.
    pub larger: f64,
    /// Thermal conductivity (W/m.K).
    pub lambd: f64,
    /// Mesh step, identical along both axes (m).
    pub delta_xy: f64,
    pub t_ext: f64,
    pub t_int: f64,
    /// Exterior convection coefficient (W/m².K).
    pub h_ext: f64,
    /// Interior convection coefficient (W/m².K).
    pub h_int: f64,
}

/// Immutable grid geometry and discretization constants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSpec {
    params: WallParams,
    n_rows: usize,
    n_cols: usize,
    n_nodes: usize,
    delta_t: f64,
    gamma: f64,
    teta_ext: f64,
    teta_int: f64,
}

impl GridSpec {
    pub fn new(params: WallParams) -> Result<GridSpec, WallError> {
        let delta_xy = strictly_positive("delta_xy", params.delta_xy)?;
        let lambd = strictly_positive("lambd", params.lambd)?;
        let length = strictly_positive("length", params.length)?;
        let larger = strictly_positive("larger", params.larger)?;
        non_negative("h_ext", params.h_ext)?;
        non_negative("h_int", params.h_int)?;
        finite("t_ext", params.t_ext)?;
        finite("t_int", params.t_int)?;

        let n_rows = mesh_points(larger, delta_xy);
        let n_cols = mesh_points(length, delta_xy);
        if n_rows < 2 {
            return Err(ConfigError::DegenerateGrid {
                axis: "rows",
                nodes: n_rows,
            }
            .into());
        }
        if n_cols < 2 {
            return Err(ConfigError::DegenerateGrid {
                axis: "columns",
                nodes: n_cols,
            }
            .into());
        }
        let n_nodes = storage_len("grid", n_rows, n_cols)?;

        let gamma = DIFFUSION_NUMBER;
        let delta_t = gamma * delta_xy * delta_xy / lambd;
        let teta_ext = (delta_xy / lambd) * params.h_ext;
        let teta_int = (delta_xy / lambd) * params.h_int;

        info!("matrix shape : {}x{} = {} nodes", n_rows, n_cols, n_nodes);
        debug!(delta_t, gamma, teta_ext, teta_int, "discretization constants");

        Ok(GridSpec {
            params,
            n_rows,
            n_cols,
            n_nodes,
            delta_t,
            gamma,
            teta_ext,
            teta_int,
        })
    }

    pub fn params(&self) -> &WallParams {
        &self.params
    }

    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    pub fn n_cols(&self) -> usize {
        self.n_cols
    }

    pub fn n_nodes(&self) -> usize {
        self.n_nodes
    }

    pub fn delta_xy(&self) -> f64 {
        self.params.delta_xy
    }

    pub fn lambd(&self) -> f64 {
        self.params.lambd
    }

    pub fn delta_t(&self) -> f64 {
        self.delta_t
    }

    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    pub fn teta_ext(&self) -> f64 {
        self.teta_ext
    }

    pub fn teta_int(&self) -> f64 {
        self.teta_int
    }

    pub fn t_ext(&self) -> f64 {
        self.params.t_ext
    }

    pub fn t_int(&self) -> f64 {
        self.params.t_int
    }

    /// 1-based row-major node number, as labelled on the mesh diagram.
    pub fn node_index(&self, i: usize, j: usize) -> usize {
        i * self.n_cols + j + 1
    }

    /// Simulated time covered by `max_iter_time` steps.
    pub fn elapsed(&self, max_iter_time: usize) -> f64 {
        max_iter_time as f64 * self.delta_t
    }
}

// Number of points in [0, extent) stepped by `step`.
fn mesh_points(extent: f64, step: f64) -> usize {
    (extent / step).ceil() as usize
}
