use crate::error::WallError;
use crate::grid::GridSpec;

/// Net conductive heat flow (W) between two aligned sets of nodes, by
/// Fourier's law: `sum(-lambd * (b - a) / delta_xy) * delta_xy`.
///
/// `a` and `b` are usually two adjacent rows, but any two equally shaped
/// slices or rows whose lengths are a multiple of `n_cols` are accepted.
/// The result is positive when `a` is warmer than `b`.
pub fn heat_flow(spec: &GridSpec, a: &[f64], b: &[f64]) -> Result<f64, WallError> {
    if a.len() != b.len() {
        return Err(WallError::ShapeMismatch {
            expected: a.len(),
            found: b.len(),
        });
    }
    if a.is_empty() || a.len() % spec.n_cols() != 0 {
        return Err(WallError::ShapeMismatch {
            expected: spec.n_cols(),
            found: a.len(),
        });
    }

    let lambd = spec.lambd();
    let delta_xy = spec.delta_xy();
    let qx_sum: f64 = a
        .iter()
        .zip(b)
        .map(|(ua, ub)| -lambd * (ub - ua) / delta_xy)
        .sum();

    Ok(qx_sum * delta_xy)
}

/// Heat flow across the exterior face of a single slice, from row 0 to row 1.
pub fn surface_heat_flow(spec: &GridSpec, slice: &[f64]) -> Result<f64, WallError> {
    let n_cols = spec.n_cols();
    if slice.len() != spec.n_nodes() {
        return Err(WallError::ShapeMismatch {
            expected: spec.n_nodes(),
            found: slice.len(),
        });
    }
    heat_flow(spec, &slice[..n_cols], &slice[n_cols..2 * n_cols])
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::grid::tests::reference_params;
    use approx::assert_relative_eq;

    #[test]
    fn warming_gives_negative_flow() {
        let spec = GridSpec::new(reference_params()).unwrap();
        let a = vec![10.0; spec.n_nodes()];
        let b = vec![11.0; spec.n_nodes()];
        let q = heat_flow(&spec, &a, &b).unwrap();
        assert!(q < 0.0);
        // -1.5 * 1.0 / 0.1 per node, times delta_xy, over 30 nodes.
        assert_relative_eq!(q, -1.5 * 30.0, max_relative = 1e-12);
    }

    #[test]
    fn single_row_pair() {
        let spec = GridSpec::new(reference_params()).unwrap();
        let cold = vec![0.0; 10];
        let warm: Vec<f64> = (0..10).map(|j| j as f64).collect();
        let q = heat_flow(&spec, &warm, &cold).unwrap();
        assert_relative_eq!(q, 1.5 * 45.0, max_relative = 1e-12);
    }

    #[test]
    fn identical_inputs_carry_no_flow() {
        let spec = GridSpec::new(reference_params()).unwrap();
        let row = vec![3.0; 10];
        assert_eq!(heat_flow(&spec, &row, &row).unwrap(), 0.0);
    }

    #[test]
    fn mismatched_shapes_are_rejected() {
        let spec = GridSpec::new(reference_params()).unwrap();
        assert_eq!(
            heat_flow(&spec, &[1.0; 10], &[1.0; 20]),
            Err(WallError::ShapeMismatch {
                expected: 10,
                found: 20
            })
        );
        assert!(heat_flow(&spec, &[1.0; 7], &[1.0; 7]).is_err());
        assert!(heat_flow(&spec, &[], &[]).is_err());
        assert!(surface_heat_flow(&spec, &[1.0; 10]).is_err());
    }

    #[test]
    fn surface_flow_uses_first_two_rows() {
        let spec = GridSpec::new(reference_params()).unwrap();
        let mut slice = vec![0.0; spec.n_nodes()];
        slice[..10].fill(-2.0);
        slice[10..20].fill(1.0);
        slice[20..].fill(100.0);
        let q = surface_heat_flow(&spec, &slice).unwrap();
        assert_relative_eq!(q, -1.5 * 3.0 * 10.0, max_relative = 1e-12);
    }
}
