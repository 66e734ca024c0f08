use approx::assert_relative_eq;
use wall_core::{
    ConfigError, StencilSolver, WallError, build_grid_spec, heat_flow, max_abs_change, solve,
    surface_heat_flow,
};

fn reference_spec() -> wall_core::GridSpec {
    build_grid_spec(1.0, 0.3, 1.5, 0.1, -10.0, 20.0, 25.0, 8.0).unwrap()
}

#[test]
fn reference_wall_three_slices() {
    let spec = reference_spec();
    assert_eq!((spec.n_rows(), spec.n_cols()), (3, 10));
    assert_eq!(spec.gamma(), 0.25);

    let u = solve(&spec, 10.0, 3).unwrap();
    assert_eq!(u.shape(), (3, 3, 10));

    assert!(u.slice(0).iter().all(|&v| v == 10.0));

    // One step: only the convective rows move.
    for j in 0..10 {
        assert_relative_eq!(u[(1, 0, j)], 5.0 / 3.0, epsilon = 1e-9);
        assert_eq!(u[(1, 1, j)], 10.0);
        assert_relative_eq!(u[(1, 2, j)], 34.0 / 3.0, epsilon = 1e-9);
    }

    // Two steps: the perturbation has reached the middle row.
    for j in 0..10 {
        assert_relative_eq!(u[(2, 0, j)], -10.0 / 9.0, epsilon = 1e-9);
        assert_relative_eq!(u[(2, 1, j)], 8.25, epsilon = 1e-9);
        assert_relative_eq!(u[(2, 2, j)], 12.155_555_555_555_556, epsilon = 1e-9);
    }
}

#[test]
fn approaches_steady_state() {
    let spec = build_grid_spec(1.0, 0.3, 1.5, 0.1, -10.0, 20.0, 5.0, 8.0).unwrap();
    let u = solve(&spec, 10.0, 3000).unwrap();
    let n = u.n_steps();

    assert!(max_abs_change(u.slice(n - 2), u.slice(n - 1)) < 1e-9);

    let expected = [3.090_909_090_909_1, 7.454_545_454_545_466, 11.818_181_818_181_827];
    for (i, &t) in expected.iter().enumerate() {
        for &v in u.row(n - 1, i) {
            assert_relative_eq!(v, t, epsilon = 1e-6);
        }
    }

    // Exterior is colder than the first inner row: heat leaves through row 0.
    let q = surface_heat_flow(&spec, u.last()).unwrap();
    assert_relative_eq!(q, -65.454_545_454_545, epsilon = 1e-6);
    let same = heat_flow(&spec, u.row(n - 1, 0), u.row(n - 1, 1)).unwrap();
    assert_eq!(q, same);
}

#[test]
fn elapsed_time_label() {
    let spec = reference_spec();
    assert_relative_eq!(spec.elapsed(3000), 3000.0 * 0.01 / 6.0, max_relative = 1e-12);
}

#[test]
fn invalid_inputs_fail_before_solving() {
    assert!(matches!(
        build_grid_spec(1.0, 0.3, 0.0, 0.1, -10.0, 20.0, 25.0, 8.0),
        Err(WallError::InvalidConfiguration(ConfigError::NonPositive { name: "lambd", .. }))
    ));

    let spec = reference_spec();
    assert!(matches!(
        StencilSolver::new(&spec).solve_final(10.0, 0),
        Err(WallError::InvalidConfiguration(ConfigError::NoTimeSteps))
    ));
}
