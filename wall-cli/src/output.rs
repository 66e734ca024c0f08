use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use wall_core::GridSpec;

/// Mesh index diagram as CSV: one `i,j,index` line per node.
pub fn write_mesh<P: AsRef<Path>>(path: P, spec: &GridSpec) -> io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    writeln!(w, "i,j,index")?;
    for i in 0..spec.n_rows() {
        for j in 0..spec.n_cols() {
            writeln!(w, "{},{},{}", i, j, spec.node_index(i, j))?;
        }
    }
    w.flush()
}

/// One temperature slice as CSV, one line per grid row (row 0 = exterior).
pub fn write_heatmap<P: AsRef<Path>>(path: P, slice: &[f64], n_cols: usize) -> io::Result<()> {
    if n_cols == 0 || slice.len() % n_cols != 0 {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("slice of {} values is not a multiple of {} columns", slice.len(), n_cols),
        ));
    }

    let mut w = BufWriter::new(File::create(path)?);
    for row in slice.chunks(n_cols) {
        let cells: Vec<String> = row.iter().map(|v| format!("{:.15e}", v)).collect();
        writeln!(w, "{}", cells.join(","))?;
    }
    w.flush()
}

/// Raw field as little-endian f64, in `(k, i, j)` order.
pub fn write_field<P: AsRef<Path>>(path: P, data: &[f64]) -> io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    write_f64_vec(&mut w, data)?;
    w.flush()
}

fn write_f64_vec<W: Write>(w: &mut W, v: &[f64]) -> io::Result<()> {
    for &x in v {
        w.write_all(&x.to_le_bytes())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fs;
    use wall_core::{StencilSolver, build_grid_spec};

    #[test]
    fn mesh_lists_every_node_once() {
        let dir = tempfile::tempdir().unwrap();
        let spec = build_grid_spec(1.0, 0.3, 1.5, 0.1, -10.0, 20.0, 25.0, 8.0).unwrap();
        let path = dir.path().join("mesh.csv");
        write_mesh(&path, &spec).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 31);
        assert_eq!(lines[0], "i,j,index");
        assert_eq!(lines[1], "0,0,1");
        assert_eq!(lines[30], "2,9,30");
    }

    #[test]
    fn heatmap_has_one_line_per_row() {
        let dir = tempfile::tempdir().unwrap();
        let spec = build_grid_spec(1.0, 0.3, 1.5, 0.1, -10.0, 20.0, 25.0, 8.0).unwrap();
        let last = StencilSolver::new(&spec).solve_final(10.0, 3).unwrap();
        let path = dir.path().join("heatmap.csv");
        write_heatmap(&path, &last, spec.n_cols()).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        let rows: Vec<Vec<f64>> = text
            .lines()
            .map(|l| l.split(',').map(|c| c.parse().unwrap()).collect())
            .collect();
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|r| r.len() == 10));
        assert!((rows[1][4] - 8.25).abs() < 1e-9);
    }

    #[test]
    fn heatmap_rejects_ragged_slice() {
        let dir = tempfile::tempdir().unwrap();
        let err = write_heatmap(dir.path().join("h.csv"), &[1.0; 7], 3).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }

    #[test]
    fn field_is_little_endian_f64() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("field.bin");
        write_field(&path, &[1.5, -2.0]).unwrap();

        let bytes = fs::read(&path).unwrap();
        assert_eq!(bytes.len(), 16);
        assert_eq!(f64::from_le_bytes(bytes[8..].try_into().unwrap()), -2.0);
    }
}
