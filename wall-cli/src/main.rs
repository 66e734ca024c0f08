mod output;

use clap::Parser;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;
use wall_core::{GridSpec, SliceStats, StencilSolver, WallParams, surface_heat_flow};

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Output directory
    #[arg(long)]
    out: PathBuf,

    /// JSON file with all run parameters (replaces the individual flags)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Wall length, horizontal (m)
    #[arg(long, env = "LENGTH", required_unless_present = "config")]
    length: Option<f64>,

    /// Wall thickness between exterior and interior faces (m)
    #[arg(long, env = "LARGER", required_unless_present = "config")]
    larger: Option<f64>,

    /// Thermal conductivity (W/m.K)
    #[arg(long, env = "LAMBD", required_unless_present = "config")]
    lambd: Option<f64>,

    /// Mesh step (m)
    #[arg(long, env = "DELTA_XY", required_unless_present = "config")]
    delta_xy: Option<f64>,

    /// Outside temperature (°C)
    #[arg(long, env = "T_EXT", required_unless_present = "config", allow_hyphen_values = true)]
    t_ext: Option<f64>,

    /// Inside temperature (°C)
    #[arg(long, env = "T_INT", required_unless_present = "config", allow_hyphen_values = true)]
    t_int: Option<f64>,

    /// Outside convection coefficient (W/m².K)
    #[arg(long, env = "H_EXT", required_unless_present = "config")]
    h_ext: Option<f64>,

    /// Inside convection coefficient (W/m².K)
    #[arg(long, env = "H_INT", required_unless_present = "config")]
    h_int: Option<f64>,

    /// Initial temperature everywhere in the wall (°C)
    #[arg(long, env = "U_INITIAL", required_unless_present = "config", allow_hyphen_values = true)]
    u_initial: Option<f64>,

    /// Number of time slices, initial condition included
    #[arg(long, env = "MAX_ITER_TIME", required_unless_present = "config")]
    max_iter_time: Option<usize>,

    /// Also write the whole field history to field.bin
    #[arg(long)]
    history: bool,

    /// Log level (error|warn|info|debug|trace)
    #[arg(long, default_value = "info")]
    log_level: Level,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
struct RunParams {
    #[serde(flatten)]
    wall: WallParams,
    u_initial: f64,
    max_iter_time: usize,
}

#[derive(Serialize)]
struct Summary {
    n_rows: usize,
    n_cols: usize,
    n_nodes: usize,

    delta_xy: f64,
    delta_t: f64,
    gamma: f64,
    teta_ext: f64,
    teta_int: f64,

    u_initial: f64,
    max_iter_time: usize,
    elapsed: f64,

    heat_flow: f64,
    final_slice: SliceStats,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    FmtSubscriber::builder()
        .with_max_level(args.log_level)
        .with_target(false)
        .init();

    let run = resolve_params(&args)?;
    let spec = GridSpec::new(run.wall)?;
    let solver = StencilSolver::new(&spec);

    fs::create_dir_all(&args.out)?;
    output::write_mesh(args.out.join("mesh.csv"), &spec)?;

    let last = if args.history {
        let u = solver.solve(run.u_initial, run.max_iter_time)?;
        output::write_field(args.out.join("field.bin"), u.as_slice())?;
        u.last().to_vec()
    } else {
        solver.solve_final(run.u_initial, run.max_iter_time)?
    };

    output::write_heatmap(args.out.join("heatmap.csv"), &last, spec.n_cols())?;

    let q = surface_heat_flow(&spec, &last)?;
    let summary = Summary {
        n_rows: spec.n_rows(),
        n_cols: spec.n_cols(),
        n_nodes: spec.n_nodes(),

        delta_xy: spec.delta_xy(),
        delta_t: spec.delta_t(),
        gamma: spec.gamma(),
        teta_ext: spec.teta_ext(),
        teta_int: spec.teta_int(),

        u_initial: run.u_initial,
        max_iter_time: run.max_iter_time,
        elapsed: spec.elapsed(run.max_iter_time),

        heat_flow: q,
        final_slice: SliceStats::of(&last).ok_or("empty temperature slice")?,
    };
    let file = fs::File::create(args.out.join("summary.json"))?;
    serde_json::to_writer_pretty(file, &summary)?;

    info!(
        "temperature at t = {:.3} unit time written to {}",
        summary.elapsed,
        args.out.display()
    );
    println!("heat flow : {:.2} W", q);

    Ok(())
}

fn resolve_params(args: &Args) -> Result<RunParams, Box<dyn std::error::Error>> {
    if let Some(path) = &args.config {
        let text = fs::read_to_string(path)?;
        let run: RunParams = serde_json::from_str(&text)?;
        info!("loaded run parameters from {}", path.display());
        return Ok(run);
    }

    let missing = |name: &str| format!("missing parameter: {name}");
    Ok(RunParams {
        wall: WallParams {
            length: args.length.ok_or_else(|| missing("length"))?,
            larger: args.larger.ok_or_else(|| missing("larger"))?,
            lambd: args.lambd.ok_or_else(|| missing("lambd"))?,
            delta_xy: args.delta_xy.ok_or_else(|| missing("delta_xy"))?,
            t_ext: args.t_ext.ok_or_else(|| missing("t_ext"))?,
            t_int: args.t_int.ok_or_else(|| missing("t_int"))?,
            h_ext: args.h_ext.ok_or_else(|| missing("h_ext"))?,
            h_int: args.h_int.ok_or_else(|| missing("h_int"))?,
        },
        u_initial: args.u_initial.ok_or_else(|| missing("u_initial"))?,
        max_iter_time: args.max_iter_time.ok_or_else(|| missing("max_iter_time"))?,
    })
}
