//! Where the fallback matter goes.
//!
//! Splits the inflow along the fiducial run into the fallback feed, the
//! accreted share and the propeller ejecta. With the fiducial parameters
//! the star stays well inside corotation, so most of the inflow lands on
//! the surface and the propeller only skims the rest.
//!
//! Run with: cargo run --example mass_flow

use std::error::Error;
use std::fs;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use figures::{render_log_log, FigureSeries, RunConfig};
use magnetar::{initial_state, SpinDownModel};
use spindown::{integrate, Method, TimeGrid};
use units::{Mass, Time};

fn main() -> Result<(), Box<dyn Error>> {
    let out_dir = Path::new("out/mass_flow");
    fs::create_dir_all(out_dir)?;

    let spin_period = Time::from_milliseconds(5.0);
    let disc_mass = Mass::from_solar_masses(1.0e-3);
    let model = SpinDownModel::fiducial();
    let grid = TimeGrid::fiducial();
    let method = Method::default();

    let y0 = initial_state(spin_period, disc_mass);
    let trajectory = integrate(&model, y0, &grid, method)?;
    let diagnostics = trajectory.diagnostics(&model);

    println!("🌊 Mass flow along the fiducial run");
    println!(
        "   t = 1 s: fallback {:.2e} g/s, accreted {:.2e} g/s, ejected {:.2e} g/s",
        diagnostics[0].fallback_rate.to_grams_per_sec(),
        diagnostics[0].accretion_rate.to_grams_per_sec(),
        diagnostics[0].propeller_rate.to_grams_per_sec()
    );

    let mut csv = BufWriter::new(File::create(out_dir.join("rates.csv"))?);
    writeln!(csv, "t_s,fallback_g_s,accretion_g_s,propeller_g_s")?;
    for (t, eval) in trajectory.times().iter().zip(&diagnostics) {
        writeln!(
            csv,
            "{},{:e},{:e},{:e}",
            t,
            eval.fallback_rate.to_grams_per_sec(),
            eval.accretion_rate.to_grams_per_sec(),
            eval.propeller_rate.to_grams_per_sec()
        )?;
    }
    csv.flush()?;

    let times = trajectory.times();
    let fallback = times
        .iter()
        .zip(&diagnostics)
        .map(|(&t, e)| (t, e.fallback_rate.to_grams_per_sec()))
        .collect();
    let accretion = times
        .iter()
        .zip(&diagnostics)
        .map(|(&t, e)| (t, e.accretion_rate.to_grams_per_sec()))
        .collect();
    let propeller = times
        .iter()
        .zip(&diagnostics)
        .map(|(&t, e)| (t, e.propeller_rate.to_grams_per_sec()))
        .collect();

    let series = [
        FigureSeries::new("fallback", fallback),
        FigureSeries::new("accretion", accretion),
        FigureSeries::new("propeller", propeller),
    ];

    let png = out_dir.join("mass_flow.png");
    render_log_log(
        &png,
        "Mass flow through the magnetosphere",
        "time (s)",
        "mass rate (g/s)",
        &series,
    )?;

    RunConfig::new("mass_flow", &model, spin_period, &grid, method).write_to_dir(out_dir)?;

    println!("\n📈 Chart written to {}", png.display());
    Ok(())
}
