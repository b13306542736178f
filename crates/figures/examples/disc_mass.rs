//! Disc depletion for different fallback timescales.
//!
//! The epsilon parameter stretches the fallback timescale relative to the
//! viscous one. Short fallback (epsilon < 1) dumps the reservoir early and
//! the disc drains fast; long fallback keeps feeding the disc and flattens
//! the decay.
//!
//! Run with: cargo run --example disc_mass

use std::error::Error;
use std::fs;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use figures::{render_log_log, FigureSeries, RunConfig};
use magnetar::{initial_state, SpinDownModel};
use spindown::{integrate, Method, TimeGrid};
use units::{Mass, Time};

fn main() -> Result<(), Box<dyn Error>> {
    let out_dir = Path::new("out/disc_mass");
    fs::create_dir_all(out_dir)?;

    let spin_period = Time::from_milliseconds(5.0);
    let disc_mass = Mass::from_solar_masses(1.0e-3);
    let grid = TimeGrid::fiducial();
    let method = Method::default();

    println!("💿 Disc depletion for epsilon = 0.1, 1, 10\n");

    let mut series = Vec::new();
    for epsilon in [0.1, 1.0, 10.0] {
        let mut model = SpinDownModel::fiducial();
        model.disc.epsilon = epsilon;

        let y0 = initial_state(spin_period, disc_mass);
        let trajectory = integrate(&model, y0, &grid, method)?;

        let last = trajectory.len() - 1;
        println!(
            "   epsilon = {:>4}: M_disc {:.2e} g -> {:.2e} g",
            epsilon,
            trajectory.disc_mass(0).to_grams(),
            trajectory.disc_mass(last).to_grams()
        );

        let csv = BufWriter::new(File::create(out_dir.join(format!("epsilon_{epsilon}.csv")))?);
        trajectory.write_csv(csv)?;

        let points = trajectory
            .times()
            .iter()
            .zip(trajectory.states())
            .map(|(&t, y)| (t, y[0]))
            .collect();
        series.push(FigureSeries::new(format!("epsilon = {epsilon}"), points));

        if epsilon == 1.0 {
            RunConfig::new("disc_mass", &model, spin_period, &grid, method)
                .write_to_dir(out_dir)?;
        }
    }

    let png = out_dir.join("disc_mass.png");
    render_log_log(
        &png,
        "Fallback disc depletion",
        "time (s)",
        "disc mass (g)",
        &series,
    )?;

    println!("\n📈 Chart written to {}", png.display());
    Ok(())
}
