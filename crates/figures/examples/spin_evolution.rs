//! Spin evolution across a magnetic-field sweep.
//!
//! Integrates the fiducial fallback disc around magnetars of increasing
//! dipole field and plots the angular frequency against log time. Stronger
//! fields brake harder: the strongest dipoles erase the accretion spin-up
//! within minutes.
//!
//! Run with: cargo run --example spin_evolution

use std::error::Error;
use std::fs;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use figures::{render_semilog_x, FigureSeries, RunConfig};
use magnetar::{initial_state, FallbackDisc, Magnetar, SpinDownModel};
use spindown::{integrate, Method, TimeGrid};
use units::{Length, MagneticField, Mass, Time};

fn main() -> Result<(), Box<dyn Error>> {
    let out_dir = Path::new("out/spin_evolution");
    fs::create_dir_all(out_dir)?;

    let spin_period = Time::from_milliseconds(5.0);
    let disc_mass = Mass::from_solar_masses(1.0e-3);
    let grid = TimeGrid::fiducial();
    let method = Method::default();

    println!("🌟 Newborn magnetar: P = 5 ms, M_disc = 0.001 M☉, R_disc = 100 km");
    println!("   Sweeping dipole field from 0.5 to 10 x 10^15 G\n");

    let mut series = Vec::new();
    for b15 in [0.5, 1.0, 2.0, 5.0, 10.0] {
        let star = Magnetar::new(MagneticField::from_units_of_1e15_gauss(b15));
        let disc = FallbackDisc::new(disc_mass, Length::from_km(100.0));
        let model = SpinDownModel::new(star, disc);

        let y0 = initial_state(spin_period, disc_mass);
        let trajectory = integrate(&model, y0, &grid, method)?;

        let last = trajectory.len() - 1;
        let final_spin = trajectory.spin(last);
        println!(
            "   B = {:>4} x10^15 G: spun down to {:>6.1} rad/s (P = {:.1} ms)",
            b15,
            final_spin.to_rad_per_sec(),
            final_spin.spin_period().to_milliseconds()
        );

        let csv = BufWriter::new(File::create(out_dir.join(format!("b15_{b15}.csv")))?);
        trajectory.write_csv(csv)?;

        let points = trajectory
            .times()
            .iter()
            .zip(trajectory.states())
            .map(|(&t, y)| (t, y[1]))
            .collect();
        series.push(FigureSeries::new(format!("B = {b15}e15 G"), points));

        if b15 == 1.0 {
            RunConfig::new("spin_evolution", &model, spin_period, &grid, method)
                .write_to_dir(out_dir)?;
        }
    }

    let png = out_dir.join("spin_evolution.png");
    render_semilog_x(
        &png,
        "Magnetar spin evolution",
        "time (s)",
        "omega (rad/s)",
        &series,
    )?;

    println!("\n📈 Chart written to {}", png.display());
    println!("💾 Per-field trajectories and config.json in {}", out_dir.display());
    Ok(())
}
