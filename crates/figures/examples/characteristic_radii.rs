//! The three radii that decide the fate of infalling matter.
//!
//! Tracks the Alfvén, corotation and light-cylinder radii along the
//! fiducial run. The magnetosphere expands as the inflow fades until the
//! light-cylinder cap takes over, while the corotation radius follows the
//! braking star outward.
//!
//! Run with: cargo run --example characteristic_radii

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
    let out_dir = Path::new("out/characteristic_radii");
    fs::create_dir_all(out_dir)?;

    let spin_period = Time::from_milliseconds(5.0);
    let disc_mass = Mass::from_solar_masses(1.0e-3);
    let model = SpinDownModel::fiducial();
    let grid = TimeGrid::fiducial();
    let method = Method::default();

    let y0 = initial_state(spin_period, disc_mass);
    let trajectory = integrate(&model, y0, &grid, method)?;
    let diagnostics = trajectory.diagnostics(&model);

    println!("🧲 Characteristic radii along the fiducial run");
    println!(
        "   t = 1 s:    R_m = {:.2e} cm, R_c = {:.2e} cm, R_lc = {:.2e} cm",
        diagnostics[0].alfven_radius.to_cm(),
        diagnostics[0].corotation_radius.to_cm(),
        diagnostics[0].light_cylinder_radius.to_cm()
    );
    let last = diagnostics.len() - 1;
    println!(
        "   t = 10^6 s: R_m = {:.2e} cm, R_c = {:.2e} cm, R_lc = {:.2e} cm",
        diagnostics[last].alfven_radius.to_cm(),
        diagnostics[last].corotation_radius.to_cm(),
        diagnostics[last].light_cylinder_radius.to_cm()
    );

    let mut csv = BufWriter::new(File::create(out_dir.join("radii.csv"))?);
    writeln!(csv, "t_s,alfven_cm,corotation_cm,light_cylinder_cm")?;
    for (t, eval) in trajectory.times().iter().zip(&diagnostics) {
        writeln!(
            csv,
            "{},{:e},{:e},{:e}",
            t,
            eval.alfven_radius.to_cm(),
            eval.corotation_radius.to_cm(),
            eval.light_cylinder_radius.to_cm()
        )?;
    }
    csv.flush()?;

    let times = trajectory.times();
    let alfven = times
        .iter()
        .zip(&diagnostics)
        .map(|(&t, e)| (t, e.alfven_radius.to_cm()))
        .collect();
    let corotation = times
        .iter()
        .zip(&diagnostics)
        .map(|(&t, e)| (t, e.corotation_radius.to_cm()))
        .collect();
    let light_cylinder = times
        .iter()
        .zip(&diagnostics)
        .map(|(&t, e)| (t, e.light_cylinder_radius.to_cm()))
        .collect();

    let series = [
        FigureSeries::new("Alfven radius", alfven),
        FigureSeries::new("corotation radius", corotation),
        FigureSeries::new("light cylinder", light_cylinder),
    ];

    let png = out_dir.join("characteristic_radii.png");
    render_log_log(&png, "Characteristic radii", "time (s)", "radius (cm)", &series)?;

    RunConfig::new("characteristic_radii", &model, spin_period, &grid, method)
        .write_to_dir(out_dir)?;

    println!("\n📈 Chart written to {}", png.display());
    Ok(())
}
