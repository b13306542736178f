use std::fs::File;
use std::io;
use std::path::Path;

use serde::Serialize;

use magnetar::SpinDownModel;
use spindown::{Method, TimeGrid};
use units::Time;

/// Everything needed to reproduce a figure run, written next to its
/// outputs as `config.json`.
#[derive(Debug, Clone, Serialize)]
pub struct RunConfig {
    pub figure: String,
    pub magnetic_field_gauss: f64,
    pub spin_period_ms: f64,
    pub disc_mass_msol: f64,
    pub disc_radius_km: f64,
    pub alpha: f64,
    pub sound_speed_cm_s: f64,
    pub epsilon: f64,
    pub delta: f64,
    pub gate_sharpness: f64,
    pub capping_fraction: f64,
    pub grid_start_s: f64,
    pub grid_end_s: f64,
    pub grid_points: usize,
    pub method: Method,
}

impl RunConfig {
    pub fn new(
        figure: impl Into<String>,
        model: &SpinDownModel,
        spin_period: Time,
        grid: &TimeGrid,
        method: Method,
    ) -> Self {
        Self {
            figure: figure.into(),
            magnetic_field_gauss: model.star.magnetic_field.to_gauss(),
            spin_period_ms: spin_period.to_milliseconds(),
            disc_mass_msol: model.disc.initial_mass.to_solar_masses(),
            disc_radius_km: model.disc.radius.to_km(),
            alpha: model.disc.alpha,
            sound_speed_cm_s: model.disc.sound_speed.to_cm_per_sec(),
            epsilon: model.disc.epsilon,
            delta: model.disc.delta,
            gate_sharpness: model.gate.sharpness,
            capping_fraction: model.capping_fraction,
            grid_start_s: grid.points().first().copied().unwrap_or(0.0),
            grid_end_s: grid.points().last().copied().unwrap_or(0.0),
            grid_points: grid.len(),
            method,
        }
    }

    /// Writes the configuration as `config.json` inside `out_dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or written.
    pub fn write_to_dir(&self, out_dir: &Path) -> io::Result<()> {
        let file = File::create(out_dir.join("config.json"))?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }
}
