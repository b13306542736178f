use std::io;
use std::io::Write;

use serde::{Deserialize, Serialize};

use magnetar::{Evaluation, SpinDownModel, SpinState};
use units::{AngularVelocity, Mass};

/// Time history of the coupled disc mass and stellar spin, sampled on the
/// output grid handed to [`integrate`](crate::integrate).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trajectory {
    times: Vec<f64>,
    states: Vec<SpinState>,
    evaluations: u32,
}

impl Trajectory {
    pub(crate) fn new(times: Vec<f64>, states: Vec<SpinState>, evaluations: u32) -> Self {
        Self {
            times,
            states,
            evaluations,
        }
    }

    /// Sample times in seconds.
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Raw state vectors, (disc mass in g, spin in rad/s).
    pub fn states(&self) -> &[SpinState] {
        &self.states
    }

    /// Number of torque-balance evaluations the stepper performed.
    pub fn evaluations(&self) -> u32 {
        self.evaluations
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Disc mass at sample `index`.
    pub fn disc_mass(&self, index: usize) -> Mass {
        Mass::from_grams(self.states[index][0])
    }

    /// Stellar spin at sample `index`.
    pub fn spin(&self, index: usize) -> AngularVelocity {
        AngularVelocity::from_rad_per_sec(self.states[index][1])
    }

    pub fn final_state(&self) -> Option<SpinState> {
        self.states.last().copied()
    }

    /// Re-evaluates the torque balance at every sample, exposing the
    /// radii, mass flows and torques behind the trajectory.
    pub fn diagnostics(&self, model: &SpinDownModel) -> Vec<Evaluation> {
        self.times
            .iter()
            .zip(&self.states)
            .map(|(&t, &state)| model.evaluate(t, state))
            .collect()
    }

    /// Writes the trajectory as CSV with a header row.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the underlying writer.
    pub fn write_csv<W: Write>(&self, mut writer: W) -> io::Result<()> {
        writeln!(writer, "t_s,disc_mass_g,omega_rad_s,spin_period_ms")?;
        for (t, state) in self.times.iter().zip(&self.states) {
            let period = AngularVelocity::from_rad_per_sec(state[1]).spin_period();
            writeln!(
                writer,
                "{},{:e},{},{}",
                t,
                state[0],
                state[1],
                period.to_milliseconds()
            )?;
        }
        writer.flush()
    }
}
