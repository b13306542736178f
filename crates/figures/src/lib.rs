//! Figure rendering for spin-down trajectories.
//!
//! The examples in this crate rerun the fallback-disc model across
//! parameter sweeps and export each run as a PNG chart, a CSV table and
//! a `config.json` describing exactly what was integrated.

pub mod chart;
pub mod run;

#[cfg(test)]
mod run_test;

pub use chart::{render_log_log, render_semilog_x, FigureSeries};
pub use run::RunConfig;
