use ode_solvers::{dop_shared::IntegrationError, Dop853, Dopri5, Rk4, SVector, System};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use magnetar::{SpinDownModel, SpinState};

use crate::grid::TimeGrid;
use crate::trajectory::Trajectory;

type State = SVector<f64, 2>;

/// Error returned by [`integrate`].
#[derive(Debug, Error)]
pub enum SolverError {
    #[error("time grid has no points")]
    EmptyGrid,

    #[error("time grid must be finite and strictly increasing")]
    NonMonotonicGrid,

    #[error(transparent)]
    Integration(#[from] IntegrationError),
}

/// Supported numerical integration methods.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Method {
    /// Classic fixed-step 4th-order Runge-Kutta. `step` is the largest
    /// internal step taken between output points, in seconds.
    Rk4 { step: f64 },

    /// Adaptive Dormand-Prince 5(4) Runge-Kutta.
    Dopri5 { abs_tol: f64, rel_tol: f64 },

    /// Adaptive Dormand-Prince 8(5,3) Runge-Kutta. Higher accuracy per
    /// step than `Dopri5`, useful for long integration intervals.
    Dop853 { abs_tol: f64, rel_tol: f64 },
}

impl Default for Method {
    /// `Dopri5` at tolerances tight enough that the published light
    /// curves are insensitive to the stepper.
    fn default() -> Self {
        Method::Dopri5 {
            abs_tol: 1.0e-8,
            rel_tol: 1.0e-8,
        }
    }
}

/// Adapts the torque balance to the `ode_solvers` system interface.
struct SpinDownSystem {
    model: SpinDownModel,
}

impl System<f64, State> for SpinDownSystem {
    fn system(&self, t: f64, y: &State, dy: &mut State) {
        let derivative = self.model.derivatives(t, [y[0], y[1]]);
        dy[0] = derivative[0];
        dy[1] = derivative[1];
    }
}

/// Integrates the spin-down model from `initial` across `grid`, sampling
/// the state at every grid point.
///
/// The first grid point is taken as the initial time and its state is the
/// unmodified `initial`; each later point is reached by integrating the
/// preceding interval with `method`.
///
/// # Errors
///
/// Returns [`SolverError::EmptyGrid`] or [`SolverError::NonMonotonicGrid`]
/// when the grid cannot be integrated over, and
/// [`SolverError::Integration`] when the stepper itself fails.
pub fn integrate(
    model: &SpinDownModel,
    initial: SpinState,
    grid: &TimeGrid,
    method: Method,
) -> Result<Trajectory, SolverError> {
    if grid.is_empty() {
        return Err(SolverError::EmptyGrid);
    }
    if !grid.is_strictly_increasing() {
        return Err(SolverError::NonMonotonicGrid);
    }

    let points = grid.points();
    let mut states = Vec::with_capacity(points.len());
    let mut evaluations: u32 = 0;

    let mut y = State::from(initial);
    states.push(y.into());

    for pair in points.windows(2) {
        let (advanced, num_eval) = advance(model, y, pair[0], pair[1], method)?;
        y = advanced;
        evaluations += num_eval;
        states.push(y.into());
    }

    Ok(Trajectory::new(points.to_vec(), states, evaluations))
}

/// Advances the state across a single output interval.
fn advance(
    model: &SpinDownModel,
    y: State,
    t_start: f64,
    t_end: f64,
    method: Method,
) -> Result<(State, u32), SolverError> {
    let system = SpinDownSystem { model: *model };
    let span = t_end - t_start;

    match method {
        Method::Rk4 { step } => {
            // A power-of-two substep count keeps span/dx exact, so the
            // fixed stepper lands on t_end instead of rounding a step
            // past it.
            let substeps = ((span / step).ceil().clamp(1.0, 1.0e9) as u64).next_power_of_two();
            let mut stepper = Rk4::new(system, t_start, y, t_end, span / substeps as f64);
            let stats = stepper.integrate()?;
            Ok((final_state(stepper.y_out(), y), stats.num_eval))
        }
        Method::Dopri5 { abs_tol, rel_tol } => {
            let mut stepper = Dopri5::new(system, t_start, t_end, span, y, rel_tol, abs_tol);
            let stats = stepper.integrate()?;
            Ok((final_state(stepper.y_out(), y), stats.num_eval))
        }
        Method::Dop853 { abs_tol, rel_tol } => {
            let mut stepper = Dop853::new(system, t_start, t_end, span, y, rel_tol, abs_tol);
            let stats = stepper.integrate()?;
            Ok((final_state(stepper.y_out(), y), stats.num_eval))
        }
    }
}

fn final_state(y_out: &[State], fallback: State) -> State {
    y_out.last().copied().unwrap_or(fallback)
}
