// error.rs - Caller contract violations

use thiserror::Error;

use crate::controller::RunState;

/// Errors the engine reports to its caller.
///
/// Both variants are contract violations from the UI layer (a bad direct
/// index, or an operation invoked in the wrong state), never data or I/O
/// errors; nothing here is retryable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SimulationError {
    /// A direct cell access used an index outside the board. Wrapped
    /// neighbor lookups never produce this.
    #[error("cell ({row}, {col}) is outside the {width}x{height} board")]
    OutOfRange {
        row: usize,
        col: usize,
        width: usize,
        height: usize,
    },

    /// An operation was invoked in a state that does not permit it, e.g.
    /// stepping while idle or editing a cell mid-run.
    #[error("cannot {op} while the simulation is {state}")]
    InvalidState { op: &'static str, state: RunState },
}
