// lib.rs - Game of Life simulation engine

//! Conway's Game of Life on a fixed-size toroidal board, with automatic
//! detection of repeating configurations.
//!
//! The engine is clock-free and UI-free: a front-end owns a [`Simulation`],
//! calls [`Simulation::step`] on whatever cadence it likes, and reads the
//! board back through [`Simulation::grid`]. When a run revisits a
//! configuration the step reports [`StepResult::CycleDetected`] and the run
//! stops itself on the last distinct generation.
//!
//! # Example
//!
//! ```
//! use life_engine::{Simulation, StepResult};
//!
//! let mut sim = Simulation::new(8, 8);
//! // Horizontal blinker.
//! for col in 2..5 {
//!     sim.edit_cell(3, col).unwrap();
//! }
//! sim.start();
//!
//! assert!(matches!(sim.step().unwrap(), StepResult::Advanced { .. }));
//! assert!(matches!(sim.step().unwrap(), StepResult::Advanced { .. }));
//! // The blinker is back in its starting phase: the run halts by itself.
//! assert_eq!(sim.step().unwrap(), StepResult::CycleDetected);
//! assert!(!sim.is_running());
//! ```

mod controller;
mod error;
mod grid;
mod history;
mod patterns;
pub mod step;

pub use controller::{RunState, Simulation, StepResult};
pub use error::SimulationError;
pub use grid::Grid;
pub use history::{Fingerprint, HistoryTracker};
pub use patterns::{PATTERNS, Pattern};
