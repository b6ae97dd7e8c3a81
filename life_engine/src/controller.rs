// controller.rs - Run orchestration and the start/stop state machine

use std::fmt;

use rand::Rng;

use crate::error::SimulationError;
use crate::grid::Grid;
use crate::history::{Fingerprint, HistoryTracker};
use crate::patterns::Pattern;
use crate::step;

/// Where the current run stands.
///
/// `Halted` means the last step detected a repeating configuration and the
/// run stopped itself. For every permission check it behaves exactly like
/// `Idle`; it exists so the front-end can tell the two apart and surface a
/// notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Idle,
    Running,
    Halted,
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RunState::Idle => "idle",
            RunState::Running => "running",
            RunState::Halted => "halted",
        })
    }
}

/// Outcome of one [`Simulation::step`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepResult {
    /// A new generation was committed.
    Advanced { generation: u64, live_count: usize },
    /// The current configuration was already seen in this run. The board and
    /// generation counter are unchanged and the run has stopped.
    CycleDetected,
}

/// Owns the board, the generation counter and the seen-state history for one
/// run, and enforces which operations are legal in which state.
///
/// The controller has no notion of time: the front-end calls [`step`] on
/// whatever cadence it likes while the simulation is running.
///
/// [`step`]: Simulation::step
#[derive(Debug)]
pub struct Simulation {
    grid: Grid,
    generation: u64,
    history: HistoryTracker,
    state: RunState,
}

impl Simulation {
    /// Creates a stopped simulation over an all-dead `width`x`height` board.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            grid: Grid::new(width, height),
            generation: 0,
            history: HistoryTracker::new(),
            state: RunState::Idle,
        }
    }

    pub fn run_state(&self) -> RunState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    /// Read-only view of the board for rendering.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn current_generation(&self) -> u64 {
        self.generation
    }

    pub fn current_population(&self) -> usize {
        self.grid.population()
    }

    /// Begins (or resumes) stepping. No-op when already running.
    pub fn start(&mut self) {
        self.state = RunState::Running;
    }

    /// Pauses stepping. No-op when not running.
    pub fn stop(&mut self) {
        if self.state == RunState::Running {
            self.state = RunState::Idle;
        }
    }

    /// Advances the simulation by one generation.
    ///
    /// The current board is fingerprinted first; if this run has already
    /// seen that configuration the upcoming step would only reproduce a
    /// generation that was already on screen, so the run halts with the
    /// board and generation counter untouched. Otherwise the fingerprint is
    /// recorded and the next generation is committed.
    ///
    /// Calling this while not running is a caller error.
    pub fn step(&mut self) -> Result<StepResult, SimulationError> {
        if self.state != RunState::Running {
            return Err(SimulationError::InvalidState {
                op: "step",
                state: self.state,
            });
        }

        let fingerprint = Fingerprint::of(&self.grid);
        if self.history.contains(&fingerprint) {
            self.state = RunState::Halted;
            return Ok(StepResult::CycleDetected);
        }
        self.history.record(fingerprint);

        let (next_grid, live_count) = step::next(&self.grid);
        self.grid = next_grid;
        self.generation += 1;
        Ok(StepResult::Advanced {
            generation: self.generation,
            live_count,
        })
    }

    /// Stops any active run and returns to an all-dead board with a zeroed
    /// generation counter and an empty history. The starting configuration
    /// for the next run is then built up with [`Simulation::edit_cell`].
    pub fn clear(&mut self) {
        self.begin_new_run();
        self.grid.clear();
    }

    /// Stops any active run and reseeds every cell at random (live with
    /// probability 0.5), with a zeroed generation counter and an empty
    /// history.
    pub fn randomize(&mut self, rng: &mut impl Rng) {
        self.begin_new_run();
        self.grid.randomize(rng);
    }

    /// Stops any active run and replaces the board with `pattern` stamped
    /// centered on an otherwise empty board, as a new starting
    /// configuration.
    pub fn load_pattern(&mut self, pattern: &Pattern) {
        self.begin_new_run();
        self.grid.clear();
        pattern.stamp(&mut self.grid);
    }

    /// Toggles one cell and returns its new state.
    ///
    /// Permitted only while the simulation is not running: a manual edit
    /// defines a new starting configuration, so the front-end must stop the
    /// run first. Edits do not touch the generation counter or the history.
    pub fn edit_cell(&mut self, row: usize, col: usize) -> Result<bool, SimulationError> {
        if self.state == RunState::Running {
            return Err(SimulationError::InvalidState {
                op: "edit a cell",
                state: self.state,
            });
        }
        self.grid.toggle(row, col)
    }

    fn begin_new_run(&mut self) {
        self.state = RunState::Idle;
        self.generation = 0;
        self.history.reset();
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn blinker_sim() -> Simulation {
        let mut sim = Simulation::new(8, 8);
        for col in 2..5 {
            sim.edit_cell(3, col).unwrap();
        }
        sim
    }

    #[test]
    fn new_simulation_is_idle_and_empty() {
        let sim = Simulation::new(50, 50);
        assert_eq!(sim.run_state(), RunState::Idle);
        assert_eq!(sim.current_generation(), 0);
        assert_eq!(sim.current_population(), 0);
    }

    #[test]
    fn start_and_stop_are_idempotent() {
        let mut sim = Simulation::new(4, 4);
        assert!(!sim.is_running());

        sim.start();
        assert!(sim.is_running());
        sim.start();
        assert!(sim.is_running());

        sim.stop();
        assert_eq!(sim.run_state(), RunState::Idle);
        sim.stop();
        assert_eq!(sim.run_state(), RunState::Idle);
    }

    #[test]
    fn step_requires_a_running_simulation() {
        let mut sim = blinker_sim();
        assert_eq!(
            sim.step(),
            Err(SimulationError::InvalidState {
                op: "step",
                state: RunState::Idle,
            })
        );
        // The rejected call changed nothing.
        assert_eq!(sim.current_generation(), 0);
        assert_eq!(sim.current_population(), 3);
    }

    #[test]
    fn advancing_reports_generation_and_population() {
        let mut sim = blinker_sim();
        sim.start();

        let result = sim.step().unwrap();
        assert_eq!(
            result,
            StepResult::Advanced {
                generation: 1,
                live_count: 3,
            }
        );
        assert_eq!(sim.current_generation(), 1);
        assert_eq!(sim.current_population(), 3);
    }

    #[test]
    fn blinker_halts_on_third_step() {
        let mut sim = blinker_sim();
        sim.start();

        assert!(matches!(sim.step().unwrap(), StepResult::Advanced { .. }));
        assert!(matches!(sim.step().unwrap(), StepResult::Advanced { .. }));

        let before_halt = sim.grid().clone();
        assert_eq!(sim.step().unwrap(), StepResult::CycleDetected);

        // The run auto-stopped without applying the redundant step: the last
        // distinct generation stays on the board.
        assert_eq!(sim.run_state(), RunState::Halted);
        assert_eq!(sim.grid(), &before_halt);
        assert_eq!(sim.current_generation(), 2);

        // Halted behaves like idle for further stepping.
        assert!(matches!(
            sim.step(),
            Err(SimulationError::InvalidState {
                op: "step",
                state: RunState::Halted,
            })
        ));
    }

    #[test]
    fn still_life_is_detected_on_second_step() {
        let mut sim = Simulation::new(6, 6);
        for (row, col) in [(2, 2), (2, 3), (3, 2), (3, 3)] {
            sim.edit_cell(row, col).unwrap();
        }
        sim.start();

        assert!(matches!(sim.step().unwrap(), StepResult::Advanced { .. }));
        assert_eq!(sim.step().unwrap(), StepResult::CycleDetected);
        assert_eq!(sim.current_generation(), 1);
        assert_eq!(sim.current_population(), 4);
    }

    #[test]
    fn restart_after_halt_without_edits_halts_again() {
        let mut sim = blinker_sim();
        sim.start();
        while sim.step().unwrap() != StepResult::CycleDetected {}

        sim.start();
        assert_eq!(sim.step().unwrap(), StepResult::CycleDetected);
    }

    #[test]
    fn editing_after_halt_allows_the_run_to_continue() {
        let mut sim = blinker_sim();
        sim.start();
        while sim.step().unwrap() != StepResult::CycleDetected {}

        // Perturb the board; the configuration is new, so stepping resumes.
        sim.edit_cell(0, 0).unwrap();
        sim.start();
        assert!(matches!(sim.step().unwrap(), StepResult::Advanced { .. }));
    }

    #[test]
    fn clear_and_randomize_reset_the_run() {
        let mut sim = blinker_sim();
        sim.start();
        sim.step().unwrap();
        sim.step().unwrap();

        let mut rng = StdRng::seed_from_u64(99);
        sim.randomize(&mut rng);
        assert_eq!(sim.run_state(), RunState::Idle);
        assert_eq!(sim.current_generation(), 0);
        assert!(sim.current_population() > 0);

        // A fresh history: the first step of the new run must advance even
        // though the previous run recorded configurations.
        sim.start();
        assert!(matches!(sim.step().unwrap(), StepResult::Advanced { .. }));

        sim.clear();
        assert_eq!(sim.run_state(), RunState::Idle);
        assert_eq!(sim.current_generation(), 0);
        assert_eq!(sim.current_population(), 0);
    }

    #[test]
    fn cleared_history_does_not_remember_the_empty_board() {
        let mut sim = Simulation::new(5, 5);
        sim.start();
        // Empty board: first step advances (records empty), second detects.
        assert!(matches!(sim.step().unwrap(), StepResult::Advanced { .. }));
        assert_eq!(sim.step().unwrap(), StepResult::CycleDetected);

        sim.clear();
        sim.start();
        assert!(matches!(sim.step().unwrap(), StepResult::Advanced { .. }));
    }

    #[test]
    fn edit_cell_toggles_and_respects_state() {
        let mut sim = Simulation::new(5, 5);
        assert_eq!(sim.edit_cell(2, 2), Ok(true));
        assert_eq!(sim.edit_cell(2, 2), Ok(false));
        assert_eq!(sim.current_population(), 0);

        assert!(matches!(
            sim.edit_cell(9, 0),
            Err(SimulationError::OutOfRange { .. })
        ));

        sim.start();
        assert_eq!(
            sim.edit_cell(2, 2),
            Err(SimulationError::InvalidState {
                op: "edit a cell",
                state: RunState::Running,
            })
        );
    }

    #[test]
    fn loading_a_pattern_starts_a_fresh_run() {
        let mut sim = Simulation::new(20, 20);
        sim.edit_cell(0, 0).unwrap();
        sim.start();
        sim.step().unwrap();

        let blinker = crate::patterns::PATTERNS
            .iter()
            .find(|p| p.name == "Blinker")
            .unwrap();
        sim.load_pattern(blinker);

        assert_eq!(sim.run_state(), RunState::Idle);
        assert_eq!(sim.current_generation(), 0);
        assert_eq!(sim.current_population(), 3);

        // The blinker then runs its two-phase cycle to detection.
        sim.start();
        assert!(matches!(sim.step().unwrap(), StepResult::Advanced { .. }));
        assert!(matches!(sim.step().unwrap(), StepResult::Advanced { .. }));
        assert_eq!(sim.step().unwrap(), StepResult::CycleDetected);
    }
}
