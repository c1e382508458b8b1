//! Solve driver: compose the pipeline into one circuit and run it once.
//!
//! No state machine, no retries: initializer, superposition layer, oracle and
//! diffusion are composed top to bottom, measured, submitted to the backend
//! for a batch of shots, and the counts come back. A backend failure is fatal
//! to the run and propagates unmodified.

use log::{debug, info};

use crate::backend::{Backend, Counts, StatevectorBackend};
use crate::circuit::{Circuit, CircuitBuilder};
use crate::error::{CircuitError, SimulationError, SolveError};
use crate::grover::{construct_oracle, diffusion_operator, initialize_state};
use crate::puzzle::{Puzzle, PUZZLE_CELLS};

/// Run configuration. Sampling seeds belong to the backend
/// ([`StatevectorBackend::with_seed`]), not to the driver.
#[derive(Debug, Clone)]
pub struct SolveConfig {
    /// Number of repeated measurement trials.
    pub shots: u32,
}

impl Default for SolveConfig {
    fn default() -> Self {
        Self { shots: 1024 }
    }
}

/// Compose initializer, uniform superposition, oracle and diffusion into one
/// measured circuit over the fixed 4-qubit register.
pub fn build_grover_circuit(puzzle: &Puzzle) -> Result<Circuit, CircuitError> {
    let mut b = CircuitBuilder::with_clbits(PUZZLE_CELLS, PUZZLE_CELLS);
    b.compose(&initialize_state(puzzle)?)?;
    b.h_all();
    b.compose(&construct_oracle()?)?;
    b.compose(&diffusion_operator(PUZZLE_CELLS)?)?;
    b.measure_all();
    b.build()
}

/// Submit the composed circuit for `config.shots` trials on `backend` and
/// return the bitstring counts.
pub fn solve(
    puzzle: &Puzzle,
    backend: &impl Backend,
    config: &SolveConfig,
) -> Result<Counts, SimulationError> {
    let circuit = build_grover_circuit(puzzle)?;
    debug!(
        "puzzle {puzzle}: composed {} gates over {} qubits",
        circuit.len(),
        circuit.num_qubits()
    );

    let counts = backend.run(&circuit, config.shots)?;
    info!(
        "puzzle {puzzle}: {} shots, {} distinct bitstrings",
        config.shots,
        counts.len()
    );
    Ok(counts)
}

/// One-call entry: validate a raw cell vector and solve it on an
/// entropy-seeded statevector backend with default configuration.
pub fn solve_sudoku(cells: &[u8]) -> Result<Counts, SolveError> {
    let puzzle = Puzzle::new(cells)?;
    let backend = StatevectorBackend::new();
    Ok(solve(&puzzle, &backend, &SolveConfig::default())?)
}
