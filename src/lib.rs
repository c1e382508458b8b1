//! # sudoku-grover-sim
//!
//! A 2×2 Sudoku puzzle encoded on a 4-qubit register, with one iteration of
//! Grover amplitude amplification biasing measurement toward fillings where
//! paired cells differ.
//!
//! The pipeline is a single linear pass: flip pre-filled cells into place,
//! spread the register into uniform superposition, phase-mark constraint
//! states with the oracle, invert about the mean with the diffusion operator,
//! then measure all four qubits over repeated shots and tally the bitstrings.
//!
//! ## Usage
//!
//! ```
//! use sudoku_grover_sim::prelude::*;
//!
//! let puzzle = Puzzle::new(&[1, 0, 0, 0])?;
//! let backend = StatevectorBackend::with_seed(7);
//! let counts = solve(&puzzle, &backend, &SolveConfig::default())?;
//! assert_eq!(counts.values().sum::<u64>(), 1024);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod gate;
pub mod circuit;
pub mod puzzle;
pub mod grover;
pub mod state;
pub mod backend;
pub mod histogram;
pub mod solver;
pub mod error;


pub mod prelude {
    pub use crate::backend::{Backend, Counts, StatevectorBackend};
    pub use crate::circuit::{Circuit, CircuitBuilder};
    pub use crate::error::{CircuitError, InvalidPuzzleError, SimulationError, SolveError};
    pub use crate::gate::Gate;
    pub use crate::grover::{construct_oracle, diffusion_operator, initialize_state};
    pub use crate::histogram;
    pub use crate::puzzle::{Puzzle, PUZZLE_CELLS};
    pub use crate::solver::{build_grover_circuit, solve, solve_sudoku, SolveConfig};
    pub use crate::state::StateVector;
}
