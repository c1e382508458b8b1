//! Error types for the solve pipeline.
//!
//! Two kinds matter to callers: a malformed puzzle vector is rejected before
//! any circuit construction, and a backend execution failure propagates
//! unmodified out of the single run. Neither is retried.

use thiserror::Error;

/// Rejection of a malformed puzzle vector.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidPuzzleError {
    #[error("puzzle must have exactly 4 cells, got {0}")]
    WrongLength(usize),
    #[error("cell {index} is {value}, cells must be 0 or 1")]
    NonBinaryCell { index: usize, value: u8 },
    #[error("cell {index} is '{cell}', cells must be '0' or '1'")]
    UnparsableCell { index: usize, cell: char },
}

/// Structural circuit failures: bad register indices or mismatched composition.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CircuitError {
    #[error("gate references qubit {qubit} outside a register of {num_qubits}")]
    QubitOutOfRange { qubit: usize, num_qubits: usize },
    #[error("measurement targets classical bit {clbit} outside a register of {num_clbits}")]
    ClbitOutOfRange { clbit: usize, num_clbits: usize },
    #[error("cannot compose a {other}-qubit circuit into a {target}-qubit circuit")]
    RegisterMismatch { target: usize, other: usize },
    #[error("circuit requires at least one qubit")]
    EmptyRegister,
}

/// Backend execution failure.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SimulationError {
    #[error(transparent)]
    Circuit(#[from] CircuitError),
    #[error("statevector norm drifted to {norm} after gate {gate_index}")]
    NormDrift { gate_index: usize, norm: f64 },
}

/// Union error for the one-call driver and the CLI.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SolveError {
    #[error(transparent)]
    Puzzle(#[from] InvalidPuzzleError),
    #[error(transparent)]
    Circuit(#[from] CircuitError),
    #[error(transparent)]
    Simulation(#[from] SimulationError),
}
