//! Grover building blocks: state initializer, constraint oracle, diffusion.
//!
//! The oracle is the one piece of domain-specific logic; the initializer and
//! the diffusion operator are generic in the puzzle and the register width.

use crate::circuit::{Circuit, CircuitBuilder};
use crate::error::CircuitError;
use crate::puzzle::{Puzzle, PUZZLE_CELLS};

/// Flip every pre-filled cell's qubit out of the ground state.
///
/// Cells left at 0 stay in |0⟩ and are driven into superposition later by the
/// solve driver's Hadamard layer.
pub fn initialize_state(puzzle: &Puzzle) -> Result<Circuit, CircuitError> {
    let mut b = CircuitBuilder::new(PUZZLE_CELLS);
    for index in puzzle.filled_indices() {
        b.x(index);
    }
    b.build()
}

/// The 2×2 constraint oracle: cells 0/1 and cells 2/3 must hold different
/// values.
///
/// A CZ between a pair inverts the amplitude sign of any basis state where
/// both members are |1⟩, phase-marking the pair-equality states. The pairing
/// is a fixed artifact of the 2×2 grid; nothing here generalizes to larger
/// constraint sets.
pub fn construct_oracle() -> Result<Circuit, CircuitError> {
    let mut b = CircuitBuilder::new(PUZZLE_CELLS);
    b.cz(0, 1).cz(2, 3);
    b.build()
}

/// Standard Grover diffusion operator (inversion about the mean) over
/// `num_qubits` qubits.
///
/// H on all qubits, X on all qubits, then a multi-controlled Z built as
/// H · MCX · H on the last qubit with all others as controls, then the X and
/// H layers undone. Pure function of `num_qubits`: equal widths yield equal
/// circuits, always `4n + 3` gates.
pub fn diffusion_operator(num_qubits: usize) -> Result<Circuit, CircuitError> {
    if num_qubits == 0 {
        return Err(CircuitError::EmptyRegister);
    }
    let target = num_qubits - 1;
    let controls: Vec<usize> = (0..target).collect();

    let mut b = CircuitBuilder::new(num_qubits);
    b.h_all().x_all();
    b.h(target);
    b.mcx(&controls, target);
    b.h(target);
    b.x_all().h_all();
    b.build()
}
