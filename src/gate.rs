//! Typed gate records.
//!
//! The circuit is data: an ordered list of these records, never implicit
//! mutable quantum state. Basis conventions live in [`crate::state`]; this
//! module only names the operations.

use smallvec::SmallVec;

/// Control list for multi-controlled gates. The register holds four qubits,
/// so controls never spill to the heap.
pub type ControlList = SmallVec<[usize; 4]>;

/// One gate operation over the qubit register.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Gate {
    /// Bit flip (Pauli-X) on one qubit.
    X(usize),
    /// Hadamard on one qubit.
    H(usize),
    /// Controlled phase flip between a pair of qubits; symmetric in its
    /// arguments. Inverts the amplitude sign where both qubits are |1⟩.
    CZ(usize, usize),
    /// Multi-controlled X: flips `target` when every control is |1⟩.
    /// An empty control list degenerates to a plain X.
    MCX { controls: ControlList, target: usize },
    /// Read one qubit into one classical bit.
    Measure { qubit: usize, clbit: usize },
}

impl Gate {
    /// Whether this gate transforms amplitudes (false only for `Measure`).
    pub fn is_unitary(&self) -> bool {
        !matches!(self, Gate::Measure { .. })
    }

    /// Largest qubit index this gate touches.
    pub fn max_qubit(&self) -> usize {
        match self {
            Gate::X(q) | Gate::H(q) => *q,
            Gate::CZ(a, b) => (*a).max(*b),
            Gate::MCX { controls, target } => {
                controls.iter().copied().fold(*target, usize::max)
            }
            Gate::Measure { qubit, .. } => *qubit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    #[test]
    fn test_measure_is_not_unitary() {
        assert!(Gate::X(0).is_unitary());
        assert!(Gate::H(2).is_unitary());
        assert!(Gate::CZ(0, 1).is_unitary());
        assert!(!Gate::Measure { qubit: 0, clbit: 0 }.is_unitary());
    }

    #[test]
    fn test_max_qubit() {
        assert_eq!(Gate::X(3).max_qubit(), 3);
        assert_eq!(Gate::CZ(2, 1).max_qubit(), 2);
        let mcx = Gate::MCX {
            controls: smallvec![0, 1, 2],
            target: 3,
        };
        assert_eq!(mcx.max_qubit(), 3);
        let mcx_high_control = Gate::MCX {
            controls: smallvec![5],
            target: 1,
        };
        assert_eq!(mcx_high_control.max_qubit(), 5);
    }
}
