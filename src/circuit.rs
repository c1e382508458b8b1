//! Circuit as an immutable ordered gate list over fixed registers.
//!
//! A [`Circuit`] is built once through the append-only [`CircuitBuilder`] and
//! never mutated afterwards. Sub-circuits combine via [`CircuitBuilder::compose`],
//! which fails when register sizes disagree.

use crate::error::CircuitError;
use crate::gate::{ControlList, Gate};

/// An ordered gate sequence over a fixed-size qubit register plus a classical
/// readout register.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Circuit {
    num_qubits: usize,
    num_clbits: usize,
    gates: Vec<Gate>,
}

impl Circuit {
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    pub fn num_clbits(&self) -> usize {
        self.num_clbits
    }

    pub fn gates(&self) -> &[Gate] {
        &self.gates
    }

    pub fn len(&self) -> usize {
        self.gates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }
}

/// Append-only builder. Gate methods record operations in order; `build`
/// validates every index against the registers so a `Circuit` in hand is
/// always well-formed.
#[derive(Debug, Clone)]
pub struct CircuitBuilder {
    num_qubits: usize,
    num_clbits: usize,
    gates: Vec<Gate>,
}

impl CircuitBuilder {
    /// Builder over `num_qubits` qubits and no classical readout register.
    pub fn new(num_qubits: usize) -> Self {
        Self::with_clbits(num_qubits, 0)
    }

    /// Builder over `num_qubits` qubits and `num_clbits` classical bits.
    pub fn with_clbits(num_qubits: usize, num_clbits: usize) -> Self {
        Self {
            num_qubits,
            num_clbits,
            gates: Vec::new(),
        }
    }

    pub fn x(&mut self, qubit: usize) -> &mut Self {
        self.gates.push(Gate::X(qubit));
        self
    }

    pub fn h(&mut self, qubit: usize) -> &mut Self {
        self.gates.push(Gate::H(qubit));
        self
    }

    /// X on every qubit of the register.
    pub fn x_all(&mut self) -> &mut Self {
        for q in 0..self.num_qubits {
            self.x(q);
        }
        self
    }

    /// Hadamard on every qubit of the register.
    pub fn h_all(&mut self) -> &mut Self {
        for q in 0..self.num_qubits {
            self.h(q);
        }
        self
    }

    pub fn cz(&mut self, a: usize, b: usize) -> &mut Self {
        self.gates.push(Gate::CZ(a, b));
        self
    }

    pub fn mcx(&mut self, controls: &[usize], target: usize) -> &mut Self {
        self.gates.push(Gate::MCX {
            controls: ControlList::from_slice(controls),
            target,
        });
        self
    }

    pub fn measure(&mut self, qubit: usize, clbit: usize) -> &mut Self {
        self.gates.push(Gate::Measure { qubit, clbit });
        self
    }

    /// Measure qubit `i` into classical bit `i` for the whole register.
    pub fn measure_all(&mut self) -> &mut Self {
        for q in 0..self.num_qubits {
            self.measure(q, q);
        }
        self
    }

    /// Append every gate of `other`, in order. The qubit registers must match.
    pub fn compose(&mut self, other: &Circuit) -> Result<&mut Self, CircuitError> {
        if other.num_qubits() != self.num_qubits {
            return Err(CircuitError::RegisterMismatch {
                target: self.num_qubits,
                other: other.num_qubits(),
            });
        }
        self.gates.extend_from_slice(other.gates());
        Ok(self)
    }

    /// Finish the circuit, validating every recorded gate index.
    pub fn build(self) -> Result<Circuit, CircuitError> {
        if self.num_qubits == 0 {
            return Err(CircuitError::EmptyRegister);
        }
        for gate in &self.gates {
            let qubit = gate.max_qubit();
            if qubit >= self.num_qubits {
                return Err(CircuitError::QubitOutOfRange {
                    qubit,
                    num_qubits: self.num_qubits,
                });
            }
            if let Gate::Measure { clbit, .. } = gate {
                if *clbit >= self.num_clbits {
                    return Err(CircuitError::ClbitOutOfRange {
                        clbit: *clbit,
                        num_clbits: self.num_clbits,
                    });
                }
            }
        }
        Ok(Circuit {
            num_qubits: self.num_qubits,
            num_clbits: self.num_clbits,
            gates: self.gates,
        })
    }
}
