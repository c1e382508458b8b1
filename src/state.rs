//! Dense statevector with per-gate kernels.
//!
//! Basis convention: amplitude index bit `q` holds the state of qubit `q`,
//! qubit 0 in the least significant bit. Four qubits means sixteen
//! amplitudes, so every kernel is a plain sweep over the vector.

use std::f64::consts::FRAC_1_SQRT_2;

use num_complex::Complex64;
use num_traits::{One, Zero};
use rand::Rng;

use crate::gate::Gate;

/// Tolerance for the normalization check after gate application.
pub const NORM_TOLERANCE: f64 = 1e-9;

/// State of `num_qubits` qubits as 2^n complex amplitudes, starting in the
/// all-zeros ground state.
#[derive(Debug, Clone)]
pub struct StateVector {
    num_qubits: usize,
    amps: Vec<Complex64>,
}

impl StateVector {
    pub fn new(num_qubits: usize) -> Self {
        let mut amps = vec![Complex64::zero(); 1 << num_qubits];
        amps[0] = Complex64::one();
        Self { num_qubits, amps }
    }

    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    pub fn amplitudes(&self) -> &[Complex64] {
        &self.amps
    }

    /// Apply one unitary gate in place. `Measure` records are skipped here;
    /// readout happens by sampling the terminal distribution.
    pub fn apply(&mut self, gate: &Gate) {
        match gate {
            Gate::X(q) => self.apply_x(*q),
            Gate::H(q) => self.apply_h(*q),
            Gate::CZ(a, b) => self.apply_cz(*a, *b),
            Gate::MCX { controls, target } => self.apply_mcx(controls, *target),
            Gate::Measure { .. } => {}
        }
    }

    fn apply_x(&mut self, qubit: usize) {
        let mask = 1usize << qubit;
        for i in 0..self.amps.len() {
            if i & mask == 0 {
                self.amps.swap(i, i | mask);
            }
        }
    }

    fn apply_h(&mut self, qubit: usize) {
        let mask = 1usize << qubit;
        for i in 0..self.amps.len() {
            if i & mask == 0 {
                let low = self.amps[i];
                let high = self.amps[i | mask];
                self.amps[i] = (low + high) * FRAC_1_SQRT_2;
                self.amps[i | mask] = (low - high) * FRAC_1_SQRT_2;
            }
        }
    }

    fn apply_cz(&mut self, a: usize, b: usize) {
        let mask = (1usize << a) | (1usize << b);
        for i in 0..self.amps.len() {
            if i & mask == mask {
                self.amps[i] = -self.amps[i];
            }
        }
    }

    fn apply_mcx(&mut self, controls: &[usize], target: usize) {
        let control_mask = controls.iter().fold(0usize, |m, &c| m | (1 << c));
        let target_mask = 1usize << target;
        for i in 0..self.amps.len() {
            if i & control_mask == control_mask && i & target_mask == 0 {
                self.amps.swap(i, i | target_mask);
            }
        }
    }

    /// Measurement probability of each basis state.
    pub fn probabilities(&self) -> Vec<f64> {
        self.amps.iter().map(|a| a.norm_sqr()).collect()
    }

    pub fn norm(&self) -> f64 {
        self.amps.iter().map(|a| a.norm_sqr()).sum::<f64>().sqrt()
    }

    pub fn is_normalized(&self) -> bool {
        (self.norm() - 1.0).abs() < NORM_TOLERANCE
    }

    /// Sample one basis state from the measurement distribution.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        let draw: f64 = rng.gen();
        let mut cumulative = 0.0;
        for (i, amp) in self.amps.iter().enumerate() {
            cumulative += amp.norm_sqr();
            if draw < cumulative {
                return i;
            }
        }
        // Rounding can leave the cumulative sum a hair under 1.0.
        self.amps.len() - 1
    }
}
