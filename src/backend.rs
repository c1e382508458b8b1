//! Backend boundary: the typed simulation contract and the default
//! statevector backend behind it.
//!
//! The solver only sees the [`Backend`] trait: a circuit description and a
//! shot count go in, a bitstring frequency table comes out. The shipped
//! implementation evolves a dense statevector through the circuit's unitary
//! prefix once, then samples the terminal distribution per shot through the
//! measurement wiring.

use std::collections::HashMap;

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::circuit::Circuit;
use crate::error::SimulationError;
use crate::gate::Gate;
use crate::state::StateVector;

/// Frequency table of measured bitstrings over all shots in a run.
/// Keys put classical bit 0 rightmost.
pub type Counts = HashMap<String, u64>;

/// The simulation boundary.
pub trait Backend {
    fn run(&self, circuit: &Circuit, shots: u32) -> Result<Counts, SimulationError>;
}

/// Dense statevector simulator.
#[derive(Debug, Clone, Default)]
pub struct StatevectorBackend {
    seed: Option<u64>,
}

impl StatevectorBackend {
    /// Backend seeded from OS entropy on each run.
    pub fn new() -> Self {
        Self { seed: None }
    }

    /// Fixed-seed backend for reproducible histograms.
    pub fn with_seed(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }

    fn evolve(&self, circuit: &Circuit) -> Result<StateVector, SimulationError> {
        let mut state = StateVector::new(circuit.num_qubits());
        for (gate_index, gate) in circuit.gates().iter().enumerate() {
            state.apply(gate);
            if !state.is_normalized() {
                return Err(SimulationError::NormDrift {
                    gate_index,
                    norm: state.norm(),
                });
            }
        }
        Ok(state)
    }
}

impl Backend for StatevectorBackend {
    fn run(&self, circuit: &Circuit, shots: u32) -> Result<Counts, SimulationError> {
        if shots == 0 {
            return Ok(Counts::new());
        }

        let state = self.evolve(circuit)?;
        let (wires, width) = readout_wiring(circuit);

        let base_seed = self.seed.unwrap_or_else(|| rand::thread_rng().gen());
        debug!(
            "sampling {shots} shots over {} basis states",
            state.amplitudes().len()
        );

        let mut counts = Counts::new();
        for basis in sample_shots(&state, shots, base_seed) {
            *counts.entry(bitstring(basis, &wires, width)).or_insert(0) += 1;
        }
        Ok(counts)
    }
}

/// Qubit-to-classical-bit wiring and bitstring width for a run.
///
/// Explicit `Measure` gates read into the classical register, whose bits were
/// validated at build time. A circuit without any measurements reads every
/// qubit into a matching implicit bit instead, sized by the qubit register —
/// the classical register plays no part in that case, whatever its size.
fn readout_wiring(circuit: &Circuit) -> (Vec<(usize, usize)>, usize) {
    let wires: Vec<(usize, usize)> = circuit
        .gates()
        .iter()
        .filter_map(|gate| match gate {
            Gate::Measure { qubit, clbit } => Some((*qubit, *clbit)),
            _ => None,
        })
        .collect();
    if wires.is_empty() {
        let width = circuit.num_qubits();
        ((0..width).map(|q| (q, q)).collect(), width)
    } else {
        (wires, circuit.num_clbits())
    }
}

/// Render one sampled basis state through the measurement wiring, classical
/// bit 0 rightmost.
fn bitstring(basis: usize, wires: &[(usize, usize)], width: usize) -> String {
    let mut bits = vec!['0'; width];
    for &(qubit, clbit) in wires {
        if (basis >> qubit) & 1 == 1 {
            bits[width - 1 - clbit] = '1';
        }
    }
    bits.into_iter().collect()
}

// Shots are drawn in fixed-size chunks, each chunk's generator seeded from the
// base seed and the chunk index, so a seeded run reproduces the same histogram
// whether or not the chunks execute in parallel.
const SHOT_CHUNK: u32 = 256;

/// Size of the chunk starting at `start`. Subtracting first keeps the
/// arithmetic in range for shot counts near `u32::MAX`.
fn chunk_len(shots: u32, start: u32) -> u32 {
    (shots - start).min(SHOT_CHUNK)
}

fn chunk_seeds(shots: u32, base_seed: u64) -> Vec<(u64, u32)> {
    (0..shots)
        .step_by(SHOT_CHUNK as usize)
        .enumerate()
        .map(|(chunk_index, start)| {
            (base_seed.wrapping_add(chunk_index as u64), chunk_len(shots, start))
        })
        .collect()
}

fn sample_chunk(state: &StateVector, seed: u64, count: u32) -> Vec<usize> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut out = Vec::with_capacity(count as usize);
    for _ in 0..count {
        out.push(state.sample(&mut rng));
    }
    out
}

#[cfg(feature = "parallel")]
fn sample_shots(state: &StateVector, shots: u32, base_seed: u64) -> Vec<usize> {
    chunk_seeds(shots, base_seed)
        .into_par_iter()
        .flat_map_iter(|(seed, count)| sample_chunk(state, seed, count))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn sample_shots(state: &StateVector, shots: u32, base_seed: u64) -> Vec<usize> {
    chunk_seeds(shots, base_seed)
        .into_iter()
        .flat_map(|(seed, count)| sample_chunk(state, seed, count))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circuit::CircuitBuilder;

    fn bell_circuit() -> Circuit {
        // H then CZ-free entangler via MCX with one control.
        let mut b = CircuitBuilder::with_clbits(2, 2);
        b.h(0);
        b.mcx(&[0], 1);
        b.measure_all();
        b.build().unwrap()
    }

    #[test]
    fn test_zero_shots_is_empty_without_error() {
        let backend = StatevectorBackend::new();
        let counts = backend.run(&bell_circuit(), 0).unwrap();
        assert!(counts.is_empty());
    }

    #[test]
    fn test_counts_sum_to_shots() {
        let backend = StatevectorBackend::with_seed(3);
        let counts = backend.run(&bell_circuit(), 1000).unwrap();
        assert_eq!(counts.values().sum::<u64>(), 1000);
    }

    #[test]
    fn test_bell_correlations() {
        let backend = StatevectorBackend::with_seed(5);
        let counts = backend.run(&bell_circuit(), 2048).unwrap();
        // Only the correlated outcomes appear.
        assert!(counts.keys().all(|k| k == "00" || k == "11"), "{counts:?}");
        // Both should show up in 2048 shots of a 50/50 split.
        assert!(counts.len() == 2);
    }

    #[test]
    fn test_seeded_runs_reproduce() {
        let circuit = bell_circuit();
        let a = StatevectorBackend::with_seed(42).run(&circuit, 777).unwrap();
        let b = StatevectorBackend::with_seed(42).run(&circuit, 777).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_multi_chunk_sampling_covers_all_shots() {
        // More shots than one chunk.
        let shots = SHOT_CHUNK * 3 + 17;
        let backend = StatevectorBackend::with_seed(9);
        let counts = backend.run(&bell_circuit(), shots).unwrap();
        assert_eq!(counts.values().sum::<u64>(), shots as u64);
    }

    #[test]
    fn test_implicit_measurement_when_circuit_has_none() {
        let mut b = CircuitBuilder::new(3);
        b.x(1);
        let circuit = b.build().unwrap();

        let backend = StatevectorBackend::with_seed(1);
        let counts = backend.run(&circuit, 16).unwrap();
        assert_eq!(counts.len(), 1);
        assert_eq!(counts.get("010"), Some(&16));
    }

    #[test]
    fn test_implicit_measurement_ignores_narrow_clbit_register() {
        // Fewer classical bits than qubits and no Measure gates: the implicit
        // readout is sized by the qubit register, not the classical one.
        let mut b = CircuitBuilder::with_clbits(3, 1);
        b.x(2);
        let circuit = b.build().unwrap();

        let backend = StatevectorBackend::with_seed(4);
        let counts = backend.run(&circuit, 4).unwrap();
        assert_eq!(counts.get("100"), Some(&4));
    }

    #[test]
    fn test_chunk_len_at_the_shot_count_ceiling() {
        assert_eq!(chunk_len(512, 256), 256);
        assert_eq!(chunk_len(1000, 768), 232);
        // Near u32::MAX the old `start + SHOT_CHUNK` form would overflow.
        assert_eq!(chunk_len(u32::MAX, u32::MAX - 100), 100);
        assert_eq!(chunk_len(u32::MAX, u32::MAX - SHOT_CHUNK), SHOT_CHUNK);
    }

    #[test]
    fn test_chunk_seeds_cover_every_shot() {
        let chunks = chunk_seeds(SHOT_CHUNK * 2 + 31, 10);
        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks.iter().map(|&(_, count)| count).sum::<u32>(), SHOT_CHUNK * 2 + 31);
        assert_eq!(chunks[0].0, 10);
        assert_eq!(chunks[2].0, 12);
    }

    #[test]
    fn test_bitstring_puts_clbit_zero_rightmost() {
        let wires = vec![(0, 0), (1, 1), (2, 2), (3, 3)];
        assert_eq!(bitstring(0b0001, &wires, 4), "0001");
        assert_eq!(bitstring(0b1000, &wires, 4), "1000");
        assert_eq!(bitstring(0b0110, &wires, 4), "0110");
    }
}
