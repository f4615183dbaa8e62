//! Safe-mode query screening.

pub mod gate;

pub use gate::{GateDecision, QueryGate};
