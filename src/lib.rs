//! Single-Lane Traffic Simulation Library
//!
//! A Nagel–Schreckenberg cellular-automaton traffic simulation that can
//! run headless from the bundled CLI or be embedded as a library.

pub mod simulation;
