//! Command implementations for bochka-cmd

pub mod demo;
pub mod eval;
pub mod growth;
