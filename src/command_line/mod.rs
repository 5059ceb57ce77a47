//! Command-line plumbing for the solver binary.

pub mod cli;
