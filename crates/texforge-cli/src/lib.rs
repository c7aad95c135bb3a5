//! texforge CLI library.
//!
//! Spec loading, inline fill controls, the host capability interface, and
//! the command implementations behind the `texforge` binary.

pub mod commands;
pub mod controls;
pub mod host;
pub mod input;
pub mod terminal;
