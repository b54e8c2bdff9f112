//! Core types and definitions for the AIMASSIST subsystem.
//!
//! This crate defines the vocabulary shared across all other crates:
//! candidate types, cone configuration, components, diagnostics events,
//! constants, and the oracle traits the host game implements.
//! It has no dependency on any engine or runtime framework.

pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod events;
pub mod oracles;
pub mod types;

pub use glam::Vec3;

#[cfg(test)]
mod tests;
