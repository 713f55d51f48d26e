//! Shared helpers for the staking contract suite.
//!
//! This crate provides:
//! - [`roles`]: ranked authorization roles stored per address.
//! - [`reentrancy`]: a contract-wide lock for mutating entry points.
//!
//! Helpers report failure as `bool` so each contract can map it onto its own
//! error enum.

#![no_std]

pub mod reentrancy;
pub mod roles;

pub use roles::Role;
