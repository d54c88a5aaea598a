//! core
//!
//! Core domain types and configuration.
//!
//! # Modules
//!
//! - [`types`] - Strong types: RepoBinding, ResetMode
//! - [`config`] - Configuration schema and loading
//!
//! # Design Principles
//!
//! - Strong typing keeps invalid option values out of argument vectors
//! - Schemas are strict and reject unknown keys

pub mod config;
pub mod types;
