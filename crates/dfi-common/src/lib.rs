//! # dfi-common
//!
//! Shared types, error definitions, display configuration, and constants
//! used across the entire kubectl-dfi workspace.
//!
//! This crate is the leaf of the dependency graph: it depends on no other
//! internal crate and provides the node/image model that the formatting
//! engine consumes and the Kubernetes adapter produces.

#![cfg_attr(test, allow(clippy::expect_used, clippy::unwrap_used))]

pub mod config;
pub mod constants;
pub mod error;
pub mod types;
