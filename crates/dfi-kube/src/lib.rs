//! # dfi-kube
//!
//! Supplies node records to the formatting engine.
//!
//! - [`source::NodeSource`]: the seam between fetching and formatting.
//! - [`client::KubeNodeSource`]: the `kube`-backed implementation.
//! - [`convert`]: API `Node` objects into the workspace data model.
//! - [`quantity`]: Kubernetes resource quantities into byte counts.

#![cfg_attr(test, allow(clippy::expect_used, clippy::unwrap_used))]

pub mod client;
pub mod convert;
pub mod error;
pub mod quantity;
pub mod source;

pub use client::{ConnectOptions, KubeNodeSource};
pub use source::{NodeSource, fetch_nodes};
