//! # dfi-core
//!
//! The formatting engine behind `kubectl dfi`.
//!
//! Handles:
//! - **Units**: divisor/suffix selection and byte-count rendering.
//! - **Usage**: summing image sizes per node.
//! - **Thresholds**: percentage-used computation and band classification.
//! - **Color**: ANSI decoration for bands and image tags.
//! - **Report**: building the summary and image-listing tables.
//!
//! Everything here is a pure function over already-fetched node records.

#![cfg_attr(test, allow(clippy::expect_used, clippy::unwrap_used))]

pub mod color;
pub mod report;
pub mod threshold;
pub mod unit;
pub mod usage;
