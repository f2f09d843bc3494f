//! Shared, target-independent pieces of the journalist dashboard.
//!
//! Everything in here compiles natively so it can be unit tested with
//! `cargo test`; the Yew frontend only wires browser events into it.

pub mod config;
pub mod form;
pub mod model;
pub mod requests;
