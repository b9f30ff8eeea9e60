//! Rule-based analysis of free-form musical performance descriptions.
//!
//! The core of the crate is [`engine::analyze`]: a pure, total function that
//! turns raw text into a multi-section report. [`theory`] holds the fixed
//! music-theory tables and classifiers, [`delegate`] the optional remote
//! analysis chain, and [`server`] the HTTP transport around it all.

pub mod delegate;
pub mod engine;
pub mod server;
pub mod theory;
