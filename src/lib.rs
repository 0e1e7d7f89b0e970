//! Address enrichment library - shared modules for the CLI and tests.

pub mod codes;
pub mod error;
pub mod geocode;
pub mod metro;
pub mod models;
pub mod normalize;
pub mod pipeline;
pub mod progress;
pub mod reconcile;
pub mod safety;
pub mod sources;
pub mod tables;
pub mod zipdb;
