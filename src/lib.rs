///! Najaf.org Oxford prayer times scraper
///!
///! Library surface behind the `prayer-times` binary: configuration,
///! logging, and the prayer module's fetch/extract/lookup/snapshot
///! pipeline.

pub mod cli;
pub mod config;
pub mod logging;
pub mod module;
