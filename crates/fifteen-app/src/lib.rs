//! Terminal front end for the sliding-tile puzzle.
#![allow(missing_docs, clippy::missing_errors_doc, clippy::missing_panics_doc)]

pub mod app;
pub mod cli;
pub mod command;
pub mod error;
pub mod render;
