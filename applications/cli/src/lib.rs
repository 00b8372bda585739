//! Sonora Play terminal front end
//!
//! Library half of the `sonora` binary: configuration, module assembly,
//! the terminal presenter and the command loop.

pub mod app;
pub mod commands;
pub mod config;
pub mod presenter;
pub mod router;
