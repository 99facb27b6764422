// Engine library root
// This file declares the modules for the engine crate.

pub mod config;
pub mod data;
pub mod error;
pub mod schema;
pub mod services;
