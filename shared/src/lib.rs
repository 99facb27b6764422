// Shared library root
// Data models and small utilities used by the engine and by any front end
// that renders the dashboard.

pub mod models;
pub mod utils;
