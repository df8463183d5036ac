pub mod app;
pub mod cli;
pub mod logging;
pub mod report;
pub mod state;
pub mod utils;
