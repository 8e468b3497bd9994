pub mod cli;
pub mod constants;
pub mod logging;
pub mod server;
pub mod strategy;
pub mod updates;
