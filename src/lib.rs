pub mod alert;
pub mod cli;
pub mod config;
pub mod logging;
pub mod shutdown;
pub mod ticker;
pub mod ui;
