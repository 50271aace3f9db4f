mod config;
mod error;
mod game;
mod report;
mod strategy;
pub use config::*;
pub use error::*;
pub use game::*;
pub use report::*;
pub use strategy::*;
