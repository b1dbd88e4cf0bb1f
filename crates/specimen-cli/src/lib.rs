//! Library components for the specimen tracker command line.

pub mod input;
pub mod logging;
pub mod render;
