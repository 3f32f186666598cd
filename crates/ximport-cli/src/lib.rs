//! CLI library components for the ximport field mapper.

pub mod commands;
pub mod logging;
pub mod output;
