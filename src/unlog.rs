//! Main module for unlog library functionality

pub mod config;
pub mod counting;
pub mod error;
pub mod pipeline;
pub mod report;
pub mod scanning;
