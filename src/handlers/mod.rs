//! HTTP handlers for the console and game endpoints.

pub mod common;
pub mod consoles;
pub mod games;
