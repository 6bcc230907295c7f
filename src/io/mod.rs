//! Everything that moves matrices in and out of the process.

pub mod atomic;
pub mod input;
pub mod report;
