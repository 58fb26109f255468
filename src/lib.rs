//! Checks for Gaussian 16 output files and batch editing of Gaussian input
//! files

pub mod cli;
pub mod edit;
pub mod error;
pub mod files;
pub mod output;
pub mod scan;

pub use error::{Error, Result};
