pub use crate::errors::HarnessError;

pub mod cli;
pub mod driver;
pub mod errors;
pub mod exec;
pub mod pipeline;
pub mod suite;
pub mod toolchain;
