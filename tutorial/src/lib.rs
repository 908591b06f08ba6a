pub mod cli;
pub mod quad;
