pub mod config;
pub mod error;
pub mod glutils;
pub mod logging;
pub mod math;
pub mod shaders;
pub mod system;
