pub mod bore;
#[cfg(feature = "server")]
pub mod config;
