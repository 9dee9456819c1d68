pub mod bore;
pub mod types;
