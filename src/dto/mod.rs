pub mod bores;
