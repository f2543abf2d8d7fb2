pub mod hbridge;
