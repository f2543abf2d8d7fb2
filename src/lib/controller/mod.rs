pub mod freezy;
pub mod motor;
pub mod teleop;
pub mod tuning;
