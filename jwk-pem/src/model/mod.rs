//! Inputs and outputs of a conversion

pub mod components;
pub mod pem;
