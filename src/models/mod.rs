//! Display-side models

pub mod display;
