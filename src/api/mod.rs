//! API Module - Boundary for the Presentation Layer

pub mod commands;
