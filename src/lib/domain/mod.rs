//! The higher abstractions of the program

pub mod project;
pub mod target;
