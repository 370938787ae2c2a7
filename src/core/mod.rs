// src/core/mod.rs
pub mod alphabet;
pub mod collate;
pub mod types;
