//! # Screens

pub mod mint;
