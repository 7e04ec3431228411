//! Declension Fixer Library
//!
//! Core modules for rewriting a sentence so its declension agrees with a
//! selected key word.

pub mod commands;
pub mod completion;
pub mod config;
pub mod core;
pub mod editor;
pub mod error;
pub mod notify;
