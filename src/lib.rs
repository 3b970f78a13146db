//! Caseforge - AI-assisted test case generation
//!
//! This crate turns feature requirements (typed text, uploaded documents,
//! or linked Google Docs) into structured software test cases, with a
//! deterministic fallback whenever the AI path is unavailable or its
//! output cannot be repaired into valid JSON.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
