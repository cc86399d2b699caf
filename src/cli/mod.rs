//! # CLI Module
//!
//! This module provides the command-line interface layer for the artist
//! comparison tool. It implements the user-facing command and coordinates
//! between configuration, the Spotify integration layer, the comparison
//! rules, and terminal output.
//!
//! ## Overview
//!
//! The CLI module is the interface between the user and the application's
//! functionality:
//!
//! - **Comparison Runs**: The full fetch-and-judge pipeline for two artists
//! - **Interactive Prompts**: Asks for artist names that were not passed
//!   as arguments
//! - **Report Rendering**: Formats the verdict as a table plus a per-round
//!   narration
//!
//! ## Architecture Design
//!
//! The CLI module follows a layered architecture approach:
//!
//! ```text
//! CLI Layer (User Interface)
//!     ↓
//! Comparison Layer (Scoring Rules)
//!     ↓
//! API Layer (Spotify Integration)
//!     ↓
//! Network Layer (HTTP Requests)
//! ```
//!
//! The command delegates to the spotify and compare modules while handling
//! user interaction, progress feedback, and error presentation.
//!
//! ## Error Handling Philosophy
//!
//! A comparison printed from half-fetched data would be worse than no
//! output, so the command is all-or-nothing: the first failing step prints
//! one message naming that step and terminates the process. Progress
//! spinners are cleared on every exit path so error messages never race a
//! live spinner line.
//!
//! ## Progress and User Experience
//!
//! - **Progress Indicators**: Spinners for every network step
//! - **Status Messages**: Resolved canonical names are echoed before any
//!   metric is fetched, so a surprising search match is visible early
//! - **Detailed Output**: The final report uses a table and color-free
//!   text that survives piping to a file
//!
//! ## Usage Patterns
//!
//! ```bash
//! spotvs compare "daft punk" "justice"     # Direct comparison
//! spotvs compare                           # Prompt for both names
//! spotvs compare --market SE               # Pin the top-track market
//! spotvs completions zsh                   # Shell completion script
//! ```
//!
//! ## Dependencies
//!
//! This module depends on several core application components:
//! - [`crate::spotify`] - Spotify API integration and authentication
//! - [`crate::compare`] - Head-to-head scoring rules
//! - [`crate::config`] - Configuration loading and validation
//! - [`crate::types`] - Data structures and type definitions

mod compare;

pub use compare::compare;
pub use compare::render_report;
