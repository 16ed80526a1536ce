//! Test module for quicktip-core
//!
//! This module contains scenario tests for:
//! - Calculator properties (fixed and custom tips, rounding, idempotence)
//! - Tip form editing, segment switching and keystroke rejection
//! - Configuration loading feeding the form

mod fixtures;
mod form_tests;
