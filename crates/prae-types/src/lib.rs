//! Foundation types for Prae.
//!
//! This crate contains the small platform-agnostic types shared by the
//! interpreter core and its front ends: link records, key events, and
//! error types.

pub mod error;
pub mod input;
pub mod link;
