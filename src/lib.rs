//! Casefile - slugs and date-stamped file names
//!
//! Casefile is a small library for composing predictable names: a kebab-case
//! slug converter and a file name generator that stamps today's date onto a
//! subject, with an optional uppercased classification prefix.
//!
//! # Modules
//!
//! - [`slug`] - Convert arbitrary text to a kebab-case slug
//! - [`filename`] - Compose `[CLASSIFICATION_]subject_YYYYMMDD.ext` names
//!
//! # Guarantees
//!
//! Both helpers hold to the following:
//!
//! 1. Total functions: every string input produces a string output, never
//!    an error or a panic
//! 2. No shared or mutable state; safe to call from any thread
//! 3. The only impure input is one system-clock date read per
//!    [`filename::generate_filename`] call, and
//!    [`filename::generate_filename_on`] removes even that

pub mod filename;
pub mod slug;
