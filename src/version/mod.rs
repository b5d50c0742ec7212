//! Version resolution for auto-incrementing file names
//!
//! This module turns a filename pattern plus a directory listing into the
//! latest existing version and the name of the next one.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Listing   │────▶│  Resolver   │◀────│   Pattern   │
//! │ (dir names) │     │ (buckets)   │     │ (token/fmt) │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                            │
//!              ┌─────────────┴─────────────┐
//!              ▼                           ▼
//!       ┌─────────────┐             ┌─────────────┐
//!       │ Version up  │             │   Publish   │
//!       │ (next path) │             │ (copy/reuse)│
//!       └─────────────┘             └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`pattern`]: Version token derivation from placeholder and concrete names
//! - [`resolver`]: Latest/next version computation over a listing
//! - [`number`]: Finding a version token inside arbitrary strings
//! - [`listing`]: Directory listing trait and filesystem implementation
//! - [`next`]: Next versioned path and version-folder lookups
//! - [`publish`]: Versioned copies with content de-duplication
//! - [`error`]: Error types

pub mod error;
pub mod listing;
pub mod next;
pub mod number;
pub mod pattern;
pub mod publish;
pub mod resolver;
