//! Color grading for Lottie animation documents.
//!
//! A document is decoded into a [`serde_json::Value`], every color field reachable through the
//! recognized encodings is rewritten by the [`GradeConfig`] transform, and the tree is written
//! back with its key order intact:
//!
//! - Load a document with [`document::read_path`]
//! - Grade it in place with [`grade_document`]
//! - Persist it with [`document::write_path`]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Grading configuration record.
pub mod config;
/// JSON document reading and writing.
pub mod document;
/// Color math and color-field traversal.
pub mod grade;

pub use crate::config::GradeConfig;
pub use crate::document::Layout;
pub use crate::foundation::error::{LottieGradeError, LottieGradeResult};
pub use crate::grade::adjust::{adjust, adjust_rgb};
pub use crate::grade::locate::{GradeStats, grade_document, grade_document_par, grade_value};
