//! Error handling for VectorKit
//!
//! Geometry operations themselves never fail for finite input: degenerate
//! shapes yield degenerate results instead of errors. The enums here cover
//! the two places a hard failure can still surface:
//! - Shape-kind dispatch on data that arrived as an untyped tag
//! - Document lookups by id
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Shape dispatch error type
///
/// Represents failures in mapping a kind tag to a shape system. An
/// unrecognized tag means a new kind was added to the data model without a
/// matching system (or external data is corrupt); it is an integration bug
/// class, not a recoverable runtime condition.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    /// No shape system registered for this kind tag
    #[error("Unknown shape kind: {tag}")]
    UnknownShapeKind {
        /// The unrecognized kind tag.
        tag: String,
    },
}

/// Document error type
///
/// Represents errors raised by the workspace document store.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DocumentError {
    /// No drawing object with the given id exists
    #[error("Shape {id} not found in document")]
    ShapeNotFound {
        /// The id that missed.
        id: u64,
    },
}
