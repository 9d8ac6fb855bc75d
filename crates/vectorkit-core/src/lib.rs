//! # VectorKit Core
//!
//! Shared foundation for the VectorKit workspace:
//! - **Errors**: typed error enums for shape dispatch and document lookups
//! - **Pointer events**: an explicitly constructed pointer-event hub that
//!   fans surface input out to subscribers
//!
//! The geometry and document layers live in `vectorkit-canvas`; this crate
//! holds the pieces both sides of that boundary need to agree on.

pub mod error;
pub mod pointer;

pub use error::{DocumentError, ShapeError};
pub use pointer::{PointerEvent, PointerEventKind, PointerFilter, PointerHub, SubscriptionId};
