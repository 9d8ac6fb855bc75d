//! # Pointer Event Module
//!
//! Distributes pointer input from a drawing surface to interested
//! subscribers.
//!
//! ## Overview
//!
//! A [`PointerHub`] is constructed by whoever owns the surface and passed
//! explicitly to the components that need input; there is no process-wide
//! instance. The owner forwards raw surface events into
//! [`PointerHub::dispatch`] while the surface is attached and simply stops
//! forwarding (or drops the hub) when it detaches.
//!
//! Subscribers register a handler with a filter and get back a
//! [`SubscriptionId`]; uniqueness is by handle, and delivery order between
//! subscribers is unspecified.
//!
//! ## Usage
//!
//! ```rust
//! use vectorkit_core::pointer::{PointerEvent, PointerFilter, PointerHub};
//!
//! let hub = PointerHub::new();
//! let sub = hub.subscribe(PointerFilter::All, |event| {
//!     println!("pointer at {}, {}", event.x, event.y);
//! });
//!
//! hub.dispatch(PointerEvent::down(12.0, 30.0));
//! hub.unsubscribe(sub);
//! ```

mod events;
mod hub;

pub use events::*;
pub use hub::*;
