//! Route table and path matching for Revu.
//!
//! This crate provides:
//! - [`Pattern`]: a compiled path pattern made of literal and `:name`
//!   parameter segments
//! - [`RouteTable`]: an ordered, immutable set of routes resolved with
//!   first-match-wins semantics
//!
//! # Quick Start
//!
//! ```
//! use revu_routes::{RouteTable, View};
//!
//! let table = RouteTable::site_default();
//!
//! let m = table.resolve("/review/abc123").unwrap();
//! assert_eq!(m.route.view(), View::ReviewDetails);
//! assert_eq!(m.params.get("id"), Some("abc123"));
//!
//! assert!(table.resolve("/no-such-page").is_none());
//! ```
//!
//! Matching is deliberately plain: segments are compared one by one, with no
//! regex involved, so resolution is O(routes × segments) and needs no
//! framework to be testable.

mod pattern;
mod table;

pub use pattern::{Params, Pattern, PatternError, Segment};
pub use table::{Route, RouteMatch, RouteTable, RouteTableError, View};
