//! Cash Flow Timeline - present value of discrete cash flows with a perpetuity tail
//!
//! This library provides:
//! - Cash flow nodes (signed amount at a time period) and growing perpetuities
//! - A timeline that keeps flows in time order and revalues on every change
//! - Checked discounting: non-converging perpetuities and invalid rates are errors
//! - A plain-text timeline rendering
//!
//! A `Timeline` is not synchronized; share one across threads only behind
//! the caller's own lock.

pub mod error;
pub mod node;
pub mod timeline;

// Re-export commonly used types
pub use error::{TimelineError, TimelineResult};
pub use node::{CashFlowNode, Node, PerpetuityNode};
pub use timeline::{DiscountRate, Timeline, TimelineConfig};
