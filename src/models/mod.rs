//! Running-order domain models.
//!
//! Provides the core data types for describing performances and the
//! running orders built from them.
//!
//! # Domain Mappings
//!
//! | running-order | Theatre | Recital | Broadcast |
//! |---------------|---------|---------|-----------|
//! | Performance | Scene | Piece | Segment |
//! | Performer | Actor | Student | Presenter |
//! | Spacing | Costume change gap | Rest between pieces | Turnaround |
//! | Schedule | Running order | Programme | Rundown |

mod performance;
mod performer_set;
mod schedule;

pub use performance::{Performance, PositionConstraint};
pub use performer_set::{PerformerSet, WILDCARD};
pub use schedule::{Schedule, Warning};
