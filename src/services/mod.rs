//! Service layer: the date propagation engine and the pure business logic
//! built around it. Everything here is synchronous and free of storage or
//! transport concerns; the `db` and `http` layers call into these functions.

pub mod demand;
pub mod draft;
pub mod propagation;
pub mod range_policy;

pub use demand::{regenerate, DemandMap, PhaseDemands};
pub use draft::{apply_edit, DraftUpdate};
pub use propagation::{propagate, propagate_raw};
pub use range_policy::{check_ranges, MAX_PHASE_SPAN_DAYS};
