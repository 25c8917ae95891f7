//! ## Crate layout
//! - `core`: metric records, the combination algebra over them, and the
//!   canonical JSON interchange codec.
//!
//! The `prelude` module mirrors the surface pipeline code uses when merging
//! measurement contributions.

pub use uplift_core as core;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use core::{
    codec,
    combine::{self, Combine, reconstruct_shares, sum_partials},
    grouped::{GroupedLiftMetrics, GroupedMetrics},
    metrics::LiftMetrics,
    subgroups::Subgroups,
};

///
/// Prelude
///
/// Everything a merge pipeline touches: the container types, the concrete
/// lift record, the combination seam, and the serde derives needed to make
/// a custom record combinable on the wire.
///

pub mod prelude {
    pub use crate::core::{
        combine::{Combine, reconstruct_shares, sum_partials},
        grouped::{GroupedLiftMetrics, GroupedMetrics},
        metrics::LiftMetrics,
        subgroups::Subgroups,
    };
    pub use serde::{Deserialize, Serialize};
}
