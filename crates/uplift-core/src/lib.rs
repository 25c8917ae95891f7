//! Core runtime for Uplift: metric records, the combination algebra over
//! them, and the canonical JSON interchange codec.

// public exports are one module level down
pub mod codec;
pub mod combine;
pub mod grouped;
pub mod metrics;
pub mod subgroups;

// test
#[cfg(test)]
pub(crate) mod test_fixtures;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// Codec helpers and errors stay behind the `codec` module.
///

pub mod prelude {
    pub use crate::{
        combine::Combine,
        grouped::{GroupedLiftMetrics, GroupedMetrics},
        metrics::LiftMetrics,
        subgroups::Subgroups,
    };
}
