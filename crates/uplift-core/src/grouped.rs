use crate::{
    codec::{self, CodecError},
    combine::Combine,
    metrics::LiftMetrics,
    subgroups::Subgroups,
};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

///
/// GroupedMetrics
///
/// Two-level combinable container: one summary record over the whole
/// population plus an ordered list of per-segment breakdowns. A single
/// instance is one party's (or one data partition's) contribution; merging
/// contributions is plain value combination, with storage and transport
/// left to the caller.
///
/// Combination is structural. Summaries combine with summaries and
/// subgroup slot `i` combines with subgroup slot `i`, so whatever laws the
/// atomic operations satisfy lift unchanged to the container: wrapping
/// addition and XOR stay commutative and associative here, and merges may
/// run in any order, in parallel, or as a reduction tree. Operands must
/// carry the same number of subgroups; see [`Subgroups`].
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct GroupedMetrics<M> {
    /// Summary record over the full population.
    pub metrics: M,
    /// Ordered per-segment breakdowns, combined slot-for-slot.
    #[serde(rename = "subGroupMetrics")]
    pub subgroup_metrics: Subgroups<M>,
}

///
/// GroupedLiftMetrics
///
/// The lift pipeline's concrete instantiation.
///

pub type GroupedLiftMetrics = GroupedMetrics<LiftMetrics>;

impl<M> GroupedMetrics<M> {
    /// Assemble a grouped record from its summary and its breakdowns.
    #[must_use]
    pub const fn new(metrics: M, subgroup_metrics: Subgroups<M>) -> Self {
        Self {
            metrics,
            subgroup_metrics,
        }
    }

    /// Number of per-segment breakdowns carried.
    #[must_use]
    pub const fn subgroup_count(&self) -> usize {
        self.subgroup_metrics.len()
    }
}

impl<M: Serialize> GroupedMetrics<M> {
    /// Encode to the canonical JSON interchange text.
    pub fn to_json(&self) -> Result<String, CodecError> {
        codec::encode(self)
    }
}

impl<M: DeserializeOwned> GroupedMetrics<M> {
    /// Decode canonical JSON interchange text produced by [`to_json`].
    ///
    /// [`to_json`]: GroupedMetrics::to_json
    pub fn from_json(text: &str) -> Result<Self, CodecError> {
        codec::decode(text)
    }
}

impl<M: Combine> Combine for GroupedMetrics<M> {
    fn combine_sum(&self, other: &Self) -> Self {
        Self {
            metrics: self.metrics.combine_sum(&other.metrics),
            subgroup_metrics: self.subgroup_metrics.combine_sum(&other.subgroup_metrics),
        }
    }

    fn combine_shares(&self, other: &Self) -> Self {
        Self {
            metrics: self.metrics.combine_shares(&other.metrics),
            subgroup_metrics: self
                .subgroup_metrics
                .combine_shares(&other.subgroup_metrics),
        }
    }
}

///
/// TESTS
///
