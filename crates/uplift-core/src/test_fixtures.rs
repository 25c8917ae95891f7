use crate::{
    combine::Combine,
    grouped::{GroupedLiftMetrics, GroupedMetrics},
    metrics::LiftMetrics,
};
use proptest::prelude::*;

/// Deterministic sample record; every counter gets a distinct value derived
/// from `seed` so field transposition bugs cannot cancel out.
pub(crate) fn lift_metrics(seed: i64) -> LiftMetrics {
    LiftMetrics {
        test_population: seed,
        control_population: seed.wrapping_add(1),
        test_conversions: seed.wrapping_add(2),
        control_conversions: seed.wrapping_add(3),
        test_value: seed.wrapping_add(4),
        control_value: seed.wrapping_add(5),
        test_value_squared: seed.wrapping_add(6),
        control_value_squared: seed.wrapping_add(7),
        test_num_conv_squared: seed.wrapping_add(8),
        control_num_conv_squared: seed.wrapping_add(9),
        test_match_count: seed.wrapping_add(10),
        control_match_count: seed.wrapping_add(11),
    }
}

/// Deterministic grouped record with `subgroup_count` breakdowns.
pub(crate) fn grouped_lift(seed: i64, subgroup_count: usize) -> GroupedLiftMetrics {
    let subgroups = (0..subgroup_count)
        .map(|i| lift_metrics(seed.wrapping_add(100 * (i as i64 + 1))))
        .collect();

    GroupedMetrics::new(lift_metrics(seed), subgroups)
}

/// Strategy over fully arbitrary records, wrapping values included.
pub(crate) fn arb_lift_metrics() -> impl Strategy<Value = LiftMetrics> {
    any::<[i64; 12]>().prop_map(|f| LiftMetrics {
        test_population: f[0],
        control_population: f[1],
        test_conversions: f[2],
        control_conversions: f[3],
        test_value: f[4],
        control_value: f[5],
        test_value_squared: f[6],
        control_value_squared: f[7],
        test_num_conv_squared: f[8],
        control_num_conv_squared: f[9],
        test_match_count: f[10],
        control_match_count: f[11],
    })
}

/// Strategy over grouped records with exactly `subgroup_count` breakdowns.
pub(crate) fn arb_grouped_lift(
    subgroup_count: usize,
) -> impl Strategy<Value = GroupedLiftMetrics> {
    (
        arb_lift_metrics(),
        prop::collection::vec(arb_lift_metrics(), subgroup_count),
    )
        .prop_map(|(metrics, subgroups)| GroupedMetrics::new(metrics, subgroups.into()))
}

///
/// Tally
///
/// Minimal combinable scalar for exercising the containers without the
/// full record.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Tally(pub(crate) i64);

impl Combine for Tally {
    fn combine_sum(&self, other: &Self) -> Self {
        Self(self.0.wrapping_add(other.0))
    }

    fn combine_shares(&self, other: &Self) -> Self {
        Self(self.0 ^ other.0)
    }
}

///
/// Transcript
///
/// Deliberately non-commutative combinable that records which operands met
/// under which operation. Containers must pass operands through in order
/// and pick the right operation; any shuffle or swap shows up in the
/// transcript.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Transcript(pub(crate) String);

impl Transcript {
    pub(crate) fn leaf(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl Combine for Transcript {
    fn combine_sum(&self, other: &Self) -> Self {
        Self(format!("({}+{})", self.0, other.0))
    }

    fn combine_shares(&self, other: &Self) -> Self {
        Self(format!("({}^{})", self.0, other.0))
    }
}
