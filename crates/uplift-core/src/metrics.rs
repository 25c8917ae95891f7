use crate::{codec::CodecError, combine::Combine};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

///
/// LiftMetrics
///
/// Counter record for one measurement segment, split into test and control
/// populations. Every field is a signed 64-bit counter; in the
/// secret-shared stage of the pipeline a field holds an additive share of
/// the real counter rather than the counter itself.
///
/// `combine_sum` is field-wise wrapping addition, the group operation of
/// share arithmetic mod 2^64, so aggregation stays total, commutative, and
/// associative over the whole domain. `combine_shares` is field-wise XOR
/// and folds per-party shares back into cleartext.
///
/// The all-zero record (`Default`) is the identity of both operations.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LiftMetrics {
    /// Opportunity count in the test population.
    pub test_population: i64,
    /// Opportunity count in the control population.
    pub control_population: i64,
    /// Conversion events attributed to the test population.
    pub test_conversions: i64,
    /// Conversion events attributed to the control population.
    pub control_conversions: i64,
    /// Sum of conversion values in the test population.
    pub test_value: i64,
    /// Sum of conversion values in the control population.
    pub control_value: i64,
    /// Sum of squared per-user conversion values, test side.
    pub test_value_squared: i64,
    /// Sum of squared per-user conversion values, control side.
    pub control_value_squared: i64,
    /// Sum of squared per-user conversion counts, test side.
    pub test_num_conv_squared: i64,
    /// Sum of squared per-user conversion counts, control side.
    pub control_num_conv_squared: i64,
    /// Identifiers matched into the test population.
    pub test_match_count: i64,
    /// Identifiers matched into the control population.
    pub control_match_count: i64,
}

impl LiftMetrics {
    /// Apply `combine` to every corresponding pair of counters.
    fn combine_fields(&self, other: &Self, combine: impl Fn(i64, i64) -> i64) -> Self {
        Self {
            test_population: combine(self.test_population, other.test_population),
            control_population: combine(self.control_population, other.control_population),
            test_conversions: combine(self.test_conversions, other.test_conversions),
            control_conversions: combine(self.control_conversions, other.control_conversions),
            test_value: combine(self.test_value, other.test_value),
            control_value: combine(self.control_value, other.control_value),
            test_value_squared: combine(self.test_value_squared, other.test_value_squared),
            control_value_squared: combine(
                self.control_value_squared,
                other.control_value_squared,
            ),
            test_num_conv_squared: combine(
                self.test_num_conv_squared,
                other.test_num_conv_squared,
            ),
            control_num_conv_squared: combine(
                self.control_num_conv_squared,
                other.control_num_conv_squared,
            ),
            test_match_count: combine(self.test_match_count, other.test_match_count),
            control_match_count: combine(self.control_match_count, other.control_match_count),
        }
    }

    /// Build the structured JSON value form, field by field under the wire
    /// names. Kept literal so the wire schema is visible in one place.
    #[must_use]
    pub fn to_value(&self) -> Value {
        json!({
            "testPopulation": self.test_population,
            "controlPopulation": self.control_population,
            "testConversions": self.test_conversions,
            "controlConversions": self.control_conversions,
            "testValue": self.test_value,
            "controlValue": self.control_value,
            "testValueSquared": self.test_value_squared,
            "controlValueSquared": self.control_value_squared,
            "testNumConvSquared": self.test_num_conv_squared,
            "controlNumConvSquared": self.control_num_conv_squared,
            "testMatchCount": self.test_match_count,
            "controlMatchCount": self.control_match_count,
        })
    }

    /// Rebuild a record from its structured JSON value form.
    pub fn from_value(value: &Value) -> Result<Self, CodecError> {
        Self::deserialize(value).map_err(|err| CodecError::Decode(err.to_string()))
    }
}

impl Combine for LiftMetrics {
    fn combine_sum(&self, other: &Self) -> Self {
        self.combine_fields(other, i64::wrapping_add)
    }

    fn combine_shares(&self, other: &Self) -> Self {
        self.combine_fields(other, |lhs, rhs| lhs ^ rhs)
    }
}

///
/// TESTS
///
