///
/// Combine
///
/// The two pairwise operations a measurement value must support before it
/// can ride through the aggregation pipeline:
///
/// - `combine_sum` adds two partial results that each cover a *different*
///   slice of the population (per-partition tallies, per-shard counts).
/// - `combine_shares` reconstructs one value from two XOR secret shares of
///   the *same* underlying result, held by different parties.
///
/// Both operations must be commutative and associative so callers are free
/// to fold partial results in arrival order, reversed, or as a reduction
/// tree without changing the outcome. Neither operation mutates its
/// operands; combining produces a new value.
///

pub trait Combine: Sized {
    /// Aggregate `self` with a partial result for a disjoint population.
    #[must_use]
    fn combine_sum(&self, other: &Self) -> Self;

    /// Reconstruct by XOR-merging `other`, a secret share of the same value.
    #[must_use]
    fn combine_shares(&self, other: &Self) -> Self;
}

/// Fold an arbitrary number of partial results into one aggregate.
///
/// Returns `None` for an empty input rather than assuming the value type
/// has a neutral element.
#[must_use]
pub fn sum_partials<T, I>(parts: I) -> Option<T>
where
    T: Combine,
    I: IntoIterator<Item = T>,
{
    parts.into_iter().reduce(|acc, part| acc.combine_sum(&part))
}

/// Fold the shares of every participating party back into the cleartext
/// value. `None` for an empty input.
#[must_use]
pub fn reconstruct_shares<T, I>(shares: I) -> Option<T>
where
    T: Combine,
    I: IntoIterator<Item = T>,
{
    shares
        .into_iter()
        .reduce(|acc, share| acc.combine_shares(&share))
}

///
/// TESTS
///
