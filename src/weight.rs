use num_traits::Float;
use ordered_float::OrderedFloat;
use std::fmt::Debug;

/// Numeric type usable as an edge weight and as a distance.
///
/// Distances need a total order, a zero for the start vertex and a value
/// standing for "unreachable" that compares greater than every finite value.
/// [`Weight::relax`] must keep that value absorbing: `infinity ⊕ w == infinity`.
pub trait Weight: Copy + Ord + Debug {
    /// Distance of the start vertex
    fn zero() -> Self;

    /// Distance of a vertex that has not been reached
    fn infinity() -> Self;

    /// Length of a path of length `self` extended by an edge of weight `edge`
    fn relax(self, edge: Self) -> Self;

    /// Returns true if this value stands for an unreachable vertex
    fn is_infinite(self) -> bool {
        self == Self::infinity()
    }

    /// Returns true if the value is below zero
    fn is_negative(self) -> bool {
        self < Self::zero()
    }
}

impl<F> Weight for OrderedFloat<F>
where
    F: Float + Debug,
{
    fn zero() -> Self {
        OrderedFloat(F::zero())
    }

    fn infinity() -> Self {
        OrderedFloat(F::infinity())
    }

    fn relax(self, edge: Self) -> Self {
        // IEEE addition already keeps infinity absorbing
        OrderedFloat(self.0 + edge.0)
    }
}

// Integer weights use MAX as the infinity sentinel. Saturating addition keeps
// a sum from wrapping around into a finite value.
macro_rules! impl_integer_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                fn zero() -> Self {
                    0
                }

                fn infinity() -> Self {
                    <$t>::MAX
                }

                fn relax(self, edge: Self) -> Self {
                    if self == <$t>::MAX {
                        return self;
                    }
                    self.saturating_add(edge)
                }
            }
        )*
    };
}

impl_integer_weight!(u32, u64, usize, i32, i64);
