//! Combine operators for range aggregation.
//!
//! A [`Monoid`] pairs an associative `combine` with its identity element.
//! Trees never check associativity; an operator that violates it yields
//! aggregates that depend on the tree's internal split points.

use std::fmt;
use std::marker::PhantomData;
use std::ops::Add;

/// An associative binary operator with an identity element.
///
/// Implementations must satisfy, for all `a`, `b`, `c`:
///
/// - `combine(combine(a, b), c) == combine(a, combine(b, c))`
/// - `combine(identity(), a) == combine(a, identity()) == a`
///
/// Commutativity is not required. Range queries always combine operands
/// left to right.
pub trait Monoid {
    /// The element type being aggregated.
    type Value: Clone;

    /// The identity element.
    fn identity(&self) -> Self::Value;

    /// Combines two values, `left` preceding `right` in the sequence.
    fn combine(&self, left: &Self::Value, right: &Self::Value) -> Self::Value;
}

/// A monoid built from a caller-supplied closure and identity value.
///
/// ```rust
/// use segseq::{FnMonoid, Monoid};
///
/// let concat = FnMonoid::new(String::new(), |a: &String, b: &String| format!("{a}{b}"));
/// assert_eq!(concat.combine(&"ab".into(), &"c".into()), "abc");
/// ```
#[derive(Clone)]
pub struct FnMonoid<T, F> {
    identity: T,
    combine: F,
}

impl<T, F> FnMonoid<T, F>
where
    T: Clone,
    F: Fn(&T, &T) -> T,
{
    pub fn new(identity: T, combine: F) -> Self {
        FnMonoid { identity, combine }
    }
}

impl<T, F> Monoid for FnMonoid<T, F>
where
    T: Clone,
    F: Fn(&T, &T) -> T,
{
    type Value = T;

    fn identity(&self) -> T {
        self.identity.clone()
    }

    fn combine(&self, left: &T, right: &T) -> T {
        (self.combine)(left, right)
    }
}

impl<T: fmt::Debug, F> fmt::Debug for FnMonoid<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnMonoid")
            .field("identity", &self.identity)
            .finish_non_exhaustive()
    }
}

/// Addition, with `T::default()` (zero for numbers) as identity.
pub struct Sum<T>(PhantomData<fn() -> T>);

impl<T> Sum<T> {
    pub fn new() -> Self {
        Sum(PhantomData)
    }
}

impl<T> Default for Sum<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Sum<T> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Sum<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Sum")
    }
}

impl<T> Monoid for Sum<T>
where
    T: Clone + Default + Add<Output = T>,
{
    type Value = T;

    fn identity(&self) -> T {
        T::default()
    }

    fn combine(&self, left: &T, right: &T) -> T {
        left.clone() + right.clone()
    }
}

/// Types with a smallest and largest representable value.
pub trait Bounded {
    const MIN: Self;
    const MAX: Self;
}

macro_rules! impl_bounded {
    ($($t:ty),*) => {
        $(
            impl Bounded for $t {
                const MIN: Self = <$t>::MIN;
                const MAX: Self = <$t>::MAX;
            }
        )*
    };
}

impl_bounded!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Maximum, with the type's minimum value as identity.
pub struct Max<T>(PhantomData<fn() -> T>);

/// Minimum, with the type's maximum value as identity.
pub struct Min<T>(PhantomData<fn() -> T>);

macro_rules! impl_extremum {
    ($name:ident, $identity:ident, $pick:ident) => {
        impl<T> $name<T> {
            pub fn new() -> Self {
                $name(PhantomData)
            }
        }

        impl<T> Default for $name<T> {
            fn default() -> Self {
                Self::new()
            }
        }

        impl<T> Clone for $name<T> {
            fn clone(&self) -> Self {
                Self::new()
            }
        }

        impl<T> fmt::Debug for $name<T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(stringify!($name))
            }
        }

        impl<T> Monoid for $name<T>
        where
            T: Clone + Ord + Bounded,
        {
            type Value = T;

            fn identity(&self) -> T {
                T::$identity
            }

            fn combine(&self, left: &T, right: &T) -> T {
                left.clone().$pick(right.clone())
            }
        }
    };
}

impl_extremum!(Max, MIN, max);
impl_extremum!(Min, MAX, min);
