//! Typed values assembled from scalar draws.
//!
//! A [`Components`] type exposes a fixed number of scalar slots. The cache
//! fills slot `0` first, then `1`, and so on, drawing one scalar per slot, so
//! a `k`-component value always consumes exactly `k` draws in the same order.
//!
//! Implementations are provided for real scalars, integer scalars, and fixed
//! arrays of any `Components` type (vectors, and nested arrays for tensors).

use num_traits::{Float, NumCast};

/// Three-component real vector.
pub type Vector3 = [f64; 3];

/// Rank-two real tensor in three dimensions, stored row-major.
pub type Tensor3 = [[f64; 3]; 3];

/// Component count and component accessors for a sampled value type.
///
/// # Examples
///
/// ```rust
/// use sampler_core::rng::Components;
///
/// let mut v = <[f64; 2]>::zero();
/// v.set_component(1, 0.5);
/// assert_eq!(v, [0.0, 0.5]);
/// assert_eq!(<[[f64; 2]; 3]>::N_COMPONENTS, 6);
/// ```
pub trait Components: Copy {
    /// Number of scalar components.
    const N_COMPONENTS: usize;

    /// Returns the value whose components are all zero.
    fn zero() -> Self;

    /// Returns component `index` as a real number.
    ///
    /// # Panics
    ///
    /// Panics if `index >= N_COMPONENTS`.
    fn component(&self, index: usize) -> f64;

    /// Overwrites component `index`.
    ///
    /// Integer types round to the nearest value and saturate at their bounds.
    ///
    /// # Panics
    ///
    /// Panics if `index >= N_COMPONENTS`.
    fn set_component(&mut self, index: usize, value: f64);

    /// Overwrites component `index` with a `value` lying below `bound`.
    ///
    /// Real types step the stored component down to the largest
    /// representable value below `bound` when rounding would otherwise
    /// reach it. Integer types round as in
    /// [`set_component`](Self::set_component) and may reach `bound`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= N_COMPONENTS`.
    fn set_component_below(&mut self, index: usize, value: f64, _bound: f64) {
        self.set_component(index, value);
    }
}

/// Builds a value whose components lie in [0, 1), drawing one scalar per
/// component in order.
pub(crate) fn assemble_unit<T, F>(mut draw: F) -> T
where
    T: Components,
    F: FnMut(usize) -> f64,
{
    let mut value = T::zero();
    for index in 0..T::N_COMPONENTS {
        value.set_component_below(index, draw(index), 1.0);
    }
    value
}

/// Builds a value between `start` and `end`, drawing one scalar per
/// component in order.
///
/// A real component with `start < end` lies in `[start, end)`.
pub(crate) fn assemble_between<T, F>(start: &T, end: &T, mut draw: F) -> T
where
    T: Components,
    F: FnMut(usize) -> f64,
{
    let mut value = T::zero();
    for index in 0..T::N_COMPONENTS {
        let (lo, hi) = (start.component(index), end.component(index));
        let x = lerp(lo, hi, draw(index));
        if lo < hi {
            value.set_component_below(index, x, hi);
        } else {
            value.set_component(index, x);
        }
    }
    value
}

/// Linear interpolation `start + u * (end - start)`.
#[inline]
pub(crate) fn lerp<F: Float>(start: F, end: F, u: F) -> F {
    start + u * (end - start)
}

macro_rules! impl_real_components {
    ($($t:ty),*) => {
        $(
            impl Components for $t {
                const N_COMPONENTS: usize = 1;

                #[inline]
                fn zero() -> Self {
                    0.0
                }

                #[inline]
                fn component(&self, index: usize) -> f64 {
                    assert_eq!(index, 0, "scalar has a single component");
                    *self as f64
                }

                #[inline]
                fn set_component(&mut self, index: usize, value: f64) {
                    assert_eq!(index, 0, "scalar has a single component");
                    *self = value as $t;
                }

                fn set_component_below(&mut self, index: usize, value: f64, bound: f64) {
                    self.set_component(index, value);
                    let bound = bound as $t;
                    if *self >= bound {
                        // largest value below `bound`
                        *self = if bound > 0.0 {
                            <$t>::from_bits(bound.to_bits() - 1)
                        } else if bound < 0.0 {
                            <$t>::from_bits(bound.to_bits() + 1)
                        } else {
                            -<$t>::from_bits(1)
                        };
                    }
                }
            }
        )*
    };
}

macro_rules! impl_integer_components {
    ($($t:ty),*) => {
        $(
            impl Components for $t {
                const N_COMPONENTS: usize = 1;

                #[inline]
                fn zero() -> Self {
                    0
                }

                #[inline]
                fn component(&self, index: usize) -> f64 {
                    assert_eq!(index, 0, "scalar has a single component");
                    *self as f64
                }

                #[inline]
                fn set_component(&mut self, index: usize, value: f64) {
                    assert_eq!(index, 0, "scalar has a single component");
                    let rounded = value.round();
                    *self = <$t as NumCast>::from(rounded).unwrap_or(if rounded < 0.0 {
                        <$t>::MIN
                    } else {
                        <$t>::MAX
                    });
                }
            }
        )*
    };
}

impl_real_components!(f32, f64);
impl_integer_components!(i32, i64, u32, u64, usize);

impl<T: Components, const N: usize> Components for [T; N] {
    const N_COMPONENTS: usize = N * T::N_COMPONENTS;

    #[inline]
    fn zero() -> Self {
        [T::zero(); N]
    }

    #[inline]
    fn component(&self, index: usize) -> f64 {
        self[index / T::N_COMPONENTS].component(index % T::N_COMPONENTS)
    }

    #[inline]
    fn set_component(&mut self, index: usize, value: f64) {
        self[index / T::N_COMPONENTS].set_component(index % T::N_COMPONENTS, value);
    }

    #[inline]
    fn set_component_below(&mut self, index: usize, value: f64, bound: f64) {
        self[index / T::N_COMPONENTS].set_component_below(index % T::N_COMPONENTS, value, bound);
    }
}
