use core::fmt::Debug;
use num_traits::{Float, Num, One, Zero};

/// Trait for types that can be used as quaternion or vector components.
///
/// Blanket-implemented for all types satisfying the bounds.
pub trait Scalar: Copy + PartialEq + Debug + Zero + One + Num {}

impl<T: Copy + PartialEq + Debug + Zero + One + Num> Scalar for T {}

/// Trait for floating-point components.
///
/// Required by operations that need `sqrt`, `sin`, `acos`, etc.
/// Covers `f32` and `f64`.
pub trait FloatScalar: Scalar + Float {}

impl<T: Scalar + Float> FloatScalar for T {}

/// Mutable access to a quaternion-shaped container.
///
/// A container with exactly 4 numeric slots, indexed `0..4` in
/// `(w, x, y, z)` order. The `*_into` operations on
/// [`Quaternion`](crate::Quaternion) write their result through this trait,
/// so callers can target a `Quaternion`, a `[T; 4]`, or a
/// [`QuatView`](crate::QuatView) over a slice without allocating.
///
/// Implementations must expose exactly 4 slots; indices outside `0..4`
/// may panic.
pub trait QuatMut<T> {
    fn get_mut(&mut self, i: usize) -> &mut T;
}

impl<T> QuatMut<T> for [T; 4] {
    #[inline]
    fn get_mut(&mut self, i: usize) -> &mut T {
        &mut self[i]
    }
}
