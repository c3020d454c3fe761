use core::ops::{Add, Mul, Neg};

use crate::traits::{FloatScalar, QuatMut};
use crate::vector::Vector3;

/// Quaternion for 3D rotations.
///
/// Scalar-first convention: `(w, x, y, z)` representing `w + xi + yj + zk`,
/// where `w` is the scalar part and `(x, y, z)` is the vector part.
///
/// Every operation that produces a quaternion comes in two forms: an
/// allocating form returning a fresh value, and an `*_into` form that
/// writes the 4 components through a caller-supplied [`QuatMut`] target
/// and returns that borrow. Inputs are never mutated.
///
/// # Examples
///
/// ```
/// use squat::Quaternion;
///
/// let p = Quaternion::new(3.0, 2.0, 5.0, 4.0);
/// let q = Quaternion::new(4.0, 5.0, 3.0, 1.0);
/// assert_eq!(p * q, Quaternion::new(-17.0, 16.0, 47.0, 0.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quaternion<T> {
    pub w: T,
    pub x: T,
    pub y: T,
    pub z: T,
}

/// Errors from quaternion operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuatError {
    /// The quaternion has zero norm, so `inverse` / `normalized` are undefined.
    ZeroNorm,
    /// An output slice does not hold exactly 4 elements.
    BadShape,
}

impl core::fmt::Display for QuatError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            QuatError::ZeroNorm => write!(f, "quaternion has zero norm"),
            QuatError::BadShape => write!(f, "output slice must hold exactly 4 elements"),
        }
    }
}

/// Quaternion-shaped view over a mutable slice.
///
/// Lets the `*_into` operations target borrowed storage (e.g. a section of
/// a larger buffer). The constructor validates the shape up front; the view
/// itself then satisfies [`QuatMut`] with no further checks.
///
/// ```
/// use squat::{Quaternion, QuatView};
///
/// let mut buf = [0.0_f64; 4];
/// let mut view = QuatView::try_from_slice(&mut buf).unwrap();
/// Quaternion::identity().conjugate_into(&mut view);
/// assert_eq!(buf[0], 1.0);
/// ```
pub struct QuatView<'a, T> {
    slice: &'a mut [T],
}

impl<'a, T> QuatView<'a, T> {
    /// Wrap a mutable slice of exactly 4 elements.
    ///
    /// Returns [`QuatError::BadShape`] for any other length; the view never
    /// writes out of bounds and never truncates.
    pub fn try_from_slice(slice: &'a mut [T]) -> Result<Self, QuatError> {
        if slice.len() == 4 {
            Ok(Self { slice })
        } else {
            Err(QuatError::BadShape)
        }
    }
}

impl<T> QuatMut<T> for QuatView<'_, T> {
    #[inline]
    fn get_mut(&mut self, i: usize) -> &mut T {
        &mut self.slice[i]
    }
}

impl<T> QuatMut<T> for Quaternion<T> {
    #[inline]
    fn get_mut(&mut self, i: usize) -> &mut T {
        match i {
            0 => &mut self.w,
            1 => &mut self.x,
            2 => &mut self.y,
            3 => &mut self.z,
            _ => panic!("quaternion index out of range: {}", i),
        }
    }
}

// ── Constructors ─────────────────────────────────────────────────────

impl<T: FloatScalar> Quaternion<T> {
    /// Create a quaternion from components.
    #[inline]
    pub fn new(w: T, x: T, y: T, z: T) -> Self {
        Self { w, x, y, z }
    }

    /// The basis element `1 = (1, 0, 0, 0)` — the identity rotation.
    ///
    /// Basis factories return a fresh value on every call; there is no
    /// shared backing storage to mutate.
    #[inline]
    pub fn identity() -> Self {
        Self::new(T::one(), T::zero(), T::zero(), T::zero())
    }

    /// The basis element `i = (0, 1, 0, 0)`.
    #[inline]
    pub fn i() -> Self {
        Self::new(T::zero(), T::one(), T::zero(), T::zero())
    }

    /// The basis element `j = (0, 0, 1, 0)`.
    #[inline]
    pub fn j() -> Self {
        Self::new(T::zero(), T::zero(), T::one(), T::zero())
    }

    /// The basis element `k = (0, 0, 0, 1)`.
    #[inline]
    pub fn k() -> Self {
        Self::new(T::zero(), T::zero(), T::zero(), T::one())
    }

    /// Create the rotation of `angle` radians about `axis`.
    ///
    /// The axis is normalized internally, so it need not be unit length:
    /// `w = cos(angle/2)`, `(x, y, z) = axis/‖axis‖ · sin(angle/2)`.
    ///
    /// A zero-length axis has no direction; the result is then the
    /// identity quaternion.
    #[inline]
    pub fn from_axis_angle(axis: Vector3<T>, angle: T) -> Self {
        match axis.normalized() {
            Some(u) => {
                let half = angle / (T::one() + T::one());
                let (s, c) = half.sin_cos();
                Self::new(c, u[0] * s, u[1] * s, u[2] * s)
            }
            None => Self::identity(),
        }
    }

    /// Out-parameter form of [`from_axis_angle`](Self::from_axis_angle).
    #[inline]
    pub fn from_axis_angle_into<'a, O: QuatMut<T>>(
        axis: Vector3<T>,
        angle: T,
        out: &'a mut O,
    ) -> &'a mut O {
        Self::from_axis_angle(axis, angle).write_to(out)
    }
}

// ── Core operations ──────────────────────────────────────────────────

impl<T: FloatScalar> Quaternion<T> {
    /// Component-wise sum. Also available as the `+` operator.
    #[inline]
    pub fn add_into<'a, O: QuatMut<T>>(&self, rhs: &Self, out: &'a mut O) -> &'a mut O {
        (*self + *rhs).write_to(out)
    }

    /// Hamilton product written into `out`. The allocating form is the
    /// `*` operator.
    #[inline]
    pub fn mul_into<'a, O: QuatMut<T>>(&self, rhs: &Self, out: &'a mut O) -> &'a mut O {
        (*self * *rhs).write_to(out)
    }

    /// Multiply every component by the scalar `s`.
    #[inline]
    pub fn scale(&self, s: T) -> Self {
        Self::new(self.w * s, self.x * s, self.y * s, self.z * s)
    }

    /// Out-parameter form of [`scale`](Self::scale).
    #[inline]
    pub fn scale_into<'a, O: QuatMut<T>>(&self, s: T, out: &'a mut O) -> &'a mut O {
        self.scale(s).write_to(out)
    }

    /// Dot product of two quaternions.
    #[inline]
    pub fn dot(&self, rhs: &Self) -> T {
        self.w * rhs.w + self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }

    /// Squared norm: `w² + x² + y² + z²`.
    #[inline]
    pub fn norm_squared(&self) -> T {
        self.dot(self)
    }

    /// Euclidean norm (length). Always non-negative.
    #[inline]
    pub fn norm(&self) -> T {
        self.norm_squared().sqrt()
    }

    /// Conjugate: `(w, -x, -y, -z)`.
    ///
    /// Negation follows IEEE semantics, so an exact-zero component comes
    /// back as negative zero: `conjugate((1, 0, 0, 0)) = (1, -0, -0, -0)`.
    #[inline]
    pub fn conjugate(&self) -> Self {
        Self::new(self.w, -self.x, -self.y, -self.z)
    }

    /// Out-parameter form of [`conjugate`](Self::conjugate).
    #[inline]
    pub fn conjugate_into<'a, O: QuatMut<T>>(&self, out: &'a mut O) -> &'a mut O {
        self.conjugate().write_to(out)
    }

    /// Inverse: `conjugate / norm²`.
    ///
    /// For unit quaternions this equals the conjugate. Returns
    /// [`QuatError::ZeroNorm`] for the zero quaternion, whose inverse is
    /// undefined.
    #[inline]
    pub fn inverse(&self) -> Result<Self, QuatError> {
        let n2 = self.norm_squared();
        if n2 == T::zero() {
            return Err(QuatError::ZeroNorm);
        }
        Ok(self.conjugate().scale(T::one() / n2))
    }

    /// Out-parameter form of [`inverse`](Self::inverse). On error the
    /// output target is left untouched.
    #[inline]
    pub fn inverse_into<'a, O: QuatMut<T>>(&self, out: &'a mut O) -> Result<&'a mut O, QuatError> {
        Ok(self.inverse()?.write_to(out))
    }

    /// Unit quaternion in the same direction: `self / norm`.
    ///
    /// Returns [`QuatError::ZeroNorm`] for the zero quaternion.
    #[inline]
    pub fn normalized(&self) -> Result<Self, QuatError> {
        let n = self.norm();
        if n == T::zero() {
            return Err(QuatError::ZeroNorm);
        }
        Ok(self.scale(T::one() / n))
    }

    /// Out-parameter form of [`normalized`](Self::normalized). On error the
    /// output target is left untouched.
    #[inline]
    pub fn normalized_into<'a, O: QuatMut<T>>(
        &self,
        out: &'a mut O,
    ) -> Result<&'a mut O, QuatError> {
        Ok(self.normalized()?.write_to(out))
    }

    #[inline]
    fn write_to<'a, O: QuatMut<T>>(&self, out: &'a mut O) -> &'a mut O {
        *out.get_mut(0) = self.w;
        *out.get_mut(1) = self.x;
        *out.get_mut(2) = self.y;
        *out.get_mut(3) = self.z;
        out
    }
}

// ── Axis-angle recovery ──────────────────────────────────────────────

impl<T: FloatScalar> Quaternion<T> {
    /// Rotation axis: the normalized vector part.
    ///
    /// Inverse of [`from_axis_angle`](Self::from_axis_angle) together with
    /// [`angle`](Self::angle) for angles in `(0, 2π)`. The axis keeps the
    /// sign of the stored vector part; a negative-`w` quaternion maps to an
    /// angle in `(π, 2π]` rather than to a flipped axis. For a quaternion
    /// with zero vector part (identity rotation) the axis is arbitrary and
    /// `(1, 0, 0)` is returned.
    pub fn axis(&self) -> Vector3<T> {
        let v = Vector3::from_array([self.x, self.y, self.z]);
        match v.normalized() {
            Some(u) => u,
            None => Vector3::from_array([T::one(), T::zero(), T::zero()]),
        }
    }

    /// Rotation angle in radians: `2·acos(w)`, in `[0, 2π]`.
    ///
    /// `w` is clamped to `[-1, 1]` first so that floating-point drift in a
    /// nominally-unit quaternion cannot push `acos` out of its domain.
    pub fn angle(&self) -> T {
        let one = T::one();
        let clamped = self.w.min(one).max(-one);
        (one + one) * clamped.acos()
    }
}

// ── Operators ────────────────────────────────────────────────────────

impl<T: FloatScalar> Add for Quaternion<T> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(
            self.w + rhs.w,
            self.x + rhs.x,
            self.y + rhs.y,
            self.z + rhs.z,
        )
    }
}

// Hamilton product: p * q
impl<T: FloatScalar> Mul for Quaternion<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self {
            w: self.w * rhs.w - self.x * rhs.x - self.y * rhs.y - self.z * rhs.z,
            x: self.w * rhs.x + self.x * rhs.w + self.y * rhs.z - self.z * rhs.y,
            y: self.w * rhs.y - self.x * rhs.z + self.y * rhs.w + self.z * rhs.x,
            z: self.w * rhs.z + self.x * rhs.y - self.y * rhs.x + self.z * rhs.w,
        }
    }
}

// Reference variants for the Hamilton product
impl<T: FloatScalar> Mul<Quaternion<T>> for &Quaternion<T> {
    type Output = Quaternion<T>;
    #[inline]
    fn mul(self, rhs: Quaternion<T>) -> Quaternion<T> {
        (*self).mul(rhs)
    }
}

impl<T: FloatScalar> Mul<&Quaternion<T>> for Quaternion<T> {
    type Output = Quaternion<T>;
    #[inline]
    fn mul(self, rhs: &Quaternion<T>) -> Quaternion<T> {
        self.mul(*rhs)
    }
}

impl<T: FloatScalar> Mul<&Quaternion<T>> for &Quaternion<T> {
    type Output = Quaternion<T>;
    #[inline]
    fn mul(self, rhs: &Quaternion<T>) -> Quaternion<T> {
        (*self).mul(*rhs)
    }
}

impl<T: FloatScalar> Neg for Quaternion<T> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.w, -self.x, -self.y, -self.z)
    }
}

impl<T: FloatScalar> Neg for &Quaternion<T> {
    type Output = Quaternion<T>;

    #[inline]
    fn neg(self) -> Quaternion<T> {
        (*self).neg()
    }
}

// ── Display ──────────────────────────────────────────────────────────

impl<T: core::fmt::Display> core::fmt::Display for Quaternion<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "({} + {}i + {}j + {}k)", self.w, self.x, self.y, self.z)
    }
}

// ── Tests ────────────────────────────────────────────────────────────
