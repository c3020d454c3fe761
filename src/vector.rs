use core::ops::{Index, IndexMut};

use crate::traits::{FloatScalar, Scalar};

/// A fixed-size 3-vector.
///
/// Stack-allocated, no-std compatible. Used as the rotation axis in the
/// axis-angle conversions on [`Quaternion`](crate::Quaternion).
///
/// # Examples
///
/// ```
/// use squat::Vector3;
///
/// let v = Vector3::from_array([3.0_f64, 0.0, 4.0]);
/// assert_eq!(v[0], 3.0);
/// assert!((v.norm() - 5.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector3<T> {
    data: [T; 3],
}

impl<T: Scalar> Vector3<T> {
    /// Create a vector from a 1D array.
    #[inline]
    pub fn from_array(data: [T; 3]) -> Self {
        Self { data }
    }

    /// Number of elements (always 3).
    #[inline]
    pub const fn len(&self) -> usize {
        3
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Dot product of two vectors.
    ///
    /// ```
    /// use squat::Vector3;
    /// let a = Vector3::from_array([1.0, 2.0, 3.0]);
    /// let b = Vector3::from_array([4.0, 5.0, 6.0]);
    /// assert_eq!(a.dot(&b), 32.0); // 1*4 + 2*5 + 3*6
    /// ```
    #[inline]
    pub fn dot(&self, rhs: &Self) -> T {
        self[0] * rhs[0] + self[1] * rhs[1] + self[2] * rhs[2]
    }

    /// Cross product of two vectors.
    ///
    /// ```
    /// use squat::Vector3;
    /// let x = Vector3::from_array([1.0, 0.0, 0.0]);
    /// let y = Vector3::from_array([0.0, 1.0, 0.0]);
    /// let z = x.cross(&y);
    /// assert_eq!(z[2], 1.0); // x × y = z
    /// ```
    #[inline]
    pub fn cross(&self, rhs: &Self) -> Self {
        Self::from_array([
            self[1] * rhs[2] - self[2] * rhs[1],
            self[2] * rhs[0] - self[0] * rhs[2],
            self[0] * rhs[1] - self[1] * rhs[0],
        ])
    }
}

impl<T: FloatScalar> Vector3<T> {
    /// Squared Euclidean norm.
    #[inline]
    pub fn norm_squared(&self) -> T {
        self.dot(self)
    }

    /// Euclidean norm (magnitude).
    #[inline]
    pub fn norm(&self) -> T {
        self.norm_squared().sqrt()
    }

    /// Unit vector in the same direction, or `None` for the zero vector.
    #[inline]
    pub fn normalized(&self) -> Option<Self> {
        let n = self.norm();
        if n == T::zero() {
            None
        } else {
            let inv = T::one() / n;
            Some(Self::from_array([
                self[0] * inv,
                self[1] * inv,
                self[2] * inv,
            ]))
        }
    }
}

// Single-index access: v[i]
impl<T> Index<usize> for Vector3<T> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        &self.data[i]
    }
}

impl<T> IndexMut<usize> for Vector3<T> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.data[i]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_array_and_index() {
        let v = Vector3::from_array([1.0, 2.0, 3.0]);
        assert_eq!(v[0], 1.0);
        assert_eq!(v[1], 2.0);
        assert_eq!(v[2], 3.0);
        assert_eq!(v.len(), 3);
    }

    #[test]
    fn index_mut() {
        let mut v = Vector3::from_array([0.0, 0.0, 0.0]);
        v[1] = 5.0;
        assert_eq!(v[1], 5.0);
    }

    #[test]
    fn dot_product() {
        let a = Vector3::from_array([1.0, 2.0, 3.0]);
        let b = Vector3::from_array([4.0, 5.0, 6.0]);
        assert_eq!(a.dot(&b), 32.0); // 1*4 + 2*5 + 3*6
    }

    #[test]
    fn cross_product() {
        let x = Vector3::from_array([1.0, 0.0, 0.0]);
        let y = Vector3::from_array([0.0, 1.0, 0.0]);
        let z = x.cross(&y);
        assert_eq!(z[0], 0.0);
        assert_eq!(z[1], 0.0);
        assert_eq!(z[2], 1.0);
    }

    #[test]
    fn cross_product_anticommutative() {
        let a = Vector3::from_array([1.0, 2.0, 3.0]);
        let b = Vector3::from_array([4.0, 5.0, 6.0]);
        let ab = a.cross(&b);
        let ba = b.cross(&a);
        assert_eq!(ab[0], -ba[0]);
        assert_eq!(ab[1], -ba[1]);
        assert_eq!(ab[2], -ba[2]);
    }

    #[test]
    fn norm() {
        let v = Vector3::from_array([3.0_f64, 0.0, 4.0]);
        assert_eq!(v.norm_squared(), 25.0);
        assert!((v.norm() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn normalized_unit_length() {
        let v = Vector3::from_array([1.0_f64, 2.0, 2.0]);
        let u = v.normalized().unwrap();
        assert!((u.norm() - 1.0).abs() < 1e-12);
        assert!((u[0] - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn normalized_zero_is_none() {
        let v = Vector3::from_array([0.0_f64, 0.0, 0.0]);
        assert!(v.normalized().is_none());
    }
}
