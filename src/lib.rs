//! # squat
//!
//! Quaternion algebra kernel for 3D rotations, no-std compatible. A small
//! set of pure operations over scalar-first `(w, x, y, z)` quaternions:
//! arithmetic, norm, conjugate, inverse, normalization, and axis-angle
//! conversions. No heap allocation, no FPU assumptions.
//!
//! ## Quick start
//!
//! ```
//! use squat::{Quaternion, Vector3};
//! use core::f64::consts::FRAC_PI_2;
//!
//! // Compose two rotations with the Hamilton product
//! let about_x = Quaternion::from_axis_angle(Vector3::from_array([1.0, 0.0, 0.0]), FRAC_PI_2);
//! let about_z = Quaternion::from_axis_angle(Vector3::from_array([0.0, 0.0, 1.0]), FRAC_PI_2);
//! let combined = about_z * about_x;
//! assert!((combined.norm() - 1.0).abs() < 1e-12);
//!
//! // Recover the axis-angle form
//! let angle = combined.angle();
//! let axis = combined.axis();
//! assert!((Quaternion::from_axis_angle(axis, angle).w - combined.w).abs() < 1e-12);
//! ```
//!
//! ## Modules
//!
//! - [`quaternion`] — The kernel: `Quaternion<T>` with basis factories
//!   (`identity`, `i`, `j`, `k`), operators (`+`, `*`, unary `-`), `scale`,
//!   `norm`, `conjugate`, `inverse`, `normalized`, and the
//!   `from_axis_angle` / `axis` / `angle` conversions. Every
//!   quaternion-producing operation has an `*_into` form that writes into a
//!   caller-supplied buffer instead of allocating.
//!
//! - [`vector`] — Fixed-size [`Vector3<T>`] used as the rotation axis.
//!
//! - [`traits`] — Element trait hierarchy:
//!   - [`Scalar`] — all components (`Copy + PartialEq + Debug + Zero + One + Num`)
//!   - [`FloatScalar`] — real floats (`Scalar + Float`), required by every operation
//!   - [`QuatMut`] — generic write access for `*_into` output targets
//!
//! ## Output targets
//!
//! The `*_into` operations accept anything implementing [`QuatMut`]:
//! another [`Quaternion`], a `[T; 4]`, or a [`QuatView`] wrapping a mutable
//! slice ([`QuatView::try_from_slice`] rejects slices that do not hold
//! exactly 4 elements with [`QuatError::BadShape`]).
//!
//! ## Cargo features
//!
//! | Feature | Default  | Description |
//! |---------|----------|-------------|
//! | `std`   | yes      | Hardware FPU via system libm |
//! | `libm`  | baseline | Pure-Rust software float fallback |

#![cfg_attr(not(feature = "std"), no_std)]

pub mod quaternion;
pub mod traits;
pub mod vector;

pub use quaternion::{QuatError, QuatView, Quaternion};
pub use traits::{FloatScalar, QuatMut, Scalar};
pub use vector::Vector3;
