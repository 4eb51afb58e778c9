//! An immutable complex number type with arithmetic, magnitude and phase queries, the complex
//! exponential and trigonometric functions, and a canonical string rendering.
//!
//! ```
//! use complex::Complex;
//!
//! let a = Complex::new(5, 6);
//! let b = Complex::new(-3, 4);
//! assert_eq!(a.divides(b).to_string(), "0.36 - 1.52i");
//! ```

#[macro_use]
extern crate log;
#[cfg(test)]
#[macro_use]
extern crate approx;
#[cfg(test)]
extern crate proptest;

mod complex;
pub mod format;

pub use complex::Complex;
