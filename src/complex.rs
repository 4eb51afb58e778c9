use std::fmt;
use std::ops::Add;
use std::ops::Sub;
use std::ops::Div;
use std::ops::Mul;
use std::ops::Neg;
use format::format_double;

/// An immutable complex number.
///
/// The real and imaginary parts are fixed when the number is created. Every operation returns a
/// new `Complex`. Numeric edge cases such as division by zero follow IEEE-754 semantics and
/// produce infinite or NaN parts rather than errors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Complex {
    re: f64,
    im: f64,
}

impl Complex {
    /// Creates a complex number from its real and imaginary parts. Any value convertible to `f64`
    /// is accepted, including NaN and infinities.
    pub fn new<R: Into<f64>, I: Into<f64>>(real: R, imaginary: I) -> Complex {
        Complex { re: real.into(), im: imaginary.into() }
    }

    pub fn re(&self) -> f64 {
        self.re
    }

    pub fn im(&self) -> f64 {
        self.im
    }

    pub fn plus(&self, other: Complex) -> Complex {
        Complex::new(self.re + other.re, self.im + other.im)
    }

    pub fn minus(&self, other: Complex) -> Complex {
        Complex::new(self.re - other.re, self.im - other.im)
    }

    pub fn times(&self, other: Complex) -> Complex {
        Complex::new(self.re * other.re - self.im * other.im, self.re * other.im + self.im * other.re)
    }

    /// Returns `self / other`, calculated as `self` multiplied by the reciprocal of `other`.
    ///
    /// Dividing by zero doesn't panic, the parts of the result are NaN.
    pub fn divides(&self, other: Complex) -> Complex {
        self.times(other.reciprocal())
    }

    /// Returns the product of this number and the scalar `alpha`.
    pub fn scale<A: Into<f64>>(&self, alpha: A) -> Complex {
        let alpha = alpha.into();
        Complex::new(alpha * self.re, alpha * self.im)
    }

    pub fn conjugate(&self) -> Complex {
        Complex::new(self.re, -self.im)
    }

    /// Returns `1 / self`.
    ///
    /// The reciprocal of zero isn't treated specially, the division by zero produces NaN parts.
    /// The scale factor `re² + im²` is calculated directly, so when a part's magnitude is beyond
    /// about `1.3e154` it overflows to infinity and the reciprocal collapses to zero.
    pub fn reciprocal(&self) -> Complex {
        let scale_factor = self.re * self.re + self.im * self.im;

        if scale_factor == 0.0 {
            debug!("reciprocal of {:?} divides by zero", self);
        }
        Complex::new(self.re / scale_factor, -self.im / scale_factor)
    }

    /// The magnitude of the number.
    ///
    /// Uses `hypot` so large or small parts don't overflow or underflow when squared.
    pub fn abs(&self) -> f64 {
        self.re.hypot(self.im)
    }

    /// The angle of the number, calculated with `atan2`.
    ///
    /// The result is in the range (-π, π] except on the negative real axis with a negative zero
    /// imaginary part, e.g. the conjugate of `-1 + 0i`, where it is -π. The phase of zero is zero.
    pub fn phase(&self) -> f64 {
        self.im.atan2(self.re)
    }

    pub fn exp(&self) -> Complex {
        let exp_re = self.re.exp();
        Complex::new(exp_re * self.im.cos(), exp_re * self.im.sin())
    }

    pub fn sin(&self) -> Complex {
        Complex::new(self.re.sin() * self.im.cosh(), self.re.cos() * self.im.sinh())
    }

    pub fn cos(&self) -> Complex {
        Complex::new(self.re.cos() * self.im.cosh(), -self.re.sin() * self.im.sinh())
    }

    /// Returns `sin(self) / cos(self)`. Where the cosine is zero the parts of the result are NaN.
    pub fn tan(&self) -> Complex {
        self.sin().divides(self.cos())
    }
}

/// Renders `5 + 6i`, `5 - 6i`, `6i` or `5`.
///
/// A zero imaginary part is omitted, as is a zero real part. A negative imaginary part is shown
/// as a subtraction of its magnitude.
impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.im == 0.0 {
            write!(f, "{}", format_double(self.re))
        } else if self.re == 0.0 {
            write!(f, "{}i", format_double(self.im))
        } else if self.im < 0.0 {
            write!(f, "{} - {}i", format_double(self.re), format_double(-self.im))
        } else {
            write!(f, "{} + {}i", format_double(self.re), format_double(self.im))
        }
    }
}

impl From<f64> for Complex {
    fn from(real: f64) -> Complex {
        Complex::new(real, 0.0)
    }
}

impl From<(f64, f64)> for Complex {
    fn from((real, imaginary): (f64, f64)) -> Complex {
        Complex::new(real, imaginary)
    }
}

impl Add for Complex {
    type Output = Complex;

    fn add(self, other: Complex) -> Complex {
        self.plus(other)
    }
}

impl Sub for Complex {
    type Output = Complex;

    fn sub(self, other: Complex) -> Complex {
        self.minus(other)
    }
}

impl Mul for Complex {
    type Output = Complex;

    fn mul(self, other: Complex) -> Complex {
        self.times(other)
    }
}

impl Mul<f64> for Complex {
    type Output = Complex;

    fn mul(self, alpha: f64) -> Complex {
        self.scale(alpha)
    }
}

impl Div for Complex {
    type Output = Complex;

    fn div(self, divisor: Complex) -> Complex {
        self.divides(divisor)
    }
}

impl Neg for Complex {
    type Output = Complex;

    fn neg(self) -> Complex {
        Complex::new(-self.re, -self.im)
    }
}

//--------------------------------------------------------------------------------------------------
