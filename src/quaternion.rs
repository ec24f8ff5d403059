//! An immutable quaternion value. A quaternion `a + bi + cj + dk` extends
//! the complex numbers with two more imaginary units. Every operation
//! returns a new value; nothing here mutates.
//!
//! # Examples
//!
//! ```
//! use persistent::quaternion::Quaternion;
//!
//! let q = Quaternion::new(3.0, 0.0, 0.0, -1.0);
//!
//! assert_eq!(q + Quaternion::K, Quaternion::new(3.0, 0.0, 0.0, 0.0));
//! assert_eq!(q.conjugate().conjugate(), q);
//! assert_eq!(q.to_string(), "3-k");
//!
//! // The Hamilton product is not commutative.
//! assert_ne!(Quaternion::I * Quaternion::J, Quaternion::J * Quaternion::I);
//! ```

use std::fmt;
use std::ops::{Add, Mul};

/// An immutable quaternion with components `a + bi + cj + dk`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Quaternion {
    a: f64,
    b: f64,
    c: f64,
    d: f64,
}

impl Quaternion {
    /// The zero quaternion, the additive identity.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);
    /// The imaginary unit `i`.
    pub const I: Self = Self::new(0.0, 1.0, 0.0, 0.0);
    /// The imaginary unit `j`.
    pub const J: Self = Self::new(0.0, 0.0, 1.0, 0.0);
    /// The imaginary unit `k`.
    pub const K: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// Constructs a quaternion from its real part `a` and imaginary
    /// coefficients `b`, `c`, and `d`.
    pub const fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self { a, b, c, d }
    }

    /// Returns the conjugate, which negates every imaginary coefficient.
    ///
    /// # Examples
    ///
    /// ```
    /// use persistent::quaternion::Quaternion;
    ///
    /// let q = Quaternion::new(1.0, 2.0, 3.0, 4.0);
    ///
    /// assert_eq!(q.conjugate(), Quaternion::new(1.0, -2.0, -3.0, -4.0));
    /// ```
    pub fn conjugate(&self) -> Self {
        Self::new(self.a, -self.b, -self.c, -self.d)
    }

    /// Returns the coefficients as `[a, b, c, d]`, in that order.
    pub fn coefficients(&self) -> [f64; 4] {
        [self.a, self.b, self.c, self.d]
    }
}

impl Add for Quaternion {
    type Output = Self;

    /// Adds two quaternions componentwise.
    fn add(self, other: Self) -> Self {
        Self::new(
            self.a + other.a,
            self.b + other.b,
            self.c + other.c,
            self.d + other.d,
        )
    }
}

impl Mul for Quaternion {
    type Output = Self;

    /// Multiplies two quaternions using the Hamilton product. The order of
    /// the operands matters: `i * j == k` but `j * i == -k`.
    fn mul(self, other: Self) -> Self {
        Self::new(
            self.a * other.a - self.b * other.b - self.c * other.c - self.d * other.d,
            self.a * other.b + self.b * other.a + self.c * other.d - self.d * other.c,
            self.a * other.c - self.b * other.d + self.c * other.a + self.d * other.b,
            self.a * other.d + self.b * other.c - self.c * other.b + self.d * other.a,
        )
    }
}

/// Renders the quaternion in its canonical human-readable form.
///
/// Terms appear in `a`, `i`, `j`, `k` order. A zero coefficient contributes
/// no term at all, a magnitude of exactly one is elided regardless of sign
/// (`i` and `-i`, never `1i` or `-1i`), and a negative term supplies its own
/// leading `-` so the output never contains `+-`. The zero quaternion is
/// rendered as `0`.
///
/// # Examples
///
/// ```
/// use persistent::quaternion::Quaternion;
///
/// assert_eq!(Quaternion::new(0.0, 1.0, -2.0, 0.0).to_string(), "i-2j");
/// assert_eq!(Quaternion::ZERO.to_string(), "0");
/// ```
impl fmt::Display for Quaternion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if *self == Self::ZERO {
            return f.write_str("0");
        }

        let mut wrote_term = false;
        if self.a != 0.0 {
            write!(f, "{}", self.a)?;
            wrote_term = true;
        }
        for (coefficient, unit) in [(self.b, "i"), (self.c, "j"), (self.d, "k")] {
            if coefficient == 0.0 {
                continue;
            }
            if coefficient > 0.0 && wrote_term {
                f.write_str("+")?;
            }
            if coefficient == 1.0 {
                f.write_str(unit)?;
            } else if coefficient == -1.0 {
                write!(f, "-{unit}")?;
            } else {
                // Negative coefficients bring their own minus sign.
                write!(f, "{coefficient}{unit}")?;
            }
            wrote_term = true;
        }
        Ok(())
    }
}
