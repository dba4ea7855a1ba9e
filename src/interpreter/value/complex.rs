use std::{fmt::Display, ops};

use ordered_float::OrderedFloat;

/// `0.0` as a complex number.
pub const ZERO: ComplexNumber = ComplexNumber::new(0.0, 0.0);
/// `1.0` as a complex number.
pub const ONE: ComplexNumber = ComplexNumber::new(1.0, 0.0);
/// The imaginary unit.
pub const I: ComplexNumber = ComplexNumber::new(0.0, 1.0);

/// A double-precision complex number.
///
/// This is the payload of every Scalar value. A scalar is real when its
/// imaginary part is exactly zero; arithmetic keeps real operands on the
/// plain `f64` path so that real results are bit-identical to `f64` math.
#[derive(Debug, Clone, Copy)]
pub struct ComplexNumber {
    /// The real part of the number.
    pub real:      f64,
    /// The imaginary part of the number.
    pub imaginary: f64,
}

impl Display for ComplexNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.real, self.imaginary) {
            (real, 0.0) => write!(f, "{real}"),
            (0.0, imaginary) => write!(f, "{imaginary}i"),
            (real, imaginary) if imaginary > 0.0 => write!(f, "{real} + {imaginary}i"),
            (real, imaginary) => write!(f, "{real} - {}i", -imaginary),
        }
    }
}

impl ComplexNumber {
    /// Constructs a new complex number from real and imaginary components.
    ///
    /// # Example
    /// ```
    /// use numora::interpreter::value::complex::ComplexNumber;
    /// let c = ComplexNumber::new(5.0, -1.0);
    /// assert_eq!(c.real, 5.0);
    /// assert_eq!(c.imaginary, -1.0);
    /// ```
    #[must_use]
    pub const fn new(real: f64, imaginary: f64) -> Self {
        Self { real, imaginary }
    }

    /// Returns `true` when the imaginary part is exactly zero.
    #[must_use]
    pub const fn is_real(&self) -> bool {
        self.imaginary == 0.0
    }

    /// Magnitude `sqrt(re² + im²)`; used for ordering in reductions.
    ///
    /// # Example
    /// ```
    /// use numora::interpreter::value::complex::ComplexNumber;
    /// let c = ComplexNumber::new(3.0, 4.0);
    /// assert_eq!(c.abs(), 5.0);
    /// ```
    #[must_use]
    pub fn abs(&self) -> f64 {
        self.real.hypot(self.imaginary)
    }

    #[must_use]
    pub const fn conj(&self) -> Self {
        Self { real:      self.real,
               imaginary: -self.imaginary, }
    }

    /// Argument (phase angle) in radians.
    #[must_use]
    pub fn arg(self) -> f64 {
        self.imaginary.atan2(self.real)
    }

    /// Raises `self` to a complex power, `exp(w * ln z)`.
    ///
    /// `0 ^ 0` is `1`; `0` raised to anything else is `0`.
    ///
    /// # Example
    /// ```
    /// use numora::interpreter::value::complex::ComplexNumber;
    /// let minus_one = ComplexNumber::new(-1.0, 0.0);
    /// let root = minus_one.powc(ComplexNumber::new(0.5, 0.0));
    /// assert!(root.real.abs() < 1e-12);
    /// assert!((root.imaginary - 1.0).abs() < 1e-12);
    /// ```
    #[must_use]
    pub fn powc(self, exponent: Self) -> Self {
        if self.real == 0.0 && self.imaginary == 0.0 {
            return if exponent.real == 0.0 && exponent.imaginary == 0.0 {
                ONE
            } else {
                Self::new(0.0, 0.0)
            };
        }

        (exponent * self.ln()).exp()
    }

    /// Principal square root.
    ///
    /// # Example
    /// ```
    /// use numora::interpreter::value::complex::ComplexNumber;
    /// let s = ComplexNumber::new(-9.0, 0.0).sqrt();
    /// assert_eq!(s, ComplexNumber::new(0.0, 3.0));
    /// ```
    #[must_use]
    pub fn sqrt(self) -> Self {
        if self.is_real() && self.real >= 0.0 {
            return Self::new(self.real.sqrt(), 0.0);
        }

        let a = self.real;
        let b = self.imaginary;
        let r = a.hypot(b);

        let real = f64::midpoint(r, a).sqrt();
        let imaginary = ((r - a) / 2.0).sqrt().copysign(if b == 0.0 { 1.0 } else { b });

        Self { real, imaginary }
    }

    #[must_use]
    pub fn sin(self) -> Self {
        Self { real:      self.real.sin() * self.imaginary.cosh(),
               imaginary: self.real.cos() * self.imaginary.sinh(), }
    }

    #[must_use]
    pub fn cos(self) -> Self {
        Self { real:      self.real.cos() * self.imaginary.cosh(),
               imaginary: -self.real.sin() * self.imaginary.sinh(), }
    }

    #[must_use]
    pub fn tan(self) -> Self {
        if self.is_real() {
            return Self::new(self.real.tan(), 0.0);
        }
        self.sin() / self.cos()
    }

    #[must_use]
    pub fn sinh(self) -> Self {
        Self { real:      self.real.sinh() * self.imaginary.cos(),
               imaginary: self.real.cosh() * self.imaginary.sin(), }
    }

    #[must_use]
    pub fn cosh(self) -> Self {
        Self { real:      self.real.cosh() * self.imaginary.cos(),
               imaginary: self.real.sinh() * self.imaginary.sin(), }
    }

    #[must_use]
    pub fn tanh(self) -> Self {
        if self.is_real() {
            return Self::new(self.real.tanh(), 0.0);
        }
        self.sinh() / self.cosh()
    }

    /// Inverse hyperbolic sine, `ln(z + sqrt(z² + 1))`.
    #[must_use]
    pub fn arsinh(self) -> Self {
        if self.is_real() {
            return Self::new(self.real.asinh(), 0.0);
        }
        (self + (self * self + ONE).sqrt()).ln()
    }

    #[must_use]
    pub fn exp(self) -> Self {
        let exp_r = self.real.exp();
        if self.is_real() {
            return Self::new(exp_r, 0.0);
        }
        Self { real:      exp_r * self.imaginary.cos(),
               imaginary: exp_r * self.imaginary.sin(), }
    }

    /// Natural logarithm (principal branch).
    ///
    /// # Example
    /// ```
    /// use numora::interpreter::value::complex::ComplexNumber;
    /// let ln = ComplexNumber::new(-1.0, 0.0).ln();
    /// assert_eq!(ln.real, 0.0);
    /// assert!((ln.imaginary - std::f64::consts::PI).abs() < 1e-12);
    /// ```
    #[must_use]
    pub fn ln(self) -> Self {
        if self.is_real() && self.real > 0.0 {
            return Self::new(self.real.ln(), 0.0);
        }
        Self { real:      self.abs().ln(),
               imaginary: self.arg(), }
    }
}

impl ops::Neg for ComplexNumber {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self { real:      -self.real,
               imaginary: -self.imaginary, }
    }
}

impl ops::Add for ComplexNumber {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self { real:      self.real + rhs.real,
               imaginary: self.imaginary + rhs.imaginary, }
    }
}

impl ops::AddAssign for ComplexNumber {
    fn add_assign(&mut self, rhs: Self) {
        self.real += rhs.real;
        self.imaginary += rhs.imaginary;
    }
}

impl ops::Sub for ComplexNumber {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self { real:      self.real - rhs.real,
               imaginary: self.imaginary - rhs.imaginary, }
    }
}

impl ops::Mul for ComplexNumber {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        if self.is_real() && rhs.is_real() {
            return Self::new(self.real * rhs.real, 0.0);
        }
        Self { real:      self.real
                              .mul_add(rhs.real, -(self.imaginary * rhs.imaginary)),
               imaginary: self.real.mul_add(rhs.imaginary, self.imaginary * rhs.real), }
    }
}

impl ops::Div for ComplexNumber {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        if self.is_real() && rhs.is_real() {
            return Self::new(self.real / rhs.real, 0.0);
        }
        let denom = rhs.real.mul_add(rhs.real, rhs.imaginary * rhs.imaginary);
        Self { real:      self.real.mul_add(rhs.real, self.imaginary * rhs.imaginary) / denom,
               imaginary: self.imaginary
                              .mul_add(rhs.real, -(self.real * rhs.imaginary))
                          / denom, }
    }
}

impl<T> From<T> for ComplexNumber where T: Into<f64>
{
    fn from(value: T) -> Self {
        Self { real:      value.into(),
               imaginary: 0.0, }
    }
}

impl PartialEq for ComplexNumber {
    fn eq(&self, other: &Self) -> bool {
        OrderedFloat(self.real) == OrderedFloat(other.real)
        && OrderedFloat(self.imaginary) == OrderedFloat(other.imaginary)
    }
}

impl Eq for ComplexNumber {}
