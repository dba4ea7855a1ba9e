use crate::interpreter::value::complex::{ComplexNumber, I};

/// The golden ratio `(1 + sqrt(5)) / 2`.
pub const PHI: f64 = 1.618_033_988_749_895;

/// The omega constant, the solution of `x * e^x = 1`.
pub const OMEGA: f64 = 0.567_143_290_409_783_8;

/// Named constants bound before any user scope exists.
pub const CONSTANTS: &[(&str, ComplexNumber)] =
    &[("pi", ComplexNumber::new(std::f64::consts::PI, 0.0)),
      ("e", ComplexNumber::new(std::f64::consts::E, 0.0)),
      ("i", I),
      ("phi", ComplexNumber::new(PHI, 0.0)),
      ("omega", ComplexNumber::new(OMEGA, 0.0))];
