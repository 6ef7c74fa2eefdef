//! Representation of integers.
//!
//! All arithmetic is 64-bit two's complement and wraps on overflow.

use std::{fmt, ops};

use super::Primitive;
use crate::sexp::{HeapSexp, Sexp};


#[derive(Clone, Copy, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Number(i64);


impl Number {
    pub const fn new(value: i64) -> Self {
        Number(value)
    }

    pub const fn value(&self) -> i64 {
        self.0
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub fn abs(self) -> Self {
        Number(self.0.wrapping_abs())
    }
}


impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}i64", self.0)
    }
}


impl ops::Neg for Number {
    type Output = Number;

    fn neg(self) -> Self::Output {
        Number(self.0.wrapping_neg())
    }
}

impl ops::AddAssign for Number {
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.wrapping_add(other.0);
    }
}

impl ops::SubAssign for Number {
    fn sub_assign(&mut self, other: Self) {
        self.0 = self.0.wrapping_sub(other.0);
    }
}

impl ops::MulAssign for Number {
    fn mul_assign(&mut self, other: Self) {
        self.0 = self.0.wrapping_mul(other.0);
    }
}

/// Truncating division. Callers must rule out a zero divisor.
impl ops::DivAssign for Number {
    fn div_assign(&mut self, other: Self) {
        self.0 = self.0.wrapping_div(other.0);
    }
}


impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number(value)
    }
}

impl From<Number> for Sexp {
    fn from(num: Number) -> Self {
        Sexp::Primitive(Primitive::Number(num))
    }
}

impl From<Number> for HeapSexp {
    fn from(num: Number) -> Self {
        HeapSexp::new(num.into())
    }
}

impl From<i64> for Sexp {
    fn from(value: i64) -> Self {
        Number(value).into()
    }
}
