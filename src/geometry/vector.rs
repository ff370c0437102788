// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 the earclip developers
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use std::ops::{Add, Neg, Sub};

use num_traits::Zero;
use rug::Rational;

/// 3-component vector over exact rationals.
///
/// Equality and hashing are by exact component value, so the type doubles as
/// the key identifying a vertex coordinate inside one triangulation run.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ExactVector {
    pub x: Rational,
    pub y: Rational,
    pub z: Rational,
}

impl ExactVector {
    pub fn new(x: Rational, y: Rational, z: Rational) -> Self {
        Self { x, y, z }
    }

    pub fn zero() -> Self {
        Self {
            x: Rational::new(),
            y: Rational::new(),
            z: Rational::new(),
        }
    }

    pub fn from_ints(x: i64, y: i64, z: i64) -> Self {
        Self {
            x: Rational::from(x),
            y: Rational::from(y),
            z: Rational::from(z),
        }
    }

    /// Exact conversion; `None` for non-finite inputs.
    pub fn from_f64(x: f64, y: f64, z: f64) -> Option<Self> {
        Some(Self {
            x: Rational::from_f64(x)?,
            y: Rational::from_f64(y)?,
            z: Rational::from_f64(z)?,
        })
    }

    pub fn to_f64_array(&self) -> [f64; 3] {
        [self.x.to_f64(), self.y.to_f64(), self.z.to_f64()]
    }

    pub fn is_zero(&self) -> bool {
        self.x.is_zero() && self.y.is_zero() && self.z.is_zero()
    }

    pub fn dot(&self, other: &ExactVector) -> Rational {
        let mut acc = Rational::from(&self.x * &other.x);
        acc += Rational::from(&self.y * &other.y);
        acc += Rational::from(&self.z * &other.z);
        acc
    }

    pub fn cross(&self, other: &ExactVector) -> ExactVector {
        let mut x = Rational::from(&self.y * &other.z);
        x -= Rational::from(&self.z * &other.y);
        let mut y = Rational::from(&self.z * &other.x);
        y -= Rational::from(&self.x * &other.z);
        let mut z = Rational::from(&self.x * &other.y);
        z -= Rational::from(&self.y * &other.x);
        ExactVector { x, y, z }
    }

    pub fn length_squared(&self) -> Rational {
        self.dot(self)
    }

    pub fn scaled(&self, factor: &Rational) -> ExactVector {
        ExactVector {
            x: Rational::from(&self.x * factor),
            y: Rational::from(&self.y * factor),
            z: Rational::from(&self.z * factor),
        }
    }
}

impl Add<&ExactVector> for &ExactVector {
    type Output = ExactVector;

    fn add(self, rhs: &ExactVector) -> ExactVector {
        ExactVector {
            x: Rational::from(&self.x + &rhs.x),
            y: Rational::from(&self.y + &rhs.y),
            z: Rational::from(&self.z + &rhs.z),
        }
    }
}

impl Sub<&ExactVector> for &ExactVector {
    type Output = ExactVector;

    fn sub(self, rhs: &ExactVector) -> ExactVector {
        ExactVector {
            x: Rational::from(&self.x - &rhs.x),
            y: Rational::from(&self.y - &rhs.y),
            z: Rational::from(&self.z - &rhs.z),
        }
    }
}

impl Neg for &ExactVector {
    type Output = ExactVector;

    fn neg(self) -> ExactVector {
        ExactVector {
            x: Rational::from(-&self.x),
            y: Rational::from(-&self.y),
            z: Rational::from(-&self.z),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn equality_is_by_exact_value() {
        let a = ExactVector::new(
            Rational::from((1, 2)),
            Rational::from(0),
            Rational::from(3),
        );
        let b = ExactVector::new(
            Rational::from((2, 4)),
            Rational::from(0),
            Rational::from(3),
        );
        assert_eq!(a, b);

        let mut map = HashMap::new();
        map.insert(a, 1);
        assert_eq!(map.get(&b), Some(&1));
    }

    #[test]
    fn cross_is_anticommutative() {
        let a = ExactVector::from_ints(1, 2, 3);
        let b = ExactVector::from_ints(-4, 5, 7);
        assert_eq!(a.cross(&b), -&b.cross(&a));
    }

    #[test]
    fn dot_and_length() {
        let a = ExactVector::from_ints(1, -2, 2);
        assert_eq!(a.length_squared(), Rational::from(9));
        let b = ExactVector::from_ints(2, 1, 0);
        assert_eq!(a.dot(&b), Rational::from(0));
    }

    #[test]
    fn from_f64_is_exact_for_dyadics() {
        let v = ExactVector::from_f64(0.5, -0.25, 8.0).unwrap();
        assert_eq!(
            v,
            ExactVector::new(
                Rational::from((1, 2)),
                Rational::from((-1, 4)),
                Rational::from(8),
            )
        );
    }
}
