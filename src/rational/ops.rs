/* Copyright © 2024-2025 Adam Train <adam@adamtrain.net>
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program. If not, see <https://www.gnu.org/licenses/>.
 */
use super::{reduce, Rational};
use std::iter::{Product, Sum};
use std::ops::{
	Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign,
};

impl Rational {
	/// Sum of two values, or None if the result cannot be stored in `i64`
	/// terms. An undefined operand yields the undefined value.
	pub fn checked_add(self, rhs: Self) -> Option<Self> {
		self.combine(rhs, false)
	}

	pub fn checked_sub(self, rhs: Self) -> Option<Self> {
		self.combine(rhs, true)
	}

	/// Product of two values over the product of their denominators. The
	/// result is not reduced unless it would otherwise overflow.
	pub fn checked_mul(self, rhs: Self) -> Option<Self> {
		let (Rational::Defined(a), Rational::Defined(b)) = (self, rhs) else {
			return Some(Rational::Undefined);
		};

		Rational::narrow(
			a.numerator as i128 * b.numerator as i128,
			a.denominator as i128 * b.denominator as i128,
		)
	}

	/// Multiplies by the reciprocal of `rhs`. Dividing by zero yields the
	/// undefined value rather than an error.
	pub fn checked_div(self, rhs: Self) -> Option<Self> {
		let (Rational::Defined(a), Rational::Defined(b)) = (self, rhs) else {
			return Some(Rational::Undefined);
		};

		if b.numerator == 0 {
			log::debug!("{} / {} is undefined", self, rhs);
			return Some(Rational::Undefined);
		}

		let (numerator, denominator) = reduce(
			a.numerator as i128 * b.denominator as i128,
			a.denominator as i128 * b.numerator as i128,
		);
		Rational::narrow(numerator, denominator)
	}

	fn combine(self, rhs: Self, subtract: bool) -> Option<Self> {
		let (Rational::Defined(a), Rational::Defined(b)) = (self, rhs) else {
			return Some(Rational::Undefined);
		};

		let rhs_numerator = if subtract {
			-(b.numerator as i128)
		} else {
			b.numerator as i128
		};

		let (numerator, denominator) = if a.denominator == b.denominator {
			(a.numerator as i128 + rhs_numerator, a.denominator as i128)
		} else {
			// only i64::MIN reaches 2^63, so both cross terms reach 2^126
			// only when d1 == d2 == i64::MIN, which the branch above handles
			(
				a.numerator as i128 * b.denominator as i128
					+ rhs_numerator * a.denominator as i128,
				a.denominator as i128 * b.denominator as i128,
			)
		};

		let (numerator, denominator) = reduce(numerator, denominator);
		Rational::narrow(numerator, denominator)
	}
}

/// Unwraps a checked result, turning overflow into the undefined value.
fn or_undefined(result: Option<Rational>, op: &str) -> Rational {
	result.unwrap_or_else(|| {
		log::debug!("rational {} overflowed", op);
		Rational::Undefined
	})
}

// -----------------
// -- BOILERPLATE --
// -----------------

impl Add for Rational {
	type Output = Self;

	fn add(self, rhs: Self) -> Self::Output {
		or_undefined(self.checked_add(rhs), "addition")
	}
}

impl AddAssign for Rational {
	fn add_assign(&mut self, rhs: Self) {
		*self = *self + rhs;
	}
}

impl Sub for Rational {
	type Output = Self;

	fn sub(self, rhs: Self) -> Self::Output {
		or_undefined(self.checked_sub(rhs), "subtraction")
	}
}

impl SubAssign for Rational {
	fn sub_assign(&mut self, rhs: Self) {
		*self = *self - rhs;
	}
}

impl Mul for Rational {
	type Output = Self;

	fn mul(self, rhs: Self) -> Self::Output {
		or_undefined(self.checked_mul(rhs), "multiplication")
	}
}

impl MulAssign for Rational {
	fn mul_assign(&mut self, rhs: Self) {
		*self = *self * rhs;
	}
}

impl Div for Rational {
	type Output = Self;

	fn div(self, rhs: Self) -> Self::Output {
		or_undefined(self.checked_div(rhs), "division")
	}
}

impl DivAssign for Rational {
	fn div_assign(&mut self, rhs: Self) {
		*self = *self / rhs;
	}
}

impl Neg for Rational {
	type Output = Self;

	fn neg(self) -> Self::Output {
		match self {
			Rational::Defined(f) => or_undefined(
				Rational::narrow(-(f.numerator as i128), f.denominator as i128),
				"negation",
			),
			Rational::Undefined => Rational::Undefined,
		}
	}
}

impl Sum for Rational {
	fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
		iter.fold(Rational::from_integer(0), |acc, r| acc + r)
	}
}

impl Product for Rational {
	fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
		iter.fold(Rational::from_integer(1), |acc, r| acc * r)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn r(numerator: i64, denominator: i64) -> Rational {
		Rational::from_pair(numerator, denominator).unwrap()
	}

	fn terms(r: Rational) -> (i64, i64) {
		(r.numerator(), r.denominator())
	}

	mod arithmetic {
		use super::*;

		mod add {
			use super::*;

			#[test]
			fn test_unlike_denominators() {
				let sum = r(1, 2) + r(1, 3);
				assert!(sum == r(5, 6));
				assert_eq!(terms(sum), (5, 6));
			}

			#[test]
			fn test_like_denominators() {
				assert_eq!(terms(r(1, 8) + r(3, 8)), (1, 2));
				assert_eq!(terms(r(1, 5) + r(1, 5)), (2, 5));
			}

			#[test]
			fn test_reduces_result() {
				assert_eq!(terms(r(1, 6) + r(1, 3)), (1, 2));
			}

			#[test]
			fn test_zero_is_ordinary() {
				let sum = r(0, 1) + r(0, 1);
				assert!(!sum.is_undefined());
				assert!(sum.is_zero());
				assert_eq!(terms(sum), (0, 1));
				assert_eq!(terms(r(0, 4) + r(3, 4)), (3, 4));
			}

			#[test]
			fn test_undefined_propagates() {
				let sum = Rational::new() + Rational::new();
				assert_eq!(sum.numerator(), 0);
				assert!(sum.is_undefined());
				assert!((Rational::new() + r(1, 2)).is_undefined());
				assert!((r(1, 2) + Rational::new()).is_undefined());
			}

			#[test]
			fn test_operands_untouched() {
				let a = r(2, 4);
				let b = r(1, 4);
				let _ = a + b;
				assert_eq!(terms(a), (2, 4));
				assert_eq!(terms(b), (1, 4));
			}

			#[test]
			fn test_add_assign() {
				let mut a = r(1, 4);
				a += r(1, 4);
				assert_eq!(terms(a), (1, 2));
			}

			#[test]
			fn test_overflow() {
				let a = r(i64::MAX, 1);
				assert!(a.checked_add(r(1, 1)).is_none());
				assert!((a + r(1, 1)).is_undefined());
				assert!(r(i64::MIN, 3).checked_add(r(i64::MIN, 5)).is_none());
			}

			#[test]
			fn test_extreme_terms_that_fit() {
				let sum = r(i64::MIN, 4).checked_add(r(i64::MIN, 4)).unwrap();
				assert_eq!(terms(sum), (-(1i64 << 62), 1));
				let sum = r(i64::MIN, i64::MIN).checked_add(r(i64::MIN, i64::MIN)).unwrap();
				assert_eq!(terms(sum), (-2, -1));
			}
		}

		mod sub {
			use super::*;

			#[test]
			fn test_unlike_denominators() {
				assert_eq!(terms(r(1, 2) - r(1, 3)), (1, 6));
			}

			#[test]
			fn test_like_denominators() {
				assert_eq!(terms(r(5, 9) - r(2, 9)), (1, 3));
			}

			#[test]
			fn test_negative_result() {
				let diff = r(1, 4) - r(3, 4);
				assert!(diff == r(-1, 2));
				assert_eq!(terms(diff), (-1, 2));
			}

			#[test]
			fn test_self_is_zero() {
				let diff = r(3, 7) - r(3, 7);
				assert!(diff.is_zero());
				assert_eq!(terms(diff), (0, 7));
			}

			#[test]
			fn test_undefined_propagates() {
				assert!((Rational::new() - Rational::new()).is_undefined());
				assert!((r(1, 2) - Rational::new()).is_undefined());
			}

			#[test]
			fn test_sub_assign() {
				let mut a = r(1, 2);
				a -= r(1, 6);
				assert_eq!(terms(a), (1, 3));
			}
		}

		mod mul {
			use super::*;

			#[test]
			fn test_basic() {
				let product = r(2, 3) * r(3, 4);
				assert!(product == r(1, 2));
				// not reduced
				assert_eq!(terms(product), (6, 12));
			}

			#[test]
			fn test_signs() {
				assert!(r(-2, 3) * r(3, -4) == r(1, 2));
				assert!(r(-2, 3) * r(3, 4) == r(-1, 2));
			}

			#[test]
			fn test_by_zero() {
				let product = r(0, 5) * r(3, 4);
				assert!(product.is_zero());
				assert!(!product.is_undefined());
				assert_eq!(terms(r(0, 4) * r(3, 5)), (0, 20));
			}

			#[test]
			fn test_undefined_propagates() {
				assert!((Rational::new() * r(3, 4)).is_undefined());
				assert!((r(3, 4) * Rational::new()).is_undefined());
			}

			#[test]
			fn test_reduces_only_to_avoid_overflow() {
				let big = r(i64::MAX, 2);
				let product = big * r(2, i64::MAX);
				assert!(product == 1i64);
				assert!(r(i64::MAX, 1).checked_mul(r(3, 1)).is_none());
			}

			#[test]
			fn test_mul_assign() {
				let mut a = r(1, 2);
				a *= r(4, 1);
				assert!(a == 2i64);
			}
		}

		mod div {
			use super::*;

			#[test]
			fn test_basic() {
				assert_eq!(terms(r(1, 2) / r(3, 4)), (2, 3));
				assert_eq!(terms(r(3, 4) / r(3, 4)), (1, 1));
			}

			#[test]
			fn test_negative_divisor() {
				let q = r(1, 2) / r(-1, 4);
				assert!(q == -2i64);
				assert_eq!(terms(q), (2, -1));
			}

			#[test]
			fn test_by_zero_is_undefined() {
				assert!((r(1, 2) / r(0, 3)).is_undefined());
				assert_eq!(r(1, 2).checked_div(r(0, 1)), Some(Rational::new()));
			}

			#[test]
			fn test_zero_dividend() {
				let q = r(0, 3) / r(1, 2);
				assert!(q.is_zero());
				assert!(!q.is_undefined());
				assert_eq!(terms(q), (0, 3));
			}

			#[test]
			fn test_undefined_propagates() {
				assert!((Rational::new() / r(1, 2)).is_undefined());
				assert!((r(1, 2) / Rational::new()).is_undefined());
			}

			#[test]
			fn test_div_assign() {
				let mut a = r(3, 5);
				a /= r(3, 10);
				assert!(a == 2i64);
			}
		}

		mod negation {
			use super::*;

			#[test]
			fn test_negation() {
				assert_eq!(terms(-r(3, 4)), (-3, 4));
				assert_eq!(terms(-r(3, -4)), (-3, -4));
				assert!((-Rational::new()).is_undefined());
			}

			#[test]
			fn test_negate_minimum() {
				let n = -r(i64::MIN, 2);
				assert!(n == r(1i64 << 62, 1));
				assert!((-r(i64::MIN, 1)).is_undefined());
			}
		}

		mod aggregation {
			use super::*;

			#[test]
			fn test_sum() {
				let total: Rational =
					vec![r(1, 2), r(1, 3), r(1, 6)].into_iter().sum();
				assert!(total == 1i64);
			}

			#[test]
			fn test_sum_empty_is_zero() {
				let total: Rational = Vec::<Rational>::new().into_iter().sum();
				assert!(total.is_zero());
			}

			#[test]
			fn test_product() {
				let total: Rational =
					vec![r(1, 2), r(2, 3), r(3, 4)].into_iter().product();
				assert!(total == r(1, 4));
			}

			#[test]
			fn test_undefined_poisons_sum() {
				let total: Rational =
					vec![r(1, 2), Rational::new()].into_iter().sum();
				assert!(total.is_undefined());
			}
		}
	}
}
