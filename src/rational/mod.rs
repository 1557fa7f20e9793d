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
use crate::error::RationalError;
use crate::util::integer::gcd;

mod cmp;
mod ops;
mod text;

/// A ratio of two `i64`s, or the undefined value.
///
/// Values are not reduced on construction; two values are equal when they
/// denote the same number, whatever their stored terms (so 2/4 == 1/2). Call
/// [`Rational::reduced`] to shrink the terms explicitly.
///
/// The undefined value reads as `0/0` and is what arithmetic returns when it
/// has no meaningful answer: an undefined operand, division by zero, or a
/// result too large to store.
#[derive(Clone, Copy, Debug, Default)]
pub enum Rational {
	Defined(Fraction),
	#[default]
	Undefined,
}

/// The stored terms of a defined rational. The denominator is never zero.
#[derive(Clone, Copy, Debug)]
pub struct Fraction {
	numerator: i64,
	denominator: i64,
}

impl Fraction {
	pub fn numerator(&self) -> i64 {
		self.numerator
	}

	pub fn denominator(&self) -> i64 {
		self.denominator
	}
}

impl Rational {
	pub fn new() -> Self {
		Rational::Undefined
	}

	pub fn from_integer(value: i64) -> Self {
		Rational::Defined(Fraction {
			numerator: value,
			denominator: 1,
		})
	}

	/// Creates a rational with exactly the given terms. `0/0` yields the
	/// undefined value; any other zero denominator is an error.
	pub fn from_pair(
		numerator: i64,
		denominator: i64,
	) -> Result<Self, RationalError> {
		match (numerator, denominator) {
			(0, 0) => Ok(Rational::Undefined),
			(_, 0) => Err(RationalError::Construction),
			_ => Ok(Rational::Defined(Fraction {
				numerator,
				denominator,
			})),
		}
	}

	pub fn numerator(&self) -> i64 {
		match self {
			Rational::Defined(f) => f.numerator,
			Rational::Undefined => 0,
		}
	}

	pub fn denominator(&self) -> i64 {
		match self {
			Rational::Defined(f) => f.denominator,
			Rational::Undefined => 0,
		}
	}

	pub fn is_undefined(&self) -> bool {
		matches!(self, Rational::Undefined)
	}

	/// True for a defined value equal to zero. The undefined value is not zero.
	pub fn is_zero(&self) -> bool {
		matches!(self, Rational::Defined(f) if f.numerator == 0)
	}

	/// Divides both terms by their greatest common divisor. Signs are left
	/// where they are, so 2/-4 reduces to 1/-2.
	pub fn reduced(&self) -> Self {
		match self {
			Rational::Defined(f) => {
				let (numerator, denominator) =
					reduce(f.numerator as i128, f.denominator as i128);
				// dividing by a common factor never grows the magnitude
				Self::narrow(numerator, denominator).unwrap_or(*self)
			},
			Rational::Undefined => Rational::Undefined,
		}
	}

	/// Renders the value in decimal, truncated to the given number of places.
	/// Returns None for the undefined value.
	pub fn to_decimal(&self, places: u32) -> Option<String> {
		let Rational::Defined(f) = self else {
			return None;
		};

		let denominator = f.denominator.unsigned_abs() as u128;
		let numerator = f.numerator.unsigned_abs() as u128;
		let is_negative = (f.numerator < 0) ^ (f.denominator < 0);

		let integer_part = numerator / denominator;
		let mut remainder = numerator % denominator;

		let mut fraction_str = String::new();
		let mut all_zero = integer_part == 0;
		for _ in 0..places {
			remainder *= 10;
			let digit = (remainder / denominator) as u8;
			remainder %= denominator;
			all_zero &= digit == 0;
			fraction_str.push(char::from(b'0' + digit));
		}

		let formatted = if fraction_str.is_empty() {
			integer_part.to_string()
		} else {
			format!("{}.{}", integer_part, fraction_str)
		};

		if is_negative && !all_zero {
			Some(format!("-{}", formatted))
		} else {
			Some(formatted)
		}
	}

	/// Stores widened terms back into a rational, reducing first if they do
	/// not fit. None if they do not fit even after reduction.
	pub(crate) fn narrow(numerator: i128, denominator: i128) -> Option<Self> {
		let fit = |numerator: i128, denominator: i128| {
			Some(Rational::Defined(Fraction {
				numerator: i64::try_from(numerator).ok()?,
				denominator: i64::try_from(denominator).ok()?,
			}))
		};

		fit(numerator, denominator).or_else(|| {
			let (numerator, denominator) = reduce(numerator, denominator);
			fit(numerator, denominator)
		})
	}
}

/// Divides both terms by their gcd, which is 1 (a no-op) when either is zero.
pub(crate) fn reduce(numerator: i128, denominator: i128) -> (i128, i128) {
	// both terms bounded by i128::MAX, so the gcd is too
	let factor = gcd(numerator, denominator) as i128;
	log::trace!("reducing {}/{} by {}", numerator, denominator, factor);
	(numerator / factor, denominator / factor)
}

impl From<i64> for Rational {
	fn from(value: i64) -> Self {
		Rational::from_integer(value)
	}
}

impl TryFrom<(i64, i64)> for Rational {
	type Error = RationalError;

	fn try_from(
		(numerator, denominator): (i64, i64),
	) -> Result<Self, Self::Error> {
		Rational::from_pair(numerator, denominator)
	}
}
