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
use super::Rational;
use crate::util::integer::lcm;
use std::cmp::Ordering;

impl Rational {
	/// Orders two values by the numbers they denote.
	///
	/// Never fails. Any two zero-valued operands are equal, undefined included,
	/// and a comparison against the undefined value is always `Equal`, so that
	/// `==`, `<=` and `>=` hold while `!=`, `<` and `>` do not. This makes the
	/// relation non-transitive, which is why `Rational` is not `Ord`.
	pub fn compare(&self, other: &Self) -> Ordering {
		let (n1, d1) = (self.numerator(), self.denominator());
		let (n2, d2) = (other.numerator(), other.denominator());

		if n1 == 0 && n2 == 0 {
			return Ordering::Equal;
		}
		if n1 == n2 && d1 == d2 {
			return Ordering::Equal;
		}

		// two undefined values were handled above, so a shared denominator
		// here is non-zero
		if d1 == d2 {
			return if d1 < 0 { n2.cmp(&n1) } else { n1.cmp(&n2) };
		}

		// scale both numerators to the least common denominator; each
		// scaled term is at most 2^126 in magnitude
		let Ok(common) = lcm(d1 as i128, d2 as i128) else {
			// one side is undefined
			return Ordering::Equal;
		};
		let common = common as i128;
		let left = n1 as i128 * (common / d1 as i128);
		let right = n2 as i128 * (common / d2 as i128);
		left.cmp(&right)
	}
}

impl PartialEq for Rational {
	fn eq(&self, other: &Self) -> bool {
		self.compare(other) == Ordering::Equal
	}
}

impl PartialEq<i64> for Rational {
	fn eq(&self, other: &i64) -> bool {
		*self == Rational::from_integer(*other)
	}
}

impl PartialEq<Rational> for i64 {
	fn eq(&self, other: &Rational) -> bool {
		Rational::from_integer(*self) == *other
	}
}

impl PartialOrd for Rational {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.compare(other))
	}
}

impl PartialOrd<i64> for Rational {
	fn partial_cmp(&self, other: &i64) -> Option<Ordering> {
		Some(self.compare(&Rational::from_integer(*other)))
	}
}

impl PartialOrd<Rational> for i64 {
	fn partial_cmp(&self, other: &Rational) -> Option<Ordering> {
		Some(Rational::from_integer(*self).compare(other))
	}
}
