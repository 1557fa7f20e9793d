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

/// Greatest common divisor of the absolute values of `a` and `b`, by Euclid's
/// algorithm.
///
/// If either input is zero this returns 1 rather than the other input, so the
/// result can always be used as a divisor to scale a fraction with a zero part.
pub fn gcd(a: i128, b: i128) -> u128 {
	let mut a = a.unsigned_abs();
	let mut b = b.unsigned_abs();
	if a == 0 || b == 0 {
		return 1;
	}

	while b != 0 {
		let temp = b;
		b = a % b;
		a = temp;
	}
	a
}

/// Least common multiple of the absolute values of `a` and `b`.
///
/// A multiple of zero is of no use as a common denominator, so a zero input is
/// a domain error.
pub fn lcm(a: i128, b: i128) -> Result<u128, RationalError> {
	if a == 0 || b == 0 {
		return Err(RationalError::Domain);
	}

	Ok(a.unsigned_abs() / gcd(a, b) * b.unsigned_abs())
}
