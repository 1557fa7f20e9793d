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
use crate::error::RationalError;
use std::fmt;
use std::str::FromStr;

impl Rational {
	/// Reads one rational from the start of `input`, skipping leading
	/// whitespace, and returns it along with the unread remainder.
	///
	/// Accepts `<int>` or `<int>/<int>` with no whitespace around the slash.
	/// A zero denominator is rejected, `0/0` included.
	pub fn parse_prefix(input: &str) -> Result<(Self, &str), RationalError> {
		let input = input.trim_start();
		let (numerator, rest) = split_integer(input)?;

		let Some(rest) = rest.strip_prefix('/') else {
			return Ok((Rational::from_integer(numerator), rest));
		};

		let (denominator, rest) = split_integer(rest)?;
		if denominator == 0 {
			return Err(RationalError::Parse(format!(
				"zero denominator in '{}'",
				&input[..input.len() - rest.len()]
			)));
		}

		Ok((Rational::from_pair(numerator, denominator)?, rest))
	}

	/// Parses a value from the start of `input` into `self`, returning the
	/// unread remainder. On failure `self` is left as it was.
	pub fn read_into<'a>(
		&mut self,
		input: &'a str,
	) -> Result<&'a str, RationalError> {
		let (value, rest) = Rational::parse_prefix(input)?;
		*self = value;
		Ok(rest)
	}
}

/// Splits an optionally signed decimal integer off the front of `input`.
fn split_integer(input: &str) -> Result<(i64, &str), RationalError> {
	let sign_len = usize::from(input.starts_with(['+', '-']));
	let digits = input[sign_len..]
		.bytes()
		.take_while(u8::is_ascii_digit)
		.count();

	if digits == 0 {
		let found = input.split_whitespace().next().unwrap_or_default();
		return Err(RationalError::Parse(format!(
			"expected an integer, found '{}'",
			found
		)));
	}

	let (token, rest) = input.split_at(sign_len + digits);
	let value = token
		.parse::<i64>()
		.map_err(|e| RationalError::Parse(format!("{}: {}", token, e)))?;
	Ok((value, rest))
}

impl FromStr for Rational {
	type Err = RationalError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let (value, rest) = Rational::parse_prefix(s.trim())?;
		if !rest.is_empty() {
			return Err(RationalError::Parse(format!(
				"unexpected trailing input '{}'",
				rest
			)));
		}
		Ok(value)
	}
}

impl fmt::Display for Rational {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}/{}", self.numerator(), self.denominator())
	}
}
