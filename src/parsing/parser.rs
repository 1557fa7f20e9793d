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
use crate::calc::expression::{Chain, Comparison, Expression, Op};
use anyhow::{anyhow, bail, Error};
use ratl::Rational;
use std::io::BufRead;

/// A non-blank line of input, with comments removed.
pub struct Line {
	/// 1-based, for error messages.
	pub number: usize,
	pub text: String,
}

pub struct Parser {
	lines: Vec<Line>,
}

impl Parser {
	/// Reads every line of the source, dropping `#` comments and blank lines.
	pub fn from_reader(reader: impl BufRead) -> Result<Self, Error> {
		let mut lines = Vec::new();
		for (i, line) in reader.lines().enumerate() {
			// Chop comments out
			let l = line?
				.split('#')
				.next()
				.unwrap_or_default()
				.trim()
				.to_string();

			if l.is_empty() {
				continue;
			}

			lines.push(Line {
				number: i + 1,
				text: l,
			});
		}

		Ok(Self { lines })
	}

	/// Treats command-line terms as a single line of input.
	pub fn from_terms(terms: &[String]) -> Self {
		let text = terms.join(" ");
		let lines = if text.trim().is_empty() {
			vec![]
		} else {
			vec![Line { number: 1, text }]
		};
		Self { lines }
	}

	pub fn lines(&self) -> &[Line] {
		&self.lines
	}

	pub fn expressions(&self) -> Result<Vec<Expression>, Error> {
		self.lines
			.iter()
			.map(|line| {
				parse_expression(&line.text)
					.map_err(|e| anyhow!("{} (line {})", e, line.number))
			})
			.collect()
	}

	/// Every line as exactly two rationals.
	pub fn rational_pairs(&self) -> Result<Vec<(Rational, Rational)>, Error> {
		self.pairs(|token| Ok(token.parse::<Rational>()?))
	}

	/// Every line as exactly two integers.
	pub fn integer_pairs(&self) -> Result<Vec<(i64, i64)>, Error> {
		self.pairs(|token| {
			token
				.parse::<i64>()
				.map_err(|e| anyhow!("invalid integer '{}': {}", token, e))
		})
	}

	/// Every whitespace-separated token of every line as a rational, grouped
	/// by line.
	pub fn rationals(&self) -> Result<Vec<Vec<Rational>>, Error> {
		self.lines
			.iter()
			.map(|line| {
				line.text
					.split_whitespace()
					.map(|token| {
						token.parse::<Rational>().map_err(|e| {
							anyhow!("{} (line {})", e, line.number)
						})
					})
					.collect()
			})
			.collect()
	}

	fn pairs<T>(
		&self,
		parse: impl Fn(&str) -> Result<T, Error>,
	) -> Result<Vec<(T, T)>, Error> {
		let mut out = Vec::new();
		for line in &self.lines {
			let tokens: Vec<&str> = line.text.split_whitespace().collect();
			if tokens.len() != 2 {
				bail!(
					"Expected two operands, found {} (line {})",
					tokens.len(),
					line.number
				);
			}

			let lhs = parse(tokens[0])
				.map_err(|e| anyhow!("{} (line {})", e, line.number))?;
			let rhs = parse(tokens[1])
				.map_err(|e| anyhow!("{} (line {})", e, line.number))?;
			out.push((lhs, rhs));
		}
		Ok(out)
	}
}

/// Parses `chain [comparison chain]`, where a chain is whitespace-separated
/// values and arithmetic operators, e.g. `1/2 + -3/4 * 2 < 1`.
pub fn parse_expression(text: &str) -> Result<Expression, Error> {
	let tokens: Vec<&str> = text.split_whitespace().collect();

	let split = tokens
		.iter()
		.position(|token| Comparison::from_token(token).is_some());

	let (lhs, comparison) = match split {
		None => (parse_chain(&tokens)?, None),
		Some(i) => {
			let comparison = Comparison::from_token(tokens[i])
				.ok_or_else(|| anyhow!("Invalid comparison '{}'", tokens[i]))?;
			(
				parse_chain(&tokens[..i])?,
				Some((comparison, parse_chain(&tokens[i + 1..])?)),
			)
		},
	};

	Ok(Expression { lhs, comparison })
}

fn parse_chain(tokens: &[&str]) -> Result<Chain, Error> {
	let Some((first, rest)) = tokens.split_first() else {
		bail!("Missing operand");
	};

	let first = parse_value(first)?;
	if rest.len() % 2 != 0 {
		bail!("Missing operand after '{}'", rest[rest.len() - 1]);
	}

	let rest = rest
		.chunks(2)
		.map(|pair| {
			let op = Op::from_token(pair[0])
				.ok_or_else(|| anyhow!("Expected an operator, found '{}'", pair[0]))?;
			Ok((op, parse_value(pair[1])?))
		})
		.collect::<Result<Vec<_>, Error>>()?;

	Ok(Chain { first, rest })
}

fn parse_value(token: &str) -> Result<Rational, Error> {
	if Comparison::from_token(token).is_some() {
		bail!("Only one comparison is allowed per line");
	}
	Ok(token.parse::<Rational>()?)
}
