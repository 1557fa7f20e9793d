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
use ratl::Rational;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
	Add,
	Sub,
	Mul,
	Div,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Comparison {
	Eq,
	Ne,
	Lt,
	Gt,
	Le,
	Ge,
}

/// Values joined by arithmetic operators. Multiplication and division bind
/// tighter than addition and subtraction; otherwise evaluation runs left to
/// right.
#[derive(Clone, Debug, PartialEq)]
pub struct Chain {
	pub first: Rational,
	pub rest: Vec<(Op, Rational)>,
}

/// One line of input: a chain, optionally compared against a second chain.
#[derive(Clone, Debug, PartialEq)]
pub struct Expression {
	pub lhs: Chain,
	pub comparison: Option<(Comparison, Chain)>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Outcome {
	Value(Rational),
	Truth(bool),
}

impl Op {
	pub fn from_token(token: &str) -> Option<Self> {
		match token {
			"+" => Some(Op::Add),
			"-" => Some(Op::Sub),
			"*" => Some(Op::Mul),
			"/" => Some(Op::Div),
			_ => None,
		}
	}

	fn apply(&self, lhs: Rational, rhs: Rational) -> Rational {
		match self {
			Op::Add => lhs + rhs,
			Op::Sub => lhs - rhs,
			Op::Mul => lhs * rhs,
			Op::Div => lhs / rhs,
		}
	}
}

impl Comparison {
	pub const ALL: [Comparison; 6] = [
		Comparison::Eq,
		Comparison::Ne,
		Comparison::Lt,
		Comparison::Gt,
		Comparison::Le,
		Comparison::Ge,
	];

	pub fn from_token(token: &str) -> Option<Self> {
		Comparison::ALL
			.into_iter()
			.find(|c| c.symbol() == token)
	}

	pub fn symbol(&self) -> &'static str {
		match self {
			Comparison::Eq => "==",
			Comparison::Ne => "!=",
			Comparison::Lt => "<",
			Comparison::Gt => ">",
			Comparison::Le => "<=",
			Comparison::Ge => ">=",
		}
	}

	pub fn test(&self, lhs: &Rational, rhs: &Rational) -> bool {
		match self {
			Comparison::Eq => lhs == rhs,
			Comparison::Ne => lhs != rhs,
			Comparison::Lt => lhs < rhs,
			Comparison::Gt => lhs > rhs,
			Comparison::Le => lhs <= rhs,
			Comparison::Ge => lhs >= rhs,
		}
	}
}

impl fmt::Display for Comparison {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.symbol())
	}
}

impl Chain {
	pub fn evaluate(&self) -> Rational {
		let mut total: Option<Rational> = None;
		let mut pending = Op::Add;
		let mut term = self.first;

		for &(op, value) in &self.rest {
			match op {
				Op::Mul | Op::Div => term = op.apply(term, value),
				Op::Add | Op::Sub => {
					total = Some(match total {
						None => term,
						Some(t) => pending.apply(t, term),
					});
					pending = op;
					term = value;
				},
			}
		}

		match total {
			None => term,
			Some(t) => pending.apply(t, term),
		}
	}
}

impl Expression {
	pub fn evaluate(&self) -> Outcome {
		let lhs = self.lhs.evaluate();
		match &self.comparison {
			None => Outcome::Value(lhs),
			Some((comparison, rhs)) => {
				let rhs = rhs.evaluate();
				log::debug!(
					"comparing {} {} {} ({:?})",
					lhs,
					comparison,
					rhs,
					lhs.compare(&rhs)
				);
				Outcome::Truth(comparison.test(&lhs, &rhs))
			},
		}
	}
}

/// Runs every comparison on the pair, in the order of [`Comparison::ALL`].
pub fn compare_all(lhs: &Rational, rhs: &Rational) -> Vec<(Comparison, bool)> {
	Comparison::ALL
		.into_iter()
		.map(|c| (c, c.test(lhs, rhs)))
		.collect()
}
