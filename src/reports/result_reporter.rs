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
use crate::calc::expression::{compare_all, Comparison, Outcome};
use crate::reports::table::Table;
use ratl::Rational;

/// How rationals are written out.
#[derive(Clone, Copy, Debug, Default)]
pub struct Style {
	pub reduce: bool,
	pub precision: Option<u32>,
}

pub struct ResultReporter {
	style: Style,
}

impl ResultReporter {
	pub fn new(style: Style) -> Self {
		Self { style }
	}

	pub fn format_value(&self, value: &Rational) -> String {
		if value.is_undefined() {
			return format!("{} (undefined)", value);
		}

		let shown = if self.style.reduce {
			value.reduced()
		} else {
			*value
		};

		match self.style.precision.and_then(|p| value.to_decimal(p)) {
			Some(decimal) => format!("{} ~ {}", shown, decimal),
			None => shown.to_string(),
		}
	}

	pub fn format_outcome(&self, outcome: &Outcome) -> String {
		match outcome {
			Outcome::Value(value) => self.format_value(value),
			Outcome::Truth(truth) => truth.to_string(),
		}
	}

	pub fn print_outcomes(&self, outcomes: &[Outcome]) {
		for outcome in outcomes {
			println!("{}", self.format_outcome(outcome));
		}
	}

	/// One line per input line, values separated by spaces.
	pub fn print_values(&self, rows: &[Vec<Rational>]) {
		for row in rows {
			let line = row
				.iter()
				.map(|value| self.format_value(value))
				.collect::<Vec<_>>()
				.join(" ");
			println!("{}", line);
		}
	}

	/// Tabulates all six comparisons for each pair.
	pub fn comparison_table(&self, pairs: &[(Rational, Rational)]) -> Table {
		let mut table = Table::new(2 + Comparison::ALL.len());

		let mut header = vec!["Left", "Right"];
		header.extend(Comparison::ALL.iter().map(|c| c.symbol()));
		table.add_header(header);
		table.add_separator();

		for (lhs, rhs) in pairs {
			let mut row = vec![self.format_value(lhs), self.format_value(rhs)];
			row.extend(
				compare_all(lhs, rhs)
					.into_iter()
					.map(|(_, result)| result.to_string()),
			);
			table.add_row(row);
		}

		table
	}
}
