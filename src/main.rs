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
use crate::calc::expression::Expression;
use crate::config::config_file::Config;
use crate::parsing::filesystem::Filesystem;
use crate::parsing::parser::Parser as InputParser;
use crate::reports::result_reporter::{ResultReporter, Style};
use anyhow::{bail, Error};
use clap::{Parser, ValueEnum};
use ratl::util::integer::{gcd, lcm};
use std::io;
use std::io::Write;

mod calc;
mod config;
mod parsing;
mod reports;

#[derive(Parser)]
#[command(name = "ratl", version = "0.1", about = "Exact rational arithmetic")]
struct Cli {
	// ----------------
	// -- POSITIONAL --
	// ----------------
	/// The command to execute
	command: Directive,

	/// Operands, e.g. `1/2 + 1/3`. Read from the input file, or stdin, when
	/// omitted
	#[arg(required = false, allow_hyphen_values = true)]
	terms: Vec<String>,

	// -----------
	// -- FLAGS --
	// -----------
	/// Reads operands from this file, one line per evaluation
	#[arg(short)]
	file: Option<String>,

	/// Custom config file location (default: ~/.config/ratl/config.toml)
	#[arg(long)]
	config: Option<String>,

	/// Print results reduced to lowest terms
	#[arg(short, long)]
	reduce: bool,

	/// Also print results as decimals with this many places
	#[arg(short, long)]
	precision: Option<u32>,
}

impl Cli {
	/// The point is that this number exceeds what anyone wants; it's just to
	/// stop the program from printing e.g. millions of digits by accident
	const MAX_PRECISION: u32 = 50;

	/// Extra validations on top of what clap does
	fn validate(&self) -> Result<(), Error> {
		if self.file.is_some() && !self.terms.is_empty() {
			bail!("Operands may come from the command line or a file, not both");
		}

		Ok(())
	}

	/// Merges flags over config; flags win.
	fn style(&self, config: &Config) -> Result<Style, Error> {
		let style = Style {
			reduce: self.reduce || config.reduce().unwrap_or(false),
			precision: self.precision.or(config.precision()),
		};

		if let Some(prec) = style.precision {
			if prec > Cli::MAX_PRECISION {
				bail!("Maximum precision is {}", Cli::MAX_PRECISION);
			}
		}

		Ok(style)
	}
}

#[derive(ValueEnum, Clone, PartialEq)]
enum Directive {
	Eval, // evaluate expressions

	Cmp, // all six comparisons on pairs of values

	Gcd,
	Lcm,

	Reduce, // print values in lowest terms
}

fn main() -> Result<(), Error> {
	// use RUST_LOG env variable to override log level
	let log_env = env_logger::Env::default().default_filter_or("warn");
	env_logger::Builder::from_env(log_env)
		.format(|buf, record| {
			writeln!(buf, "[{}] {}", record.level(), record.args())
		})
		.init();

	let args = Cli::parse();
	args.validate()?;

	let fs = Filesystem::new();
	let config = fs.get_config(args.config.as_ref())?;
	let style = args.style(&config)?;

	let input = read_input(&args, &fs)?;
	if input.lines().is_empty() {
		bail!("No input");
	}

	let reporter = ResultReporter::new(style);

	match args.command {
		Directive::Eval => {
			let outcomes = input
				.expressions()?
				.iter()
				.map(Expression::evaluate)
				.collect::<Vec<_>>();
			reporter.print_outcomes(&outcomes);
		},
		Directive::Cmp => {
			reporter.comparison_table(&input.rational_pairs()?).print();
		},
		Directive::Gcd => {
			for (a, b) in input.integer_pairs()? {
				println!("{}", gcd(a.into(), b.into()));
			}
		},
		Directive::Lcm => {
			for (a, b) in input.integer_pairs()? {
				println!("{}", lcm(a.into(), b.into())?);
			}
		},
		Directive::Reduce => {
			let reporter = ResultReporter::new(Style {
				reduce: true,
				..style
			});
			reporter.print_values(&input.rationals()?);
		},
	}

	Ok(())
}

fn read_input(args: &Cli, fs: &Filesystem) -> Result<InputParser, Error> {
	if let Some(file) = &args.file {
		return InputParser::from_reader(fs.open(file)?);
	}

	if !args.terms.is_empty() {
		return Ok(InputParser::from_terms(&args.terms));
	}

	log::debug!("reading operands from stdin");
	InputParser::from_reader(io::stdin().lock())
}
