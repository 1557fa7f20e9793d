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
use std::fs;
use std::process::Command;

const EMPTY_CONFIG: &str = "tests/test_data/empty.toml";

/// Dynamically collects test cases from a given directory.
fn collect_test_cases(subfolder: &str) -> Vec<(String, String)> {
	let dir_path = format!("tests/test_data/{}", subfolder);

	let mut test_cases = vec![];

	if let Ok(entries) = fs::read_dir(&dir_path) {
		let mut inputs = vec![];
		let mut outputs = vec![];

		for entry in entries.flatten() {
			let file_name =
				entry.file_name().into_string().unwrap_or_default();
			if file_name.ends_with("_in.txt") {
				inputs.push(file_name);
			} else if file_name.ends_with("_out.txt") {
				outputs.push(file_name);
			}
		}

		inputs.sort();
		outputs.sort();

		// Pair inputs with corresponding outputs
		for input_file in inputs {
			let output_file = input_file.replace("_in.txt", "_out.txt");
			if outputs.contains(&output_file) {
				test_cases.push((input_file, output_file));
			}
		}
	}

	assert!(!test_cases.is_empty(), "no test cases in {}", dir_path);
	test_cases
}

#[test]
fn test_integration_eval() {
	let test_cases = collect_test_cases("eval");
	execute("eval", test_cases, true, "eval", vec!["--config", EMPTY_CONFIG]);
}

#[test]
fn test_integration_reduced_output() {
	let test_cases = collect_test_cases("reduced");
	execute(
		"reduced",
		test_cases,
		true,
		"eval",
		vec!["--config", EMPTY_CONFIG, "-r"],
	);
}

#[test]
fn test_integration_precision() {
	let test_cases = collect_test_cases("precision");
	execute(
		"precision",
		test_cases,
		true,
		"eval",
		vec!["--config", EMPTY_CONFIG, "-p", "3"],
	);
}

#[test]
fn test_integration_config_file() {
	let test_cases = collect_test_cases("config");
	execute(
		"config",
		test_cases,
		true,
		"eval",
		vec!["--config", "tests/test_data/config/config.toml"],
	);
}

#[test]
fn test_integration_compare() {
	let test_cases = collect_test_cases("cmp");
	execute("cmp", test_cases, true, "cmp", vec!["--config", EMPTY_CONFIG]);
}

#[test]
fn test_integration_gcd() {
	let test_cases = collect_test_cases("gcd");
	execute("gcd", test_cases, true, "gcd", vec!["--config", EMPTY_CONFIG]);
}

#[test]
fn test_integration_lcm() {
	let test_cases = collect_test_cases("lcm");
	execute("lcm", test_cases, true, "lcm", vec!["--config", EMPTY_CONFIG]);
}

#[test]
fn test_integration_lcm_of_zero_fails() {
	let test_cases = collect_test_cases("lcmfail");
	execute("lcmfail", test_cases, false, "lcm", vec!["--config", EMPTY_CONFIG]);
}

#[test]
fn test_integration_reduce() {
	let test_cases = collect_test_cases("reduce");
	execute("reduce", test_cases, true, "reduce", vec!["--config", EMPTY_CONFIG]);
}

#[test]
fn test_integration_should_fail() {
	let test_cases = collect_test_cases("failures");
	execute("failures", test_cases, false, "eval", vec!["--config", EMPTY_CONFIG]);
}

#[test]
fn test_integration_excessive_precision() {
	let output = Command::new("cargo")
		.args([
			"run", "--", "--config", EMPTY_CONFIG, "-p", "51", "eval", "1/3",
		])
		.output()
		.expect("Failed to execute process");
	assert!(!output.status.success());
}

#[test]
fn test_integration_terms_from_command_line() {
	let output = Command::new("cargo")
		.args(["run", "--", "--config", EMPTY_CONFIG, "eval", "1/2", "+", "1/3"])
		.output()
		.expect("Failed to execute process");
	assert!(output.status.success());
	assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "5/6");
}

/// Flags go before the command, since everything after it is an operand.
fn execute(
	subfolder: &str,
	test_cases: Vec<(String, String)>,
	should_succeed: bool,
	cmd: &str,
	args: Vec<&str>,
) {
	for (input_file, expected_output_file) in test_cases {
		println!("running for {}...", input_file);

		let loc = format!("{}/{}/{}", "tests/test_data", subfolder, input_file);

		let all_args =
			[vec!["run", "--", "-f", loc.as_str()], args.clone(), vec![cmd]]
				.concat();

		let output = Command::new("cargo")
			.args(all_args)
			.output()
			.expect("Failed to execute process");

		if !should_succeed {
			assert!(
				!output.status.success(),
				"{} unexpectedly succeeded!",
				input_file
			);
			continue;
		}

		assert!(
			output.status.success(),
			"{} failed processing: {}",
			input_file,
			String::from_utf8_lossy(&output.stderr)
		);

		let stdout = String::from_utf8_lossy(&output.stdout);

		let expected_output = fs::read_to_string(format!(
			"{}/{}/{}",
			"tests/test_data", subfolder, expected_output_file
		))
		.expect("Failed to read expected output file");

		assert_eq!(
			stdout.trim(),
			expected_output.trim(),
			"Output did not match for {}; expected:\n{}\ngot:\n{}",
			input_file,
			expected_output.trim(),
			stdout.trim()
		);
	}
}
