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
use crate::config::config_file::Config;
use anyhow::{anyhow, Error};
use dirs::home_dir;
use std::fs;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

pub struct Filesystem {
	default_config: Option<PathBuf>,
}

impl Filesystem {
	pub fn new() -> Self {
		Self {
			default_config: home_dir().map(|h| h.join(".config/ratl/config.toml")),
		}
	}

	pub fn open(&self, file_path: &str) -> Result<BufReader<File>, Error> {
		let path = Path::new(file_path);
		let file = File::open(path)
			.map_err(|e| anyhow!("failed to open {}: {}", file_path, e))?;
		Ok(BufReader::new(file))
	}

	/// Fetches the config from the given path, or the default path if none.
	/// A missing default config is the same as an empty one; a missing custom
	/// config is an error.
	pub fn get_config(
		&self,
		custom_config_path: Option<&String>,
	) -> Result<Config, Error> {
		let config_path = match custom_config_path {
			Some(p) => PathBuf::from(p),
			None => match &self.default_config {
				Some(p) if p.exists() => p.clone(),
				_ => {
					log::debug!("no config file found, using defaults");
					return Ok(Config::default());
				},
			},
		};

		log::debug!("reading config from {}", config_path.display());
		let content = fs::read_to_string(&config_path).map_err(|e| {
			anyhow!("failed to read config {}: {}", config_path.display(), e)
		})?;

		toml::from_str(&content)
			.map_err(|e| anyhow!("failed to parse config: {}", e))
	}
}
