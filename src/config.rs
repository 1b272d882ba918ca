// Copyright Sebastian Wiesner <sebastian@swsnr.de>
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;
use trips::SortMode;

/// The configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// The JSON file with all deals.
    pub deals: Option<PathBuf>,
    /// The order of results if not given on the command line.
    #[serde(default)]
    pub sort: SortMode,
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref()).with_context(|| {
            format!(
                "Failed to read configuration file from {}",
                path.as_ref().display()
            )
        })?;
        toml::from_str(&contents).with_context(|| {
            format!(
                "Failed to parse configuration from {}",
                path.as_ref().display()
            )
        })
    }

    /// Load config from `$XDG_CONFIG_HOME`.
    ///
    /// Use the default configuration if there's no configuration file.
    pub fn from_default_location() -> Result<Self> {
        let path = dirs::config_dir()
            .with_context(|| "Missing HOME directory".to_string())?
            .join("trips")
            .join("trips.toml");
        if path.is_file() {
            Self::from_file(path)
        } else {
            debug!("No configuration at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }
}
