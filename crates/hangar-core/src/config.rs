// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::airports::KIEL_ICAO;
use crate::{HangarError, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HangarConfig {
    /// OurAirports-style JSON export.
    pub airports_path: Option<PathBuf>,
    /// External aircraft catalogue. The built-in fleet is used when unset.
    pub aircraft_path: Option<PathBuf>,
    pub default_homebase_icao: String,
}

impl Default for HangarConfig {
    fn default() -> Self {
        Self {
            airports_path: None,
            aircraft_path: None,
            default_homebase_icao: KIEL_ICAO.to_string(),
        }
    }
}

impl HangarConfig {
    pub fn config_path() -> PathBuf {
        ProjectDirs::from("org", "hangar", "Hangar")
            .map(|dirs| dirs.config_dir().join("config.json"))
            .unwrap_or_else(|| PathBuf::from("hangar.json"))
    }

    pub fn load() -> Result<Self> {
        Self::load_from(Self::config_path())
    }

    /// Missing file means defaults; a file that exists but doesn't parse is
    /// an error so a typo doesn't silently reset the user's settings.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            log::debug!("[Config] No config at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| {
            log::error!("[Config] JSON parse error for {:?}: {}", path, e);
            HangarError::Config(format!("{}: {}", path.display(), e))
        })
    }

    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
