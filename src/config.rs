// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pvboard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Engine constants.
//!
//! The engine runs with one point threshold per pack and four stage steps per cycle. Both are
//! fixed for the lifetime of an engine; they are validated once here so the hot paths can treat
//! them as preconditions.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::query::stage::StageTable;

/// Points that make one pack.
pub const DEFAULT_THRESHOLD: u64 = 330;

/// Packs needed for each successive stage within a cycle.
pub const DEFAULT_STAGE_STEPS: [u64; 4] = [6, 12, 18, 36];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub threshold: u64,
    pub stage_steps: [u64; 4],
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            stage_steps: DEFAULT_STAGE_STEPS,
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.threshold == 0 {
            return Err(ConfigError::ZeroThreshold);
        }
        if let Some(index) = self.stage_steps.iter().position(|step| *step == 0) {
            return Err(ConfigError::ZeroStageStep { index });
        }
        Ok(())
    }

    pub fn stage_table(&self) -> StageTable {
        StageTable::from_steps(self.stage_steps)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw).map_err(|source| ConfigError::Json {
            path: None,
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&raw).map_err(|source| ConfigError::Json {
            path: Some(path.to_path_buf()),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io {
        path: PathBuf,
        source: io::Error,
    },
    Json {
        path: Option<PathBuf>,
        source: serde_json::Error,
    },
    ZeroThreshold,
    ZeroStageStep {
        index: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "io error at {path:?}: {source}"),
            Self::Json {
                path: Some(path),
                source,
            } => write!(f, "json error at {path:?}: {source}"),
            Self::Json { path: None, source } => write!(f, "json error: {source}"),
            Self::ZeroThreshold => f.write_str("threshold must be a positive integer"),
            Self::ZeroStageStep { index } => {
                write!(f, "stage step {index} must be a positive integer")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
            Self::ZeroThreshold | Self::ZeroStageStep { .. } => None,
        }
    }
}
