// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Build-time seed resolution.
//!
//! `VMSTR_SEED` (decimal or `0x` hex) overrides the clock captured by the
//! build script. Both values are baked into this proc-macro when it compiles,
//! so every expansion sees the same seed.

use std::sync::OnceLock;

use log::debug;
use thiserror::Error;
use vmstr_core::{KeyTables, Seed, SeedError, Sequence};

/// Where the seed came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SeedSource {
    Override,
    BuildClock,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub(crate) enum ConfigError {
    #[error("VMSTR_SEED={value:?} is not a decimal or 0x-prefixed u32: {source}")]
    InvalidOverride { value: String, source: SeedError },

    #[error("build clock {value:?} is malformed: {source}")]
    InvalidClock { value: String, source: SeedError },

    #[error("SOURCE_DATE_EPOCH={value:?} is not a unix timestamp")]
    InvalidSourceDateEpoch { value: String },

    #[error("build clock is missing; vmstr-macros must be built through its build script")]
    MissingClock,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct BuildConfig {
    seed: Seed,
    source: SeedSource,
}

impl BuildConfig {
    /// A non-empty override wins over the clock. Without one, an epoch the
    /// build script rejected is an error rather than a wall-clock seed.
    pub(crate) fn resolve(
        seed_override: Option<&str>,
        clock: Option<&str>,
        rejected_epoch: Option<&str>,
    ) -> Result<Self, ConfigError> {
        if let Some(value) = seed_override.filter(|value| !value.trim().is_empty()) {
            let seed = Seed::parse(value).map_err(|source| ConfigError::InvalidOverride {
                value: value.to_string(),
                source,
            })?;

            return Ok(Self {
                seed,
                source: SeedSource::Override,
            });
        }

        if let Some(value) = rejected_epoch.filter(|value| !value.is_empty()) {
            return Err(ConfigError::InvalidSourceDateEpoch {
                value: value.to_string(),
            });
        }

        let clock = clock.ok_or(ConfigError::MissingClock)?;
        let seed = Seed::from_clock(clock).map_err(|source| ConfigError::InvalidClock {
            value: clock.to_string(),
            source,
        })?;

        Ok(Self {
            seed,
            source: SeedSource::BuildClock,
        })
    }

    pub(crate) fn from_build_env() -> Result<Self, ConfigError> {
        Self::resolve(
            option_env!("VMSTR_SEED_OVERRIDE"),
            option_env!("VMSTR_BUILD_CLOCK"),
            option_env!("VMSTR_REJECTED_EPOCH"),
        )
    }

    pub(crate) fn seed(&self) -> Seed {
        self.seed
    }

    pub(crate) fn source(&self) -> SeedSource {
        self.source
    }
}

/// Sequence and tables derived from one [`BuildConfig`].
pub(crate) struct KeyMaterial {
    sequence: Sequence,
    tables: KeyTables,
}

impl KeyMaterial {
    pub(crate) fn new(config: &BuildConfig) -> Self {
        let sequence = Sequence::new(config.seed());
        let tables = KeyTables::generate(&sequence);

        Self { sequence, tables }
    }

    pub(crate) fn sequence(&self) -> &Sequence {
        &self.sequence
    }

    pub(crate) fn tables(&self) -> &KeyTables {
        &self.tables
    }
}

static KEY_MATERIAL: OnceLock<Result<KeyMaterial, ConfigError>> = OnceLock::new();

/// Key material for this compilation, generated on first use.
pub(crate) fn key_material() -> Result<&'static KeyMaterial, &'static ConfigError> {
    KEY_MATERIAL
        .get_or_init(|| {
            let config = BuildConfig::from_build_env()?;
            debug!("vmstr seed source: {:?}", config.source());
            Ok(KeyMaterial::new(&config))
        })
        .as_ref()
}
