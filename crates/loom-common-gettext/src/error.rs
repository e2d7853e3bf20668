// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error types for catalog loading and configuration.
//!
//! Lookups themselves never fail: a missing translation falls back to the
//! source text. Only binding catalogs and reading configuration can error.

use std::path::PathBuf;

/// Result type alias for catalog loading and configuration.
pub type Result<T> = std::result::Result<T, I18nError>;

/// Errors that can occur while loading catalogs or configuration.
#[derive(Debug, thiserror::Error)]
pub enum I18nError {
	/// I/O error reading a catalog or config file
	#[error("I/O error reading {path}: {source}")]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	/// A `.mo` stream could not be parsed
	#[error("catalog parse error: {0}")]
	Parse(#[from] gettext::Error),

	/// A `.mo` file on disk could not be parsed
	#[error("catalog parse error in {path}: {source}")]
	CatalogParse {
		path: PathBuf,
		#[source]
		source: gettext::Error,
	},

	/// TOML parsing error
	#[cfg(feature = "serde")]
	#[error("TOML parse error: {0}")]
	Toml(#[from] toml::de::Error),

	/// TOML parsing error in a config file
	#[cfg(feature = "serde")]
	#[error("TOML parse error in {path}: {source}")]
	TomlParse {
		path: PathBuf,
		#[source]
		source: toml::de::Error,
	},

	#[error("unknown locale category: {0}")]
	UnknownCategory(String),

	#[error("invalid configuration: {0}")]
	InvalidConfig(String),
}

impl I18nError {
	/// Create an invalid configuration error
	pub fn invalid_config(msg: impl Into<String>) -> Self {
		Self::InvalidConfig(msg.into())
	}
}
