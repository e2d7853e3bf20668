// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Catalog configuration from defaults, environment variables and TOML.
//!
//! Environment convention: `LOOM_LOCALE_DIR`, `LOOM_LOCALE`,
//! `LOOM_TEXT_DOMAIN`, `LOOM_TEXT_DOMAINS` and `LOOM_LOCALE_CATEGORIES`
//! (the last two comma separated). Empty variables are ignored.

use std::path::PathBuf;

use tracing::debug;

use crate::category::Category;
use crate::error::{I18nError, Result};

pub const DEFAULT_LOCALE_DIR: &str = "/usr/share/locale";
pub const DEFAULT_LOCALE: &str = "en";
pub const DEFAULT_DOMAIN: &str = "messages";

/// Where catalogs live and which of them to bind.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
	feature = "serde",
	derive(serde::Serialize, serde::Deserialize),
	serde(default)
)]
pub struct GettextConfig {
	/// Root of the `<locale>/<LC_CATEGORY>/<domain>.mo` tree
	pub locale_dir: PathBuf,
	/// Locale directory name, taken as given (e.g. "es", "pt_BR")
	pub locale: String,
	/// Domain used when a lookup does not name one
	pub default_domain: String,
	/// Extra domains reachable through domain overrides
	pub domains: Vec<String>,
	pub categories: Vec<Category>,
}

impl Default for GettextConfig {
	fn default() -> Self {
		Self {
			locale_dir: PathBuf::from(DEFAULT_LOCALE_DIR),
			locale: DEFAULT_LOCALE.to_string(),
			default_domain: DEFAULT_DOMAIN.to_string(),
			domains: Vec::new(),
			categories: vec![Category::Messages],
		}
	}
}

impl GettextConfig {
	/// Defaults overlaid with `LOOM_*` environment variables.
	pub fn from_env() -> Result<Self> {
		Self::from_lookup(|name| std::env::var(name).ok())
	}

	/// Defaults overlaid with variables resolved through `lookup`.
	pub fn from_lookup<F>(lookup: F) -> Result<Self>
	where
		F: Fn(&str) -> Option<String>,
	{
		debug!("loading gettext config from environment");
		let var = |name: &str| lookup(name).filter(|s| !s.trim().is_empty());

		let mut config = Self::default();
		if let Some(dir) = var("LOOM_LOCALE_DIR") {
			config.locale_dir = PathBuf::from(dir);
		}
		if let Some(locale) = var("LOOM_LOCALE") {
			config.locale = locale;
		}
		if let Some(domain) = var("LOOM_TEXT_DOMAIN") {
			config.default_domain = domain;
		}
		if let Some(domains) = var("LOOM_TEXT_DOMAINS") {
			config.domains = split_list(&domains).map(str::to_string).collect();
		}
		if let Some(categories) = var("LOOM_LOCALE_CATEGORIES") {
			config.categories = split_list(&categories)
				.map(str::parse::<Category>)
				.collect::<Result<_>>()?;
		}
		Ok(config)
	}

	/// Parse a TOML document; unspecified fields keep their defaults.
	#[cfg(feature = "serde")]
	pub fn from_toml_str(content: &str) -> Result<Self> {
		Ok(toml::from_str(content)?)
	}

	#[cfg(feature = "serde")]
	pub fn from_toml_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
		let path = path.as_ref().to_path_buf();
		debug!(path = %path.display(), "loading gettext config file");
		let content = std::fs::read_to_string(&path).map_err(|e| I18nError::Io {
			path: path.clone(),
			source: e,
		})?;
		toml::from_str(&content).map_err(|e| I18nError::TomlParse { path, source: e })
	}

	pub fn validate(&self) -> Result<()> {
		if self.locale.trim().is_empty() {
			return Err(I18nError::invalid_config("locale must not be empty"));
		}
		if self.locale.contains(['/', '\\']) {
			return Err(I18nError::invalid_config(format!(
				"locale '{}' must not contain path separators",
				self.locale
			)));
		}
		for domain in self.all_domains() {
			validate_domain(domain)?;
		}
		if self.categories.is_empty() {
			return Err(I18nError::invalid_config("at least one category is required"));
		}
		Ok(())
	}

	/// The default domain followed by the extra domains, without duplicates.
	pub fn all_domains(&self) -> impl Iterator<Item = &str> {
		let default = self.default_domain.as_str();
		std::iter::once(default).chain(
			self.domains
				.iter()
				.map(String::as_str)
				.filter(move |d| *d != default),
		)
	}
}

fn split_list(value: &str) -> impl Iterator<Item = &str> {
	value.split(',').map(str::trim).filter(|s| !s.is_empty())
}

fn validate_domain(domain: &str) -> Result<()> {
	if domain.trim().is_empty() {
		return Err(I18nError::invalid_config("domain must not be empty"));
	}
	if domain.contains(['/', '\\']) || domain == "." || domain == ".." {
		return Err(I18nError::invalid_config(format!(
			"domain '{domain}' must be a plain file name"
		)));
	}
	Ok(())
}
