// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! GNU gettext `.mo` catalogs.
//!
//! Parsing and plural-rule evaluation are handled by the `gettext` crate.
//! This module binds parsed catalogs to (domain, category) pairs the way
//! `bindtextdomain` lays them out on disk:
//!
//! ```text
//! <locale_dir>/<locale>/LC_MESSAGES/<domain>.mo
//! ```

use std::collections::HashMap;
use std::fmt;
use std::io::Read;
use std::path::{Path, PathBuf};

use gettext::Catalog;
use tracing::{debug, trace};

use crate::catalog::{plural_miss, MessageCatalog};
use crate::category::Category;
use crate::config::GettextConfig;
use crate::error::{I18nError, Result};

/// A [`MessageCatalog`] backed by compiled `.mo` files.
///
/// Domains that have no bound catalog echo their keys.
pub struct MoCatalog {
	default_domain: String,
	catalogs: HashMap<(Category, String), Catalog>,
}

impl MoCatalog {
	/// Create an engine with no bound catalogs.
	pub fn new(default_domain: impl Into<String>) -> Self {
		Self {
			default_domain: default_domain.into(),
			catalogs: HashMap::new(),
		}
	}

	/// Build an engine from configuration, loading the default domain and
	/// every extra domain for each configured category.
	pub fn from_config(config: &GettextConfig) -> Result<Self> {
		config.validate()?;

		let mut engine = Self::new(&config.default_domain);
		for domain in config.all_domains() {
			for &category in &config.categories {
				engine.load_domain(&config.locale_dir, &config.locale, domain, category)?;
			}
		}

		debug!(
			locale = %config.locale,
			locale_dir = %config.locale_dir.display(),
			bound = engine.catalogs.len(),
			"gettext catalogs loaded"
		);
		Ok(engine)
	}

	/// Parse a `.mo` stream.
	pub fn parse<R: Read>(reader: R) -> Result<Catalog> {
		Ok(Catalog::parse(reader)?)
	}

	/// The path a catalog for `domain` is expected at.
	pub fn catalog_path(locale_dir: &Path, locale: &str, domain: &str, category: Category) -> PathBuf {
		locale_dir
			.join(locale)
			.join(category.as_str())
			.join(format!("{domain}.mo"))
	}

	/// Load and bind `<locale_dir>/<locale>/<category>/<domain>.mo`.
	///
	/// A missing file is not an error; the domain keeps echoing keys and
	/// `false` is returned.
	pub fn load_domain(
		&mut self,
		locale_dir: &Path,
		locale: &str,
		domain: &str,
		category: Category,
	) -> Result<bool> {
		let path = Self::catalog_path(locale_dir, locale, domain, category);
		let file = match std::fs::File::open(&path) {
			Ok(file) => file,
			Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
				debug!(path = %path.display(), "catalog not found, lookups will echo");
				return Ok(false);
			}
			Err(e) => return Err(I18nError::Io { path, source: e }),
		};

		let catalog = Catalog::parse(std::io::BufReader::new(file))
			.map_err(|e| I18nError::CatalogParse {
				path: path.clone(),
				source: e,
			})?;

		debug!(path = %path.display(), domain, %category, "catalog loaded");
		self.insert(domain, category, catalog);
		Ok(true)
	}

	/// Bind an already parsed catalog, replacing any previous binding.
	pub fn insert(&mut self, domain: impl Into<String>, category: Category, catalog: Catalog) {
		self.catalogs.insert((category, domain.into()), catalog);
	}

	pub fn default_domain(&self) -> &str {
		&self.default_domain
	}

	/// Switch the domain used when a lookup does not name one (`textdomain`).
	pub fn set_default_domain(&mut self, domain: impl Into<String>) {
		self.default_domain = domain.into();
	}

	pub fn is_bound(&self, domain: &str, category: Category) -> bool {
		self.catalogs.contains_key(&(category, domain.to_string()))
	}

	fn catalog(&self, domain: Option<&str>, category: Option<Category>) -> Option<&Catalog> {
		let domain = domain.unwrap_or(&self.default_domain);
		let category = category.unwrap_or_default();
		trace!(domain, %category, "dispatching catalog lookup");
		self.catalogs.get(&(category, domain.to_string()))
	}
}

impl fmt::Debug for MoCatalog {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let mut bound: Vec<_> = self
			.catalogs
			.keys()
			.map(|(category, domain)| format!("{category}/{domain}"))
			.collect();
		bound.sort();
		f.debug_struct("MoCatalog")
			.field("default_domain", &self.default_domain)
			.field("bound", &bound)
			.finish()
	}
}

impl MessageCatalog for MoCatalog {
	fn lookup(&self, key: &str, domain: Option<&str>, category: Option<Category>) -> String {
		match self.catalog(domain, category) {
			Some(catalog) => catalog.gettext(key).to_string(),
			None => key.to_string(),
		}
	}

	fn lookup_plural(
		&self,
		key: &str,
		key_plural: &str,
		n: u64,
		domain: Option<&str>,
		category: Option<Category>,
	) -> String {
		match self.catalog(domain, category) {
			Some(catalog) => catalog.ngettext(key, key_plural, n).to_string(),
			None => plural_miss(key, key_plural, n).to_string(),
		}
	}
}
