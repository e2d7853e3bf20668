// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The catalog-lookup seam and an in-memory implementation.

use std::collections::HashMap;
use std::sync::Arc;

use crate::category::Category;

/// A message catalog engine exposing the two gettext lookup primitives.
///
/// Implementations echo their input on a miss: [`lookup`](Self::lookup)
/// returns `key`, and [`lookup_plural`](Self::lookup_plural) returns `key`
/// when `n == 1` and `key_plural` otherwise. Callers detect misses by that
/// echo, so a translation identical to its own key is indistinguishable
/// from a miss.
///
/// `domain: None` means the engine's current default domain and
/// `category: None` means [`Category::Messages`].
pub trait MessageCatalog {
	fn lookup(&self, key: &str, domain: Option<&str>, category: Option<Category>) -> String;

	fn lookup_plural(
		&self,
		key: &str,
		key_plural: &str,
		n: u64,
		domain: Option<&str>,
		category: Option<Category>,
	) -> String;
}

impl<T: MessageCatalog + ?Sized> MessageCatalog for &T {
	fn lookup(&self, key: &str, domain: Option<&str>, category: Option<Category>) -> String {
		(**self).lookup(key, domain, category)
	}

	fn lookup_plural(
		&self,
		key: &str,
		key_plural: &str,
		n: u64,
		domain: Option<&str>,
		category: Option<Category>,
	) -> String {
		(**self).lookup_plural(key, key_plural, n, domain, category)
	}
}

impl<T: MessageCatalog + ?Sized> MessageCatalog for Box<T> {
	fn lookup(&self, key: &str, domain: Option<&str>, category: Option<Category>) -> String {
		(**self).lookup(key, domain, category)
	}

	fn lookup_plural(
		&self,
		key: &str,
		key_plural: &str,
		n: u64,
		domain: Option<&str>,
		category: Option<Category>,
	) -> String {
		(**self).lookup_plural(key, key_plural, n, domain, category)
	}
}

impl<T: MessageCatalog + ?Sized> MessageCatalog for Arc<T> {
	fn lookup(&self, key: &str, domain: Option<&str>, category: Option<Category>) -> String {
		(**self).lookup(key, domain, category)
	}

	fn lookup_plural(
		&self,
		key: &str,
		key_plural: &str,
		n: u64,
		domain: Option<&str>,
		category: Option<Category>,
	) -> String {
		(**self).lookup_plural(key, key_plural, n, domain, category)
	}
}

/// The echo a catalog returns for a plural miss.
pub(crate) fn plural_miss<'a>(key: &'a str, key_plural: &'a str, n: u64) -> &'a str {
	if n == 1 {
		key
	} else {
		key_plural
	}
}

/// Maps a count to a plural form index.
pub type PluralSelector = fn(u64) -> usize;

/// Germanic plural rule (`nplurals=2; plural=(n != 1);`).
pub fn germanic_plural(n: u64) -> usize {
	usize::from(n != 1)
}

type EntryKey = (Category, String, String);

/// An in-memory catalog.
///
/// Entries are keyed by category, domain and key. Contextual entries are
/// stored under the composite key built by [`context_key`](crate::context_key).
///
/// # Example
///
/// ```
/// use loom_common_gettext::{MemoryCatalog, MessageCatalog};
///
/// let mut catalog = MemoryCatalog::new("app");
/// catalog.insert("app", "Open", "Abrir");
/// catalog.insert_plural("app", "file", ["archivo", "archivos"]);
///
/// assert_eq!(catalog.lookup("Open", None, None), "Abrir");
/// assert_eq!(catalog.lookup_plural("file", "files", 3, None, None), "archivos");
/// assert_eq!(catalog.lookup("Close", None, None), "Close");
/// ```
#[derive(Debug, Clone)]
pub struct MemoryCatalog {
	default_domain: String,
	plural: PluralSelector,
	entries: HashMap<EntryKey, Vec<String>>,
}

impl MemoryCatalog {
	pub fn new(default_domain: impl Into<String>) -> Self {
		Self {
			default_domain: default_domain.into(),
			plural: germanic_plural,
			entries: HashMap::new(),
		}
	}

	/// Replace the plural rule used by [`lookup_plural`](MessageCatalog::lookup_plural).
	pub fn with_plural_rule(mut self, plural: PluralSelector) -> Self {
		self.plural = plural;
		self
	}

	pub fn default_domain(&self) -> &str {
		&self.default_domain
	}

	pub fn set_default_domain(&mut self, domain: impl Into<String>) {
		self.default_domain = domain.into();
	}

	/// Insert a singular translation under [`Category::Messages`].
	pub fn insert(&mut self, domain: &str, key: impl Into<String>, translation: impl Into<String>) {
		self.insert_in(Category::Messages, domain, key, translation);
	}

	pub fn insert_in(
		&mut self,
		category: Category,
		domain: &str,
		key: impl Into<String>,
		translation: impl Into<String>,
	) {
		self.entries.insert(
			(category, domain.to_string(), key.into()),
			vec![translation.into()],
		);
	}

	/// Insert plural forms under [`Category::Messages`]. The key is the
	/// singular message id.
	pub fn insert_plural<I, S>(&mut self, domain: &str, key: impl Into<String>, forms: I)
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.insert_plural_in(Category::Messages, domain, key, forms);
	}

	pub fn insert_plural_in<I, S>(
		&mut self,
		category: Category,
		domain: &str,
		key: impl Into<String>,
		forms: I,
	) where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.entries.insert(
			(category, domain.to_string(), key.into()),
			forms.into_iter().map(Into::into).collect(),
		);
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	fn forms(&self, key: &str, domain: Option<&str>, category: Option<Category>) -> Option<&[String]> {
		let domain = domain.unwrap_or(&self.default_domain);
		let category = category.unwrap_or_default();
		self.entries
			.get(&(category, domain.to_string(), key.to_string()))
			.map(Vec::as_slice)
	}
}

impl MessageCatalog for MemoryCatalog {
	fn lookup(&self, key: &str, domain: Option<&str>, category: Option<Category>) -> String {
		self.forms(key, domain, category)
			.and_then(|forms| forms.first())
			.map_or_else(|| key.to_string(), Clone::clone)
	}

	fn lookup_plural(
		&self,
		key: &str,
		key_plural: &str,
		n: u64,
		domain: Option<&str>,
		category: Option<Category>,
	) -> String {
		self.forms(key, domain, category)
			.and_then(|forms| forms.get((self.plural)(n)))
			.map_or_else(|| plural_miss(key, key_plural, n).to_string(), Clone::clone)
	}
}
