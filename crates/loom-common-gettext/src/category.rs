// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Locale categories (facets) a lookup can be scoped to.

use std::fmt;
use std::str::FromStr;

use crate::error::I18nError;

/// A POSIX locale facet.
///
/// Catalogs are bound per category; a lookup without an explicit category
/// uses [`Category::Messages`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
	feature = "serde",
	derive(serde::Serialize, serde::Deserialize),
	serde(rename_all = "lowercase")
)]
pub enum Category {
	CType,
	Numeric,
	Time,
	Collate,
	Monetary,
	#[default]
	Messages,
	All,
}

impl Category {
	pub const ALL: [Category; 7] = [
		Category::CType,
		Category::Numeric,
		Category::Time,
		Category::Collate,
		Category::Monetary,
		Category::Messages,
		Category::All,
	];

	/// The facet name, which is also the directory a catalog lives in
	/// (`<locale_dir>/<locale>/LC_MESSAGES/<domain>.mo`).
	pub fn as_str(self) -> &'static str {
		match self {
			Category::CType => "LC_CTYPE",
			Category::Numeric => "LC_NUMERIC",
			Category::Time => "LC_TIME",
			Category::Collate => "LC_COLLATE",
			Category::Monetary => "LC_MONETARY",
			Category::Messages => "LC_MESSAGES",
			Category::All => "LC_ALL",
		}
	}

	fn short_name(self) -> &'static str {
		match self {
			Category::CType => "ctype",
			Category::Numeric => "numeric",
			Category::Time => "time",
			Category::Collate => "collate",
			Category::Monetary => "monetary",
			Category::Messages => "messages",
			Category::All => "all",
		}
	}
}

impl fmt::Display for Category {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for Category {
	type Err = I18nError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let name = s.trim();
		Category::ALL
			.into_iter()
			.find(|c| c.as_str() == name || c.short_name().eq_ignore_ascii_case(name))
			.ok_or_else(|| I18nError::UnknownCategory(s.to_string()))
	}
}
