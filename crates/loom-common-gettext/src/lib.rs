// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Contextual gettext lookups with `%placeholder%` substitution.
//!
//! This crate puts a thin layer over a gettext message catalog:
//!
//! - contextual lookups (`pgettext` and friends) with a defined fallback to
//!   the source text when the catalog has no entry,
//! - domain and category overrides routed to the matching catalog,
//! - `%name%` placeholder substitution applied to every resolved string.
//!
//! Catalog parsing and plural rules come from the `gettext` crate via
//! [`MoCatalog`]. Tests and embedded tables can use [`MemoryCatalog`].
//!
//! # Example
//!
//! ```
//! use loom_common_gettext::{context_key, MemoryCatalog, Translator};
//!
//! let mut catalog = MemoryCatalog::new("loom");
//! catalog.insert("loom", context_key("email", "Welcome, %name%!"), "¡Bienvenido, %name%!");
//! let tr = Translator::new(catalog);
//!
//! assert_eq!(
//! 	tr.pgettext("email", "Welcome, %name%!", Some(&[("name", "Ana")])),
//! 	"¡Bienvenido, Ana!"
//! );
//! assert_eq!(
//! 	tr.npgettext("email", "%n% invite", "%n% invites", 2, Some(&[("n", "2")])),
//! 	"2 invites"
//! );
//! ```

mod catalog;
mod category;
mod config;
mod error;
mod mo;
mod placeholder;
mod translator;

pub use catalog::{germanic_plural, MemoryCatalog, MessageCatalog, PluralSelector};
pub use category::Category;
pub use config::{GettextConfig, DEFAULT_DOMAIN, DEFAULT_LOCALE, DEFAULT_LOCALE_DIR};
pub use error::{I18nError, Result};
pub use mo::MoCatalog;
pub use placeholder::{substitute, Placeholders};
pub use translator::{context_key, Lookup, Override, Plural, Translator, CONTEXT_SEPARATOR};

/// Re-exported so callers can build catalogs for [`MoCatalog::insert`].
pub use gettext::Catalog as GettextCatalog;
