// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Lookup dispatch: context keys, miss fallback and the gettext-style
//! entry points.
//!
//! Every entry point builds a [`Lookup`] and goes through
//! [`Translator::resolve`], which talks to the catalog through exactly one
//! primitive call and then applies placeholder substitution.

use tracing::{debug, trace};

use crate::catalog::MessageCatalog;
use crate::category::Category;
use crate::placeholder::{substitute, Placeholders};

/// Separator between a context and a message id in a composite key (EOT).
pub const CONTEXT_SEPARATOR: char = '\u{4}';

/// Build the composite key `context + EOT + msgid` used for contextual
/// entries.
pub fn context_key(context: &str, msgid: &str) -> String {
	let mut key = String::with_capacity(context.len() + 1 + msgid.len());
	key.push_str(context);
	key.push(CONTEXT_SEPARATOR);
	key.push_str(msgid);
	key
}

/// Which catalog a lookup is routed to.
///
/// A category can only be chosen together with a domain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Override<'a> {
	/// The catalog's current default domain and `LC_MESSAGES`.
	#[default]
	None,
	Domain(&'a str),
	DomainCategory(&'a str, Category),
}

impl<'a> Override<'a> {
	fn split(self) -> (Option<&'a str>, Option<Category>) {
		match self {
			Override::None => (None, None),
			Override::Domain(domain) => (Some(domain), None),
			Override::DomainCategory(domain, category) => (Some(domain), Some(category)),
		}
	}
}

/// Plural arguments: the source-language plural id and the count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Plural<'a> {
	pub id_plural: &'a str,
	pub n: u64,
}

impl Plural<'_> {
	fn source_text<'s>(&'s self, msgid: &'s str) -> &'s str {
		if self.n == 1 {
			msgid
		} else {
			self.id_plural
		}
	}
}

/// A single lookup request.
///
/// ```
/// use loom_common_gettext::{Category, Lookup};
///
/// let lookup = Lookup::new("Open")
/// 	.context("menu")
/// 	.domain_category("app", Category::Messages);
/// assert_eq!(lookup.msgid, "Open");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lookup<'a> {
	pub msgid: &'a str,
	pub context: Option<&'a str>,
	pub plural: Option<Plural<'a>>,
	pub target: Override<'a>,
}

impl<'a> Lookup<'a> {
	pub fn new(msgid: &'a str) -> Self {
		Self {
			msgid,
			context: None,
			plural: None,
			target: Override::None,
		}
	}

	pub fn context(mut self, context: &'a str) -> Self {
		self.context = Some(context);
		self
	}

	pub fn plural(mut self, id_plural: &'a str, n: u64) -> Self {
		self.plural = Some(Plural { id_plural, n });
		self
	}

	pub fn domain(mut self, domain: &'a str) -> Self {
		self.target = Override::Domain(domain);
		self
	}

	pub fn domain_category(mut self, domain: &'a str, category: Category) -> Self {
		self.target = Override::DomainCategory(domain, category);
		self
	}
}

/// Translates messages against an explicitly owned catalog.
///
/// The catalog carries the ambient state (default domain, locale) that
/// gettext keeps process-wide, so tests can inject a fake.
///
/// # Example
///
/// ```
/// use loom_common_gettext::{MemoryCatalog, Translator, context_key};
///
/// let mut catalog = MemoryCatalog::new("app");
/// catalog.insert("app", context_key("menu", "Open"), "Abrir");
/// let tr = Translator::new(catalog);
///
/// assert_eq!(tr.pgettext("menu", "Open", None), "Abrir");
/// assert_eq!(tr.pgettext("dialog", "Open", None), "Open");
/// assert_eq!(tr.gettext("Hi %name%", Some(&[("name", "Ana")])), "Hi Ana");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Translator<C> {
	catalog: C,
}

impl<C: MessageCatalog> Translator<C> {
	pub fn new(catalog: C) -> Self {
		Self { catalog }
	}

	pub fn catalog(&self) -> &C {
		&self.catalog
	}

	pub fn catalog_mut(&mut self) -> &mut C {
		&mut self.catalog
	}

	pub fn into_inner(self) -> C {
		self.catalog
	}

	/// Resolve a lookup to display text and substitute placeholders.
	///
	/// Never fails. When a contextual lookup misses, the source text is
	/// returned instead of the composite key: the singular path treats an
	/// echoed composite key as a miss, the plural path treats an echo of
	/// either the composite key or the plural id as a miss and falls back to
	/// `msgid` for a count of one and the plural id otherwise.
	pub fn resolve(&self, lookup: &Lookup<'_>, placeholders: Option<Placeholders<'_>>) -> String {
		let (domain, category) = lookup.target.split();
		trace!(
			msgid = lookup.msgid,
			context = lookup.context,
			domain,
			category = category.map(Category::as_str),
			plural = lookup.plural.is_some(),
			"resolving message"
		);

		let translation = match (lookup.context, lookup.plural) {
			(None, None) => self.catalog.lookup(lookup.msgid, domain, category),
			(None, Some(plural)) => {
				self.catalog
					.lookup_plural(lookup.msgid, plural.id_plural, plural.n, domain, category)
			}
			(Some(context), None) => {
				let key = context_key(context, lookup.msgid);
				let translation = self.catalog.lookup(&key, domain, category);
				if translation == key {
					debug!(context, msgid = lookup.msgid, "no contextual translation, using source text");
					lookup.msgid.to_string()
				} else {
					translation
				}
			}
			(Some(context), Some(plural)) => {
				let key = context_key(context, lookup.msgid);
				let translation =
					self.catalog
						.lookup_plural(&key, plural.id_plural, plural.n, domain, category);
				if translation == key || translation == plural.id_plural {
					debug!(
						context,
						msgid = lookup.msgid,
						n = plural.n,
						"no contextual plural translation, using source text"
					);
					plural.source_text(lookup.msgid).to_string()
				} else {
					translation
				}
			}
		};

		substitute(translation, placeholders)
	}

	/// `gettext`: look up `msgid` in the default domain.
	pub fn gettext(&self, msgid: &str, placeholders: Option<Placeholders<'_>>) -> String {
		self.resolve(&Lookup::new(msgid), placeholders)
	}

	/// `dgettext`: look up `msgid` in `domain`.
	pub fn dgettext(&self, domain: &str, msgid: &str, placeholders: Option<Placeholders<'_>>) -> String {
		self.resolve(&Lookup::new(msgid).domain(domain), placeholders)
	}

	/// `dcgettext`: look up `msgid` in `domain` under `category`.
	pub fn dcgettext(
		&self,
		domain: &str,
		msgid: &str,
		category: Category,
		placeholders: Option<Placeholders<'_>>,
	) -> String {
		self.resolve(&Lookup::new(msgid).domain_category(domain, category), placeholders)
	}

	/// `pgettext`: contextual lookup in the default domain.
	pub fn pgettext(&self, context: &str, msgid: &str, placeholders: Option<Placeholders<'_>>) -> String {
		self.resolve(&Lookup::new(msgid).context(context), placeholders)
	}

	pub fn dpgettext(
		&self,
		domain: &str,
		context: &str,
		msgid: &str,
		placeholders: Option<Placeholders<'_>>,
	) -> String {
		self.resolve(&Lookup::new(msgid).context(context).domain(domain), placeholders)
	}

	pub fn dcpgettext(
		&self,
		domain: &str,
		context: &str,
		msgid: &str,
		category: Category,
		placeholders: Option<Placeholders<'_>>,
	) -> String {
		self.resolve(
			&Lookup::new(msgid)
				.context(context)
				.domain_category(domain, category),
			placeholders,
		)
	}

	/// `ngettext`: plural lookup in the default domain.
	pub fn ngettext(
		&self,
		msgid: &str,
		id_plural: &str,
		n: u64,
		placeholders: Option<Placeholders<'_>>,
	) -> String {
		self.resolve(&Lookup::new(msgid).plural(id_plural, n), placeholders)
	}

	pub fn dngettext(
		&self,
		domain: &str,
		msgid: &str,
		id_plural: &str,
		n: u64,
		placeholders: Option<Placeholders<'_>>,
	) -> String {
		self.resolve(&Lookup::new(msgid).plural(id_plural, n).domain(domain), placeholders)
	}

	pub fn dcngettext(
		&self,
		domain: &str,
		msgid: &str,
		id_plural: &str,
		n: u64,
		category: Category,
		placeholders: Option<Placeholders<'_>>,
	) -> String {
		self.resolve(
			&Lookup::new(msgid)
				.plural(id_plural, n)
				.domain_category(domain, category),
			placeholders,
		)
	}

	/// `npgettext`: contextual plural lookup in the default domain.
	pub fn npgettext(
		&self,
		context: &str,
		msgid: &str,
		id_plural: &str,
		n: u64,
		placeholders: Option<Placeholders<'_>>,
	) -> String {
		self.resolve(&Lookup::new(msgid).context(context).plural(id_plural, n), placeholders)
	}

	pub fn dnpgettext(
		&self,
		domain: &str,
		context: &str,
		msgid: &str,
		id_plural: &str,
		n: u64,
		placeholders: Option<Placeholders<'_>>,
	) -> String {
		self.resolve(
			&Lookup::new(msgid)
				.context(context)
				.plural(id_plural, n)
				.domain(domain),
			placeholders,
		)
	}

	#[allow(clippy::too_many_arguments)]
	pub fn dcnpgettext(
		&self,
		domain: &str,
		context: &str,
		msgid: &str,
		id_plural: &str,
		n: u64,
		category: Category,
		placeholders: Option<Placeholders<'_>>,
	) -> String {
		self.resolve(
			&Lookup::new(msgid)
				.context(context)
				.plural(id_plural, n)
				.domain_category(domain, category),
			placeholders,
		)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::catalog::MemoryCatalog;
	use proptest::prelude::*;
	use std::cell::RefCell;

	#[derive(Debug, Clone, PartialEq, Eq)]
	enum Call {
		Lookup {
			key: String,
			domain: Option<String>,
			category: Option<Category>,
		},
		Plural {
			key: String,
			key_plural: String,
			n: u64,
			domain: Option<String>,
			category: Option<Category>,
		},
	}

	/// Records primitive calls and answers with a fixed reply (or echoes).
	#[derive(Default)]
	struct Recorder {
		calls: RefCell<Vec<Call>>,
		reply: Option<String>,
	}

	impl Recorder {
		fn replying(reply: &str) -> Self {
			Self {
				calls: RefCell::default(),
				reply: Some(reply.to_string()),
			}
		}

		fn calls(&self) -> Vec<Call> {
			self.calls.borrow().clone()
		}
	}

	impl MessageCatalog for Recorder {
		fn lookup(&self, key: &str, domain: Option<&str>, category: Option<Category>) -> String {
			self.calls.borrow_mut().push(Call::Lookup {
				key: key.to_string(),
				domain: domain.map(str::to_string),
				category,
			});
			self.reply.clone().unwrap_or_else(|| key.to_string())
		}

		fn lookup_plural(
			&self,
			key: &str,
			key_plural: &str,
			n: u64,
			domain: Option<&str>,
			category: Option<Category>,
		) -> String {
			self.calls.borrow_mut().push(Call::Plural {
				key: key.to_string(),
				key_plural: key_plural.to_string(),
				n,
				domain: domain.map(str::to_string),
				category,
			});
			self.reply
				.clone()
				.unwrap_or_else(|| if n == 1 { key } else { key_plural }.to_string())
		}
	}

	fn lookup_call(key: &str, domain: Option<&str>, category: Option<Category>) -> Call {
		Call::Lookup {
			key: key.to_string(),
			domain: domain.map(str::to_string),
			category,
		}
	}

	fn plural_call(key: &str, key_plural: &str, n: u64, domain: Option<&str>, category: Option<Category>) -> Call {
		Call::Plural {
			key: key.to_string(),
			key_plural: key_plural.to_string(),
			n,
			domain: domain.map(str::to_string),
			category,
		}
	}

	fn spanish() -> Translator<MemoryCatalog> {
		let mut catalog = MemoryCatalog::new("app");
		catalog.insert("app", "Hello %world%!", "¡Hola %world%!");
		catalog.insert("app", context_key("menu", "Open"), "Abrir");
		catalog.insert("docs", context_key("menu", "Open"), "Abrir documento");
		catalog.insert_in(Category::Time, "app", context_key("clock", "%H:%M"), "%H h %M");
		catalog.insert_plural("app", "%n% file", ["%n% archivo", "%n% archivos"]);
		catalog.insert_plural(
			"app",
			context_key("disk", "%n% file"),
			["%n% fichero", "%n% ficheros"],
		);
		Translator::new(catalog)
	}

	#[test]
	fn test_context_key_uses_eot() {
		assert_eq!(context_key("menu", "Open"), "menu\u{4}Open");
		assert_eq!(context_key("", "Open"), "\u{4}Open");
	}

	#[test]
	fn test_gettext_hit_and_miss() {
		let tr = spanish();
		assert_eq!(
			tr.gettext("Hello %world%!", Some(&[("world", "Tierra")])),
			"¡Hola Tierra!"
		);
		assert_eq!(tr.gettext("Goodbye", None), "Goodbye");
	}

	#[test]
	fn test_pgettext_hit() {
		assert_eq!(spanish().pgettext("menu", "Open", None), "Abrir");
	}

	#[test]
	fn test_pgettext_miss_returns_msgid() {
		let tr = spanish();
		assert_eq!(tr.pgettext("toolbar", "Open", None), "Open");
		assert_eq!(tr.pgettext("ctx", "id", None), "id");
	}

	#[test]
	fn test_pgettext_miss_still_substitutes() {
		assert_eq!(
			spanish().pgettext("toolbar", "Open %file%", Some(&[("file", "a.txt")])),
			"Open a.txt"
		);
	}

	#[test]
	fn test_dpgettext_routes_to_domain() {
		let tr = spanish();
		assert_eq!(tr.dpgettext("docs", "menu", "Open", None), "Abrir documento");
		assert_eq!(tr.dpgettext("other", "menu", "Open", None), "Open");
	}

	#[test]
	fn test_dcpgettext_routes_to_category() {
		let tr = spanish();
		assert_eq!(tr.dcpgettext("app", "clock", "%H:%M", Category::Time, None), "%H h %M");
		assert_eq!(tr.dcpgettext("app", "clock", "%H:%M", Category::Messages, None), "%H:%M");
	}

	#[test]
	fn test_ngettext_selects_form() {
		let tr = spanish();
		let one = [("n", "1")];
		let many = [("n", "4")];
		assert_eq!(tr.ngettext("%n% file", "%n% files", 1, Some(&one)), "1 archivo");
		assert_eq!(tr.ngettext("%n% file", "%n% files", 4, Some(&many)), "4 archivos");
		assert_eq!(tr.ngettext("%n% dir", "%n% dirs", 4, Some(&many)), "4 dirs");
	}

	#[test]
	fn test_npgettext_hit() {
		let tr = spanish();
		assert_eq!(tr.npgettext("disk", "%n% file", "%n% files", 1, None), "%n% fichero");
		assert_eq!(tr.npgettext("disk", "%n% file", "%n% files", 3, None), "%n% ficheros");
	}

	#[test]
	fn test_npgettext_miss_falls_back_by_count() {
		let tr = spanish();
		assert_eq!(tr.npgettext("ctx", "id", "ids", 1, None), "id");
		assert_eq!(tr.npgettext("ctx", "id", "ids", 2, None), "ids");
		assert_eq!(tr.npgettext("ctx", "id", "ids", 0, None), "ids");
	}

	#[test]
	fn test_contextual_plural_treats_either_echo_as_miss() {
		// A catalog that echoes the composite key even for n != 1.
		let tr = Translator::new(Recorder::replying("ctx\u{4}id"));
		assert_eq!(tr.npgettext("ctx", "id", "ids", 1, None), "id");
		assert_eq!(tr.npgettext("ctx", "id", "ids", 2, None), "ids");

		// A catalog that echoes the plural id even for n == 1.
		let tr = Translator::new(Recorder::replying("ids"));
		assert_eq!(tr.npgettext("ctx", "id", "ids", 1, None), "id");
		assert_eq!(tr.npgettext("ctx", "id", "ids", 2, None), "ids");
	}

	#[test]
	fn test_contextual_singular_only_composite_echo_is_miss() {
		let tr = Translator::new(Recorder::replying("ctx\u{4}id"));
		assert_eq!(tr.pgettext("ctx", "id", None), "id");

		// A reply equal to the bare msgid is a translation, not a miss.
		let tr = Translator::new(Recorder::replying("id"));
		assert_eq!(tr.pgettext("ctx", "id", None), "id");

		let tr = Translator::new(Recorder::replying("ids"));
		assert_eq!(tr.pgettext("ctx", "id", None), "ids");
	}

	#[test]
	fn test_non_contextual_echo_is_returned_verbatim() {
		let tr = Translator::new(Recorder::replying("ids"));
		assert_eq!(tr.ngettext("id", "ids", 1, None), "ids");
	}

	#[test]
	fn test_entry_points_route_to_expected_primitive() {
		let rec = Recorder::default();
		let tr = Translator::new(&rec);
		let t = Category::Time;

		tr.gettext("a", None);
		tr.dgettext("d", "a", None);
		tr.dcgettext("d", "a", t, None);
		tr.pgettext("c", "a", None);
		tr.dpgettext("d", "c", "a", None);
		tr.dcpgettext("d", "c", "a", t, None);
		tr.ngettext("a", "as", 2, None);
		tr.dngettext("d", "a", "as", 2, None);
		tr.dcngettext("d", "a", "as", 2, t, None);
		tr.npgettext("c", "a", "as", 2, None);
		tr.dnpgettext("d", "c", "a", "as", 2, None);
		tr.dcnpgettext("d", "c", "a", "as", 2, t, None);

		let ctx = "c\u{4}a";
		assert_eq!(
			rec.calls(),
			vec![
				lookup_call("a", None, None),
				lookup_call("a", Some("d"), None),
				lookup_call("a", Some("d"), Some(t)),
				lookup_call(ctx, None, None),
				lookup_call(ctx, Some("d"), None),
				lookup_call(ctx, Some("d"), Some(t)),
				plural_call("a", "as", 2, None, None),
				plural_call("a", "as", 2, Some("d"), None),
				plural_call("a", "as", 2, Some("d"), Some(t)),
				plural_call(ctx, "as", 2, None, None),
				plural_call(ctx, "as", 2, Some("d"), None),
				plural_call(ctx, "as", 2, Some("d"), Some(t)),
			]
		);
	}

	#[test]
	fn test_every_entry_point_substitutes() {
		let tr = Translator::new(Recorder::replying("%who% says hi"));
		let ph: Placeholders<'_> = &[("who", "Ana")];
		let t = Category::Messages;
		let expected = "Ana says hi";

		assert_eq!(tr.gettext("x", Some(ph)), expected);
		assert_eq!(tr.dgettext("d", "x", Some(ph)), expected);
		assert_eq!(tr.dcgettext("d", "x", t, Some(ph)), expected);
		assert_eq!(tr.pgettext("c", "x", Some(ph)), expected);
		assert_eq!(tr.dpgettext("d", "c", "x", Some(ph)), expected);
		assert_eq!(tr.dcpgettext("d", "c", "x", t, Some(ph)), expected);
		assert_eq!(tr.ngettext("x", "xs", 2, Some(ph)), expected);
		assert_eq!(tr.dngettext("d", "x", "xs", 2, Some(ph)), expected);
		assert_eq!(tr.dcngettext("d", "x", "xs", 2, t, Some(ph)), expected);
		assert_eq!(tr.npgettext("c", "x", "xs", 2, Some(ph)), expected);
		assert_eq!(tr.dnpgettext("d", "c", "x", "xs", 2, Some(ph)), expected);
		assert_eq!(tr.dcnpgettext("d", "c", "x", "xs", 2, t, Some(ph)), expected);
	}

	#[test]
	fn test_resolve_with_lookup_builder() {
		let tr = spanish();
		let lookup = Lookup::new("Open").context("menu").domain("docs");
		assert_eq!(tr.resolve(&lookup, None), "Abrir documento");
		assert_eq!(lookup.target, Override::Domain("docs"));
	}

	#[test]
	fn test_accessors() {
		let mut tr = spanish();
		tr.catalog_mut().set_default_domain("docs");
		assert_eq!(tr.catalog().default_domain(), "docs");
		assert_eq!(tr.pgettext("menu", "Open", None), "Abrir documento");
		assert_eq!(tr.into_inner().default_domain(), "docs");
	}

	proptest! {
		#[test]
		fn contextual_miss_returns_msgid(ctx in "[a-z]{1,8}", id in "[a-zA-Z ]{1,16}") {
			let tr = Translator::new(MemoryCatalog::new("app"));
			prop_assert_eq!(tr.pgettext(&ctx, &id, None), id);
		}

		#[test]
		fn contextual_plural_miss_returns_source(ctx in "[a-z]{1,8}", id in "[a-z]{1,8}", n in 0u64..1000) {
			let tr = Translator::new(MemoryCatalog::new("app"));
			let id_plural = format!("{id}s");
			let expected = if n == 1 { id.clone() } else { id_plural.clone() };
			prop_assert_eq!(tr.npgettext(&ctx, &id, &id_plural, n, None), expected);
		}
	}
}
