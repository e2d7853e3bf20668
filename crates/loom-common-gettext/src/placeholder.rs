// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! `%name%` placeholder substitution.

/// Ordered placeholder mapping: `(name, value)` pairs, names without the
/// surrounding `%`.
pub type Placeholders<'a> = &'a [(&'a str, &'a str)];

/// Replace every `%name%` in `text` with its value.
///
/// Pairs are applied one after another in slice order, each pass rewriting
/// the output of the previous one. A value that itself contains `%other%`
/// is therefore expanded again if `other` comes later in the slice.
/// There is no escape for a literal `%`.
///
/// `None` and an empty slice both return `text` unchanged.
///
/// # Example
///
/// ```
/// use loom_common_gettext::substitute;
///
/// assert_eq!(substitute("Hello %world%!", Some(&[("world", "Earth")])), "Hello Earth!");
/// assert_eq!(substitute("Hello %world%!", None), "Hello %world%!");
/// ```
pub fn substitute(text: impl Into<String>, placeholders: Option<Placeholders<'_>>) -> String {
	let mut text = text.into();
	let Some(placeholders) = placeholders else {
		return text;
	};

	for (name, value) in placeholders {
		let token = format!("%{name}%");
		if text.contains(&token) {
			text = text.replace(&token, value);
		}
	}

	text
}
