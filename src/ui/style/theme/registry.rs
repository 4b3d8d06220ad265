use std::collections::{BTreeMap, HashMap};
use std::sync::OnceLock;

use super::builtins;
use super::types::{Theme, ThemeRegistration};

#[derive(Debug)]
struct ThemeEntry {
	display_name: String,
	theme: Theme,
}

#[derive(Debug, Default)]
struct ThemeRegistry {
	canonical: BTreeMap<String, ThemeEntry>,
	aliases: HashMap<String, String>,
}

impl ThemeRegistry {
	fn from_registrations(registrations: Vec<ThemeRegistration>) -> Self {
		let mut registry = Self::default();
		for ThemeRegistration {
			name,
			theme,
			aliases,
		} in registrations
		{
			let normalized = normalize_name(&name);
			for alias in aliases {
				let alias = normalize_name(&alias);
				if alias != normalized {
					registry.aliases.insert(alias, normalized.clone());
				}
			}
			registry.canonical.insert(
				normalized,
				ThemeEntry {
					display_name: name,
					theme,
				},
			);
		}
		registry
	}

	fn get(&self, name: &str) -> Option<Theme> {
		let normalized = normalize_name(name);
		if let Some(entry) = self.canonical.get(&normalized) {
			return Some(entry.theme);
		}

		let target = self.aliases.get(&normalized)?;
		self.canonical.get(target).map(|entry| entry.theme)
	}
}

fn registry() -> &'static ThemeRegistry {
	static REGISTRY: OnceLock<ThemeRegistry> = OnceLock::new();
	REGISTRY.get_or_init(|| ThemeRegistry::from_registrations(builtins::registrations()))
}

/// Fold a theme name or alias to its lookup key.
pub(super) fn normalize_name(name: &str) -> String {
	name.trim()
		.to_ascii_lowercase()
		.chars()
		.map(|ch| if ch == ' ' || ch == '_' { '-' } else { ch })
		.collect()
}

/// Lookup a theme by case-insensitive name or alias.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	registry().get(name)
}

/// Canonical theme names, sorted case-insensitively.
#[must_use]
pub fn names() -> Vec<String> {
	let mut names: Vec<String> = registry()
		.canonical
		.values()
		.map(|entry| entry.display_name.clone())
		.collect();
	names.sort_unstable_by_key(|name| name.to_ascii_lowercase());
	names
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn builtin_themes_are_registered() {
		let names = names();
		assert!(names.iter().any(|name| name == "midnight"));
		assert!(names.iter().any(|name| name == "paper"));
		assert!(by_name("Midnight").is_some());
		assert!(by_name("light").is_some(), "alias should resolve");
	}

	#[test]
	fn unknown_names_resolve_to_nothing() {
		assert!(by_name("no-such-theme").is_none());
	}

	#[test]
	fn lookup_keys_ignore_case_and_separators() {
		assert_eq!(normalize_name("  Deep_Sea Blue "), "deep-sea-blue");
		assert_eq!(by_name(" PAPER "), by_name("paper"));
	}

	#[test]
	fn names_are_sorted_case_insensitively() {
		let sorted = names();
		let mut manual = sorted.clone();
		manual.sort_unstable_by_key(|a| a.to_ascii_lowercase());
		assert_eq!(sorted, manual);
	}
}
