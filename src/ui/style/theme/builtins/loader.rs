use std::borrow::Cow;
use std::collections::HashMap;

use anyhow::{Context, Result, bail};
use include_dir::{Dir, File};
use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

use crate::ui::style::theme::registry::normalize_name;
use crate::ui::style::theme::types::{Theme, ThemeRegistration};

pub(super) struct BuiltinThemes {
	pub(super) registrations: Vec<ThemeRegistration>,
	pub(super) default_theme: Theme,
}

#[derive(Debug, Deserialize)]
struct ThemeConfig {
	name: String,
	#[serde(default)]
	aliases: Vec<String>,
	#[serde(default)]
	default: bool,
	styles: ThemeStylesConfig,
}

impl ThemeConfig {
	fn into_document(self, context: &str) -> Result<ThemeDocument> {
		let theme = self.styles.into_theme(&format!("{context}.styles"))?;

		let registration = self
			.aliases
			.into_iter()
			.map(|alias| alias.trim().to_string())
			.filter(|alias| !alias.is_empty())
			.fold(ThemeRegistration::new(self.name, theme), |registration, alias| {
				registration.alias(alias)
			});

		Ok(ThemeDocument {
			registration,
			is_default: self.default,
		})
	}
}

/// Every element is optional except the match highlight, which must stay
/// visually distinct from surrounding text.
#[derive(Debug, Deserialize)]
struct ThemeStylesConfig {
	#[serde(default)]
	heading: StyleConfig,
	#[serde(default)]
	prompt: StyleConfig,
	#[serde(default)]
	input: StyleConfig,
	#[serde(default)]
	placeholder: StyleConfig,
	#[serde(default)]
	clear: StyleConfig,
	#[serde(default)]
	count: StyleConfig,
	#[serde(default)]
	title: StyleConfig,
	#[serde(default)]
	date: StyleConfig,
	#[serde(default)]
	body: StyleConfig,
	#[serde(default)]
	selected: StyleConfig,
	#[serde(default)]
	muted: StyleConfig,
	highlight: StyleConfig,
}

impl ThemeStylesConfig {
	fn into_theme(self, context: &str) -> Result<Theme> {
		let highlight = self.highlight.to_style(&format!("{context}.highlight"))?;
		if highlight == Style::new() {
			bail!("{context}.highlight must set a colour or modifier");
		}

		Ok(Theme {
			heading: self.heading.to_style(&format!("{context}.heading"))?,
			prompt: self.prompt.to_style(&format!("{context}.prompt"))?,
			input: self.input.to_style(&format!("{context}.input"))?,
			placeholder: self.placeholder.to_style(&format!("{context}.placeholder"))?,
			clear: self.clear.to_style(&format!("{context}.clear"))?,
			count: self.count.to_style(&format!("{context}.count"))?,
			title: self.title.to_style(&format!("{context}.title"))?,
			date: self.date.to_style(&format!("{context}.date"))?,
			body: self.body.to_style(&format!("{context}.body"))?,
			selected: self.selected.to_style(&format!("{context}.selected"))?,
			muted: self.muted.to_style(&format!("{context}.muted"))?,
			highlight,
		})
	}
}

struct ThemeDocument {
	registration: ThemeRegistration,
	is_default: bool,
}

#[derive(Debug, Default, Deserialize)]
struct StyleConfig {
	#[serde(default)]
	fg: Option<String>,
	#[serde(default)]
	bg: Option<String>,
	#[serde(default)]
	modifiers: Vec<String>,
}

impl StyleConfig {
	fn to_style(&self, context: &str) -> Result<Style> {
		let mut style = Style::new();

		if let Some(fg) = &self.fg {
			let color = parse_color(fg)
				.with_context(|| format!("{context}: invalid foreground colour `{fg}`"))?;
			style = style.fg(color);
		}

		if let Some(bg) = &self.bg {
			let color = parse_color(bg)
				.with_context(|| format!("{context}: invalid background colour `{bg}`"))?;
			style = style.bg(color);
		}

		for modifier in &self.modifiers {
			let value = parse_modifier(modifier)
				.with_context(|| format!("{context}: invalid modifier `{modifier}`"))?;
			style = style.add_modifier(value);
		}

		Ok(style)
	}
}

pub(super) fn load_builtin_themes(dir: &Dir) -> Result<BuiltinThemes> {
	let mut registrations = Vec::new();
	let mut default_theme: Option<(Theme, String)> = None;
	let mut claimed: HashMap<String, String> = HashMap::new();

	let mut files: Vec<_> = dir.files().collect();
	files.sort_by(|a, b| a.path().cmp(b.path()));

	for file in files {
		let document = parse_theme_file(file)?;
		let theme = document.registration.theme;
		claim_names(&mut claimed, &document.registration)?;

		if document.is_default {
			if let Some((_, existing_name)) = &default_theme {
				bail!(
					"multiple built-in themes are marked as default (`{existing_name}` and `{}`)",
					document.registration.name
				);
			}
			default_theme = Some((theme, document.registration.name.clone()));
		}

		registrations.push(document.registration);
	}

	let Some(first) = registrations.first() else {
		bail!("no built-in theme definitions were found");
	};
	let default_theme = default_theme.map_or(first.theme, |(theme, _)| theme);

	Ok(BuiltinThemes {
		registrations,
		default_theme,
	})
}

/// Reserve the lookup keys of a theme's name and aliases, failing when another
/// theme already answers to one of them.
fn claim_names(claimed: &mut HashMap<String, String>, registration: &ThemeRegistration) -> Result<()> {
	let owner = &registration.name;
	for key in std::iter::once(owner).chain(&registration.aliases) {
		let normalized = normalize_name(key);
		match claimed.get(&normalized) {
			Some(existing) if existing != owner => {
				bail!("built-in themes `{existing}` and `{owner}` both answer to `{key}`");
			}
			Some(_) => {}
			None => {
				claimed.insert(normalized, owner.clone());
			}
		}
	}
	Ok(())
}

fn parse_theme_file(file: &File) -> Result<ThemeDocument> {
	let path = file.path();
	let contents = file
		.contents_utf8()
		.with_context(|| format!("{path:?} is not valid UTF-8"))?;
	parse_theme_source(contents, &format!("{path:?}"))
}

fn parse_theme_source(contents: &str, context: &str) -> Result<ThemeDocument> {
	let config: ThemeConfig = toml::from_str(contents)
		.with_context(|| format!("failed to parse theme definition in {context}"))?;
	config.into_document(context)
}

fn parse_color(input: &str) -> Result<Color> {
	let value = input.trim();

	if let Some(hex) = value.strip_prefix('#') {
		return parse_hex_colour(hex);
	}

	if let Some(body) = value.strip_prefix("rgb(").and_then(|s| s.strip_suffix(')')) {
		return parse_rgb_triplet(body);
	}

	if let Ok(index) = value.parse::<u8>() {
		return Ok(Color::Indexed(index));
	}

	match normalise_key(value).as_ref() {
		"reset" | "none" | "default" => Ok(Color::Reset),
		"black" => Ok(Color::Black),
		"red" => Ok(Color::Red),
		"green" => Ok(Color::Green),
		"yellow" => Ok(Color::Yellow),
		"blue" => Ok(Color::Blue),
		"magenta" => Ok(Color::Magenta),
		"cyan" => Ok(Color::Cyan),
		"gray" | "grey" => Ok(Color::Gray),
		"dark_gray" | "dark_grey" => Ok(Color::DarkGray),
		"light_red" => Ok(Color::LightRed),
		"light_green" => Ok(Color::LightGreen),
		"light_yellow" => Ok(Color::LightYellow),
		"light_blue" => Ok(Color::LightBlue),
		"light_magenta" => Ok(Color::LightMagenta),
		"light_cyan" => Ok(Color::LightCyan),
		"white" => Ok(Color::White),
		other => bail!("unknown colour `{other}`"),
	}
}

fn parse_hex_colour(hex: &str) -> Result<Color> {
	let expanded = match hex.len() {
		3 => Cow::Owned(hex.chars().flat_map(|ch| [ch, ch]).collect::<String>()),
		6 => Cow::Borrowed(hex),
		_ => bail!("hex colours must be 3 or 6 characters long"),
	};

	let component = |range: std::ops::Range<usize>, name: &str| {
		expanded
			.get(range)
			.and_then(|digits| u8::from_str_radix(digits, 16).ok())
			.with_context(|| format!("invalid {name} component in `#{hex}`"))
	};

	Ok(Color::Rgb(
		component(0..2, "red")?,
		component(2..4, "green")?,
		component(4..6, "blue")?,
	))
}

fn parse_rgb_triplet(body: &str) -> Result<Color> {
	let components = body.split(',').map(str::trim).collect::<Vec<_>>();
	let [r, g, b] = components.as_slice() else {
		bail!(
			"expected three components for rgb() colour, found {}",
			components.len()
		);
	};

	Ok(Color::Rgb(
		parse_rgb_component(r, 'r')?,
		parse_rgb_component(g, 'g')?,
		parse_rgb_component(b, 'b')?,
	))
}

fn parse_rgb_component(value: &str, component: char) -> Result<u8> {
	value.parse::<u8>().with_context(|| {
		format!("invalid {component}-component `{value}` in rgb() colour specification")
	})
}

fn parse_modifier(input: &str) -> Result<Modifier> {
	match normalise_key(input).as_ref() {
		"bold" => Ok(Modifier::BOLD),
		"dim" => Ok(Modifier::DIM),
		"italic" => Ok(Modifier::ITALIC),
		"underline" | "underlined" => Ok(Modifier::UNDERLINED),
		"reversed" | "reverse" | "invert" | "inverted" => Ok(Modifier::REVERSED),
		"crossed_out" | "strikethrough" => Ok(Modifier::CROSSED_OUT),
		other => bail!("unknown modifier `{other}`"),
	}
}

fn normalise_key(value: &str) -> String {
	value
		.trim()
		.to_ascii_lowercase()
		.chars()
		.map(|ch| match ch {
			'-' | ' ' => '_',
			other => other,
		})
		.collect()
}
