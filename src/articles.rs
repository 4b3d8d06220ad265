//! The compiled-in article catalog.
//!
//! Articles are fixed for the lifetime of the process. Their order in
//! [`ARTICLES`] is the order every result list is presented in.

use chrono::NaiveDate;
use serde::Serialize;

/// Storage format of [`Article::date`].
const DATE_FORMAT: &str = "%Y-%m-%d";
/// Month abbreviation, day without padding and four digit year (`Oct 9, 2018`).
const DISPLAY_DATE_FORMAT: &str = "%b %-d, %Y";

/// A single searchable post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Article {
	pub id: u32,
	pub title: &'static str,
	pub body: &'static str,
	pub date: &'static str,
}

impl Article {
	/// Parse the publication date, returning `None` for malformed values.
	#[must_use]
	pub fn published(&self) -> Option<NaiveDate> {
		NaiveDate::parse_from_str(self.date, DATE_FORMAT).ok()
	}

	/// Publication date formatted for display.
	#[must_use]
	pub fn date_label(&self) -> String {
		format_date(self.date)
	}
}

/// Format a `YYYY-MM-DD` date as `Mon D, YYYY`.
///
/// Values that do not parse are returned unchanged so a bad entry still
/// renders something recognisable.
#[must_use]
pub fn format_date(raw: &str) -> String {
	match NaiveDate::parse_from_str(raw, DATE_FORMAT) {
		Ok(date) => date.format(DISPLAY_DATE_FORMAT).to_string(),
		Err(_) => raw.to_string(),
	}
}

pub static ARTICLES: [Article; 10] = [
	Article {
		id: 1,
		title: "Understanding the difference between grid-template and grid-auto",
		body: "CSS Grid offers grid-template-columns and grid-auto-columns. Learn when each applies and how they interact in explicit vs implicit grids.",
		date: "2018-10-09",
	},
	Article {
		id: 2,
		title: "A gentle intro to Flexbox gaps",
		body: "Flexbox now supports the gap property. It simplifies spacing between items without margins and negative tricks.",
		date: "2020-03-01",
	},
	Article {
		id: 3,
		title: "React keys and list rendering",
		body: "Why keys matter for reconciliation, what makes a good key, and common pitfalls when mapping arrays.",
		date: "2019-07-15",
	},
	Article {
		id: 4,
		title: "Grid areas for quick page layouts",
		body: "Name your grid areas to make page templates legible. Combine with repeat and minmax for robust layouts.",
		date: "2021-02-11",
	},
	Article {
		id: 5,
		title: "TypeScript basics for React devs",
		body: "Props, discriminated unions, generics, and how to type hooks without pain.",
		date: "2022-08-30",
	},
	Article {
		id: 6,
		title: "CSS container queries in practice",
		body: "Component-first responsive design using container query units and inline-size containment.",
		date: "2023-05-05",
	},
	Article {
		id: 7,
		title: "Next.js data fetching essentials",
		body: "Client vs server components, caching, and when to opt into dynamic rendering.",
		date: "2024-01-20",
	},
	Article {
		id: 8,
		title: "Grid vs Flexbox: choose the right tool",
		body: "Layout strategies, mental models, and performance considerations when mixing Grid and Flexbox.",
		date: "2019-11-02",
	},
	Article {
		id: 9,
		title: "Accessible modals without a library",
		body: "Focus trapping, aria attributes, inert backgrounds, and escape handling.",
		date: "2020-06-18",
	},
	Article {
		id: 10,
		title: "Highlighting search terms with RegExp",
		body: "Escape user input, match case-insensitive, and wrap with mark tags for visibility.",
		date: "2017-04-22",
	},
];
