use crate::articles::Article;
use crate::search::Highlighter;

/// Trim surrounding whitespace and lower-case the query.
#[must_use]
pub fn normalize_query(query: &str) -> String {
	query.trim().to_lowercase()
}

/// Return the articles whose title or body contains `query`.
///
/// Matching is a case-insensitive substring test against the trimmed query.
/// Case is folded exactly as the [`Highlighter`] folds it, so an article is
/// kept for the same letters that get marked when it is displayed. An empty
/// (or whitespace-only) query keeps every article. Catalog order is preserved
/// in both cases.
#[must_use]
pub fn filter<'a>(articles: &'a [Article], query: &str) -> Vec<&'a Article> {
	let needle = query.trim();
	if needle.is_empty() {
		return articles.iter().collect();
	}

	let highlighter = Highlighter::new(needle);
	if !highlighter.is_active() {
		let needle = normalize_query(query);
		return articles
			.iter()
			.filter(|article| contains_lowercase(article, &needle))
			.collect();
	}

	articles
		.iter()
		.filter(|article| highlighter.is_match(article.title) || highlighter.is_match(article.body))
		.collect()
}

fn contains_lowercase(article: &Article, needle: &str) -> bool {
	article.title.to_lowercase().contains(needle) || article.body.to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::articles::ARTICLES;

	fn ids(articles: &[&Article]) -> Vec<u32> {
		articles.iter().map(|article| article.id).collect()
	}

	#[test]
	fn normalization_trims_and_lowercases() {
		assert_eq!(normalize_query("  GriD \t"), "grid");
		assert_eq!(normalize_query("   "), "");
	}

	#[test]
	fn empty_query_keeps_catalog_in_order() {
		let all = filter(&ARTICLES, "");
		assert_eq!(ids(&all), (1..=10).collect::<Vec<_>>());

		let blank = filter(&ARTICLES, " \t ");
		assert_eq!(ids(&blank), ids(&all));
	}

	#[test]
	fn matches_title_or_body_ignoring_case() {
		let grid = filter(&ARTICLES, "GRID");
		assert_eq!(ids(&grid), vec![1, 4, 8]);

		// "reconciliation" only appears in a body.
		let body_only = filter(&ARTICLES, "Reconciliation");
		assert_eq!(ids(&body_only), vec![3]);
	}

	#[test]
	fn surrounding_whitespace_is_ignored() {
		assert_eq!(ids(&filter(&ARTICLES, "  flexbox  ")), vec![2, 8]);
	}

	#[test]
	fn unmatched_query_yields_nothing() {
		assert!(filter(&ARTICLES, "kubernetes").is_empty());
	}

	#[test]
	fn metacharacters_are_plain_text() {
		assert_eq!(ids(&filter(&ARTICLES, "next.js")), vec![7]);
		assert!(filter(&ARTICLES, "n.xt").is_empty());
	}

	#[test]
	fn every_result_contains_the_query() {
		for query in ["react", "CSS", " layout", "a", "e, a"] {
			let needle = normalize_query(query);
			let results = filter(&ARTICLES, query);
			for article in &results {
				assert!(
					article.title.to_lowercase().contains(&needle)
						|| article.body.to_lowercase().contains(&needle),
					"article {} does not contain {query:?}",
					article.id
				);
			}
			let expected = ARTICLES
				.iter()
				.filter(|article| contains_lowercase(article, &needle))
				.count();
			assert_eq!(results.len(), expected);
		}
	}

	#[test]
	fn visibility_and_highlighting_fold_case_alike() {
		const DOTTED: Article = Article {
			id: 90,
			title: "İstanbul notes",
			body: "Travel log.",
			date: "2020-01-01",
		};
		const LONG_S: Article = Article {
			id: 91,
			title: "Ca\u{17f}e study",
			body: "Old typography.",
			date: "2020-01-02",
		};
		let catalog = [DOTTED, LONG_S];

		for query in ["i", "s", "K", "ſ"] {
			let highlighter = Highlighter::new(query);
			for article in &catalog {
				let visible = filter(std::slice::from_ref(article), query).len() == 1;
				let marked = highlighter
					.spans(article.title)
					.iter()
					.chain(highlighter.spans(article.body).iter())
					.any(|span| span.matched);
				assert_eq!(visible, marked, "article {} with query {query:?}", article.id);
			}
		}

		assert_eq!(ids(&filter(&catalog, "s")), vec![90, 91]);
	}
}
