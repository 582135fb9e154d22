//! Relevance ranking and plain-text rendering of search results.
//!
//! The rendered block is meant to be pasted into a language-model prompt.

use serp_core::SearchResult;

/// Reorder results by how many `keywords` they mention.
///
/// The score is the number of keywords found (case-insensitively) in the
/// title and snippet. Sorting is stable, so results with equal scores keep
/// their extraction order. With no keywords the input order is kept.
pub fn rank_results(results: &[SearchResult], keywords: Option<&[String]>) -> Vec<SearchResult> {
    let keywords: Vec<String> = match keywords {
        Some(keywords) if !keywords.is_empty() => keywords.iter().map(|k| k.to_lowercase()).collect(),
        _ => return results.to_vec(),
    };

    let mut scored: Vec<(usize, &SearchResult)> = results
        .iter()
        .map(|r| {
            let text = format!("{} {}", r.title, r.snippet).to_lowercase();
            let score = keywords.iter().filter(|k| text.contains(k.as_str())).count();
            (score, r)
        })
        .collect();

    scored.sort_by(|a, b| b.0.cmp(&a.0));
    scored.into_iter().map(|(_, r)| r.clone()).collect()
}

/// Render results as a numbered text block, ranked by `keywords` if given.
///
/// Returns `"No results found."` for an empty list.
pub fn format_results(results: &[SearchResult], keywords: Option<&[String]>) -> String {
    if results.is_empty() {
        return "No results found.".to_string();
    }

    let ranked = rank_results(results, keywords);
    let mut output = format!("=== Google Search Results ({} found) ===\n\n", ranked.len());

    for (i, r) in ranked.iter().enumerate() {
        output.push_str(&format!("[{}] {}\n", i + 1, r.title));
        output.push_str(&format!("    Snippet: {}\n", r.snippet));
        if !r.link.is_empty() {
            output.push_str(&format!("    URL: {}\n", r.link));
        }
        output.push('\n');
    }

    output
}
