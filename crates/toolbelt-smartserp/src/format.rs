//! Markdown and JSON rendering of search results.

use crate::client::SearchItem;
use crate::filters::FilterSet;
use crate::i18n::Messages;
use regex::{Regex, RegexBuilder};
use serde_json::json;
use std::collections::HashSet;
use std::sync::OnceLock;

/// Renders results as Markdown with the words of `original_query` in bold.
pub fn markdown(
    items: &[SearchItem],
    final_query: &str,
    original_query: &str,
    messages: &Messages,
) -> String {
    let highlighter = highlighter(original_query);
    let mut lines = vec![messages.results_for(final_query)];

    for (i, item) in items.iter().enumerate() {
        let title = or_placeholder(&strip_braces(&item.title), "No title");
        let link = or_placeholder(&item.link, "No link");
        let snippet = strip_braces(&item.snippet);
        let snippet = match &highlighter {
            Some(re) => re.replace_all(&snippet, "**${0}**").into_owned(),
            None => snippet,
        };

        lines.push(format!("### Result {}", i + 1));
        lines.push(format!("[{}]({})", title, link));
        lines.push(snippet);
        lines.push(link);
        lines.push(messages.separator.to_string());
    }

    lines.join("\n")
}

/// Renders results as pretty-printed JSON.
pub fn json(
    items: &[SearchItem],
    final_query: &str,
    language: Option<&str>,
    filters: &FilterSet,
) -> serde_json::Result<String> {
    let summary = json!({
        "query": final_query,
        "num_results": items.len(),
        "language": language,
        "filters": filters,
        "results": items,
    });
    serde_json::to_string_pretty(&summary)
}

fn word_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\w+").expect("word pattern should compile"))
}

/// Case-insensitive whole-word matcher for the distinct words of `query`.
fn highlighter(query: &str) -> Option<Regex> {
    let mut seen = HashSet::new();
    let mut words: Vec<String> = word_pattern()
        .find_iter(query)
        .map(|m| m.as_str().to_lowercase())
        .filter(|w| seen.insert(w.clone()))
        .collect();
    if words.is_empty() {
        return None;
    }
    words.sort_by_key(|w| std::cmp::Reverse(w.chars().count()));

    let alternation = words
        .iter()
        .map(|w| regex::escape(w))
        .collect::<Vec<_>>()
        .join("|");
    RegexBuilder::new(&format!(r"\b(?:{})\b", alternation))
        .case_insensitive(true)
        .build()
        .ok()
}

fn strip_braces(text: &str) -> String {
    text.replace(['{', '}'], "")
}

fn or_placeholder(text: &str, placeholder: &str) -> String {
    if text.is_empty() {
        placeholder.to_string()
    } else {
        text.to_string()
    }
}
