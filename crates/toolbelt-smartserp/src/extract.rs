//! Search filters from free-text prompts.
//!
//! Trigger phrases in English, Italian, French and Spanish are matched
//! case-insensitively and removed from the prompt. Each concern has its own
//! ordered table of `(pattern, value)` rules; adding a language means adding
//! rows. Passes run in a fixed order over a progressively stripped copy:
//! file type, safe search, content type, date window, site restriction.

use crate::filters::{DateRestrict, FileType, FilterSet, SafeSearch, SearchType, SiteFilter};
use regex::Regex;
use std::sync::OnceLock;
use tracing::debug;

/// Filters found in a prompt and the text left once their triggers are gone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    pub filters: FilterSet,
    /// Whitespace-collapsed remainder, ending in one `filetype:` directive
    /// when a file type was found.
    pub residual: String,
}

impl Extraction {
    /// The `q` to send: the residual minus directives, or `original` when
    /// nothing is left, plus the extracted file type directive.
    pub fn final_query(&self, original: &str) -> String {
        let mut query = strip_directives(&self.residual);
        if query.is_empty() {
            query = strip_directives(original);
        }

        if let Some(file_type) = self.filters.file_type {
            if !query.is_empty() {
                query.push(' ');
            }
            query.push_str(&file_type.directive());
        }
        query
    }
}

/// Extracts filters from `prompt`. Never fails.
pub fn extract(prompt: &str) -> Extraction {
    let mut filters = FilterSet::default();
    let mut text = prompt.to_string();

    if let Some(rule) = file_type_rules().iter().find(|r| r.pattern.is_match(&text)) {
        filters.file_type = Some(rule.value);
        text = strip(&rule.pattern, &text);
    }

    if let Some((mode, triggers)) = safe_search_tables()
        .iter()
        .find(|(_, triggers)| triggers.iter().any(|p| p.is_match(&text)))
    {
        filters.safe = Some(*mode);
        for pattern in triggers {
            text = strip(pattern, &text);
        }
    }

    if let Some(rule) = content_type_rules().iter().find(|r| r.pattern.is_match(&text)) {
        filters.search_type = Some(rule.value);
        text = strip(&rule.pattern, &text);
    }

    for rule in date_rules() {
        let Some(caps) = rule.pattern.captures(&text) else {
            continue;
        };
        // A count that is zero or does not fit leaves the window unset.
        let count = match caps.name("n") {
            Some(m) => m.as_str().parse::<u32>().ok().filter(|n| *n > 0),
            None => Some(1),
        };
        if count.is_none() {
            debug!(phrase = %&caps[0], "Ignoring date window with unusable count");
        }
        filters.date_restrict = count.map(|n| rule.value.window(n));
        text = strip(&rule.pattern, &text);
        break;
    }

    let site = site_pattern()
        .captures(&text)
        .and_then(|caps| caps.name("site"))
        .map(|m| m.as_str().to_string());
    if let Some(site) = site {
        text = strip(site_pattern(), &text);
        let exclude = exclude_patterns().iter().any(|p| p.is_match(&text));
        if exclude {
            for pattern in exclude_patterns() {
                text = strip(pattern, &text);
            }
        }
        filters.site_search = Some(site);
        filters.site_search_filter = Some(if exclude {
            SiteFilter::Exclude
        } else {
            SiteFilter::Include
        });
    }

    let mut residual = collapse_whitespace(&text);
    if let Some(file_type) = filters.file_type {
        if !residual.is_empty() {
            residual.push(' ');
        }
        residual.push_str(&file_type.directive());
    }

    debug!(filters = ?filters, residual = %residual, "Prompt filters extracted");
    Extraction { filters, residual }
}

struct Rule<T> {
    pattern: Regex,
    value: T,
}

fn compile<T: Copy>(table: &[(&str, T)]) -> Vec<Rule<T>> {
    table
        .iter()
        .map(|(pattern, value)| Rule {
            pattern: compile_one(pattern),
            value: *value,
        })
        .collect()
}

fn compile_one(pattern: &str) -> Regex {
    Regex::new(&format!("(?i){}", pattern)).expect("prompt filter pattern should compile")
}

fn file_type_rules() -> &'static [Rule<FileType>] {
    static RULES: OnceLock<Vec<Rule<FileType>>> = OnceLock::new();
    RULES.get_or_init(|| {
        compile(&[
            (r"(?:\bfiletype:\s*)?\bpdf\b", FileType::Pdf),
            (r"(?:\bfiletype:\s*)?\bdocx?\b", FileType::Docx),
            (r"(?:\bfiletype:\s*)?\bpptx?\b", FileType::Pptx),
            (r"(?:\bfiletype:\s*)?\bxlsx?\b", FileType::Xlsx),
            (r"(?:\bfiletype:\s*)?\btxt\b", FileType::Txt),
            (r"(?:\bfiletype:\s*)?\bcsv\b", FileType::Csv),
            (r"(?:\bfiletype:\s*)?\bhtml?\b", FileType::Html),
        ])
    })
}

/// Enable triggers first: they win when both kinds appear.
fn safe_search_tables() -> &'static [(SafeSearch, Vec<Regex>)] {
    static TABLES: OnceLock<Vec<(SafeSearch, Vec<Regex>)>> = OnceLock::new();
    TABLES.get_or_init(|| {
        let enable = [
            r"safe\s*search\s*on",
            r"safe\s*mode",
            r"filtra contenuti espliciti",
            r"filter explicit content",
            r"filtrer contenu explicite",
            r"filtrar contenido explícito",
            r"contenido explícito",
            r"contenuti sicuri",
            r"contenuto adatto a tutti",
        ];
        let disable = [
            r"safe\s*search\s*off",
            r"no safe\s*search",
            r"no filter explicit content",
            r"no filtro contenuti espliciti",
            r"pas de filtre contenu explicite",
            r"sans filtre contenu explicite",
            r"sin filtro contenido explícito",
            r"sin contenido explícito",
            r"contenuti espliciti",
        ];
        vec![
            (SafeSearch::Active, enable.iter().map(|p| compile_one(p)).collect()),
            (SafeSearch::Off, disable.iter().map(|p| compile_one(p)).collect()),
        ]
    })
}

fn content_type_rules() -> &'static [Rule<SearchType>] {
    static RULES: OnceLock<Vec<Rule<SearchType>>> = OnceLock::new();
    RULES.get_or_init(|| {
        compile(&[
            (r"\bimmagini\b", SearchType::Image),
            (r"\bimages?\b", SearchType::Image),
        ])
    })
}

#[derive(Debug, Clone, Copy)]
enum DateUnit {
    Days,
    Weeks,
    Months,
    Years,
}

impl DateUnit {
    fn window(self, count: u32) -> DateRestrict {
        match self {
            DateUnit::Days => DateRestrict::Days(count),
            DateUnit::Weeks => DateRestrict::Weeks(count),
            DateUnit::Months => DateRestrict::Months(count),
            DateUnit::Years => DateRestrict::Years(count),
        }
    }
}

/// One list across languages; Italian rows precede the Spanish ones they
/// would otherwise collide with ("ultimo mese" / "último mes").
fn date_rules() -> &'static [Rule<DateUnit>] {
    static RULES: OnceLock<Vec<Rule<DateUnit>>> = OnceLock::new();
    RULES.get_or_init(|| {
        compile(&[
            // it
            (r"\bultim[io]\s*(?P<n>\d+)\s*giorni\b", DateUnit::Days),
            (r"\bultimo\s*mese\b", DateUnit::Months),
            (r"\bultima\s*settimana\b", DateUnit::Weeks),
            (r"\bultimo\s*anno\b", DateUnit::Years),
            // en
            (r"\blast\s*(?P<n>\d+)\s*days?\b", DateUnit::Days),
            (r"\blast\s*month\b", DateUnit::Months),
            (r"\blast\s*week\b", DateUnit::Weeks),
            (r"\blast\s*year\b", DateUnit::Years),
            // fr
            (r"\bderniers?\s*(?P<n>\d+)\s*jours?\b", DateUnit::Days),
            (r"\bdernier\s*mois\b", DateUnit::Months),
            (r"\bderni[èe]re\s*semaine\b", DateUnit::Weeks),
            (r"\bderni[èe]re\s*ann[ée]e\b", DateUnit::Years),
            // es
            (r"\b[uú]ltimos?\s*(?P<n>\d+)\s*d[ií]as?\b", DateUnit::Days),
            (r"\b[uú]ltimo\s*mes\b", DateUnit::Months),
            (r"\b[uú]ltima\s*semana\b", DateUnit::Weeks),
            (r"\b[uú]ltimo\s*a[ñn]o\b", DateUnit::Years),
        ])
    })
}

fn site_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| compile_one(r"\b(?:site\s+web|sito|sitio|site)\s+(?P<site>\S+)"))
}

fn exclude_patterns() -> &'static [Regex] {
    static PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        [
            r"\bescludi sito\b",
            r"\bescludi\b",
            r"\bexclude site\b",
            r"\bexclude\b",
            r"\bexclure site\b",
            r"\bexclure\b",
            r"\bexcluir sitio\b",
            r"\bexcluir\b",
        ]
        .into_iter()
        .map(compile_one)
        .collect()
    })
}

fn directive_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| compile_one(r"\bfiletype:\S*"))
}

fn strip(pattern: &Regex, text: &str) -> String {
    pattern.replace_all(text, "").into_owned()
}

fn strip_directives(text: &str) -> String {
    collapse_whitespace(&strip(directive_pattern(), text))
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
