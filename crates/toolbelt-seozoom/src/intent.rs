//! Natural-language intent routing for SEOZoom operations.
//!
//! A prompt is lower-cased and matched against an ordered table of
//! [`IntentRule`]s. The first rule that matches decides the operation; its
//! captures give the subject and an optional database token, which is
//! normalized through the alias table. There is no scoring: a phrase that
//! contains another rule's phrase must sit above it in the table.

use crate::database::Database;
use crate::operation::{Operation, OperationCall};
use async_trait::async_trait;
use regex::Regex;
use std::sync::OnceLock;
use tracing::debug;

/// Text returned when no rule matches.
pub const NOT_RECOGNIZED: &str = "Intent not recognized.";

/// Routing table in match order. Phrases are regex fragments over lower-cased
/// text; `storico metriche` must precede `metriche per il dominio`.
const ROUTES: &[(Operation, &str)] = &[
    (Operation::KeywordMetrics, r"metriche per la parola chiave"),
    (Operation::KeywordSerp, r"risultati serp per la parola chiave"),
    (Operation::KeywordSerpHistory, r"storico serp per la parola chiave"),
    (Operation::KeywordRelated, r"parole chiave correlate per"),
    (Operation::DomainMetricsHistory, r"storico metriche per il dominio"),
    (Operation::DomainMetrics, r"metriche per il dominio"),
    (Operation::DomainAuthority, r"autorit[aà] per il dominio"),
    (Operation::DomainNiches, r"nicchie per il dominio"),
    (Operation::DomainBestPages, r"migliori pagine per il dominio"),
    (Operation::DomainKeywords, r"parole chiave per il dominio"),
    (Operation::DomainCompetitors, r"competitors? per il dominio"),
    (Operation::UrlPageZoomAuthority, r"page zoom authority per l['’]url"),
    (Operation::UrlMetrics, r"metriche per l['’]url"),
    (Operation::UrlKeywords, r"parole chiave per l['’]url"),
    (Operation::UrlIntentGap, r"intent gap per l['’]url"),
    (Operation::ProjectsList, r"lista dei progetti"),
    (Operation::ProjectOverview, r"panoramica del progetto"),
    (Operation::ProjectKeywords, r"parole chiave monitorate per il progetto"),
    (Operation::ProjectBestPages, r"migliori pagine per il progetto"),
    (
        Operation::ProjectPagesWithMoreKeywords,
        r"pagine con pi[uù] parole chiave per il progetto",
    ),
    (Operation::ProjectPagesWithPotential, r"pagine con potenziale per il progetto"),
    (Operation::ProjectWinnerPages, r"pagine vincenti per il progetto"),
    (Operation::ProjectLoserPages, r"pagine perdenti per il progetto"),
];

/// One entry of the routing table.
#[derive(Debug, Clone)]
pub struct IntentRule {
    pub operation: Operation,
    pub pattern: Regex,
}

impl IntentRule {
    /// Builds a rule from an intent phrase.
    ///
    /// The pattern skips any prefix and requires the phrase, followed by a
    /// subject when the operation has one. Whatever follows the phrase is
    /// captured as `rest` and split by [`IntentRule::apply`]; the prompt does
    /// not need to end where the request does.
    pub fn new(operation: Operation, phrase: &str) -> Result<Self, regex::Error> {
        let pattern = if operation.subject().is_some() {
            format!(r"^.*?{phrase} (?P<rest>.+)$")
        } else {
            format!(r"^.*?{phrase}\b(?P<rest>.*)$")
        };

        Ok(Self {
            operation,
            pattern: Regex::new(&pattern)?,
        })
    }

    /// Applies the rule to already-normalized text.
    ///
    /// The first database suffix in `rest` ends the subject:
    /// `per il database <token>` accepts any token, `in <token>` only a known
    /// alias so that subjects like "scarpe in pelle" stay intact. Text after
    /// the suffix is ignored.
    pub fn apply(&self, text: &str) -> Option<OperationCall> {
        let caps = self.pattern.captures(text)?;
        let rest = caps.name("rest").map_or("", |m| m.as_str());

        let (head, token) = match database_suffix().captures(rest) {
            Some(suffix) => {
                let start = suffix.get(0).map_or(rest.len(), |m| m.start());
                let token = suffix
                    .name("db")
                    .or_else(|| suffix.name("db_in"))
                    .map(|m| m.as_str());
                (&rest[..start], token)
            }
            None => (rest, None),
        };

        let subject = if self.operation.subject().is_some() {
            let subject = head.trim_end_matches(|c: char| c.is_whitespace() || "?.!".contains(c));
            if subject.is_empty() {
                return None;
            }
            Some(subject.to_string())
        } else {
            None
        };

        Some(OperationCall::new(
            self.operation,
            subject,
            Database::resolve(token),
        ))
    }
}

fn database_suffix() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        let aliases = Database::alias_alternation();
        Regex::new(&format!(
            r"(?:^| )(?:per il database (?P<db>(?:{aliases})\b|[^\s?.!]+)|in (?P<db_in>{aliases})\b)"
        ))
        .expect("database suffix pattern should compile")
    })
}

impl PartialEq for IntentRule {
    fn eq(&self, other: &Self) -> bool {
        self.operation == other.operation && self.pattern.as_str() == other.pattern.as_str()
    }
}

impl Eq for IntentRule {}

/// The built-in routing table, compiled once.
pub fn default_rules() -> &'static [IntentRule] {
    static RULES: OnceLock<Vec<IntentRule>> = OnceLock::new();
    RULES.get_or_init(|| {
        ROUTES
            .iter()
            .map(|(operation, phrase)| {
                IntentRule::new(*operation, phrase).expect("intent pattern should compile")
            })
            .collect()
    })
}

/// Performs the request behind an [`OperationCall`] and renders the result.
///
/// Failures are reported inside the returned text, never as errors.
#[async_trait]
pub trait OperationHandler: Send + Sync {
    async fn handle(&self, call: &OperationCall) -> String;
}

/// Result of routing a prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteOutcome {
    Handled { call: OperationCall, output: String },
    NotRecognized,
}

impl RouteOutcome {
    pub fn is_recognized(&self) -> bool {
        matches!(self, RouteOutcome::Handled { .. })
    }

    pub fn call(&self) -> Option<&OperationCall> {
        match self {
            RouteOutcome::Handled { call, .. } => Some(call),
            RouteOutcome::NotRecognized => None,
        }
    }

    /// The handler output, or [`NOT_RECOGNIZED`].
    pub fn into_text(self) -> String {
        match self {
            RouteOutcome::Handled { output, .. } => output,
            RouteOutcome::NotRecognized => NOT_RECOGNIZED.to_string(),
        }
    }
}

/// Routes free text to SEOZoom operations.
#[derive(Debug, Clone)]
pub struct IntentRouter {
    rules: Vec<IntentRule>,
}

impl IntentRouter {
    pub fn new() -> Self {
        Self::with_rules(default_rules().to_vec())
    }

    /// Router over a custom table; order is match priority.
    pub fn with_rules(rules: Vec<IntentRule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[IntentRule] {
        &self.rules
    }

    /// Classifies `text` without dispatching it.
    pub fn resolve(&self, text: &str) -> Option<OperationCall> {
        let normalized = normalize(text);

        let call = self.rules.iter().find_map(|rule| rule.apply(&normalized));
        match &call {
            Some(call) => debug!(
                operation = %call.operation,
                database = %call.database,
                subject = ?call.subject,
                "Intent matched"
            ),
            None => debug!("No intent matched"),
        }
        call
    }

    /// Classifies `text` and dispatches the match to `handler`.
    pub async fn route(&self, text: &str, handler: &dyn OperationHandler) -> RouteOutcome {
        match self.resolve(text) {
            Some(call) => {
                let output = handler.handle(&call).await;
                RouteOutcome::Handled { call, output }
            }
            None => RouteOutcome::NotRecognized,
        }
    }
}

impl Default for IntentRouter {
    fn default() -> Self {
        Self::new()
    }
}

fn normalize(text: &str) -> String {
    text.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::Mutex;

    fn resolve(text: &str) -> Option<OperationCall> {
        IntentRouter::new().resolve(text)
    }

    fn call(operation: Operation, subject: Option<&str>, database: Database) -> OperationCall {
        OperationCall::new(operation, subject.map(str::to_string), database)
    }

    #[test]
    fn test_reference_prompts_route_to_expected_operation() {
        let cases = [
            ("Mostrami le metriche per la parola chiave seo", Operation::KeywordMetrics, Some("seo"), Database::It),
            ("Mostrami i risultati SERP per la parola chiave digital marketing per il database fr", Operation::KeywordSerp, Some("digital marketing"), Database::Fr),
            ("Mostrami lo storico SERP per la parola chiave digital marketing in uk", Operation::KeywordSerpHistory, Some("digital marketing"), Database::Uk),
            ("Mostrami le parole chiave correlate per smartphone per il database de", Operation::KeywordRelated, Some("smartphone"), Database::De),
            ("Mostrami le metriche per il dominio example.com", Operation::DomainMetrics, Some("example.com"), Database::It),
            ("Mostrami lo storico metriche per il dominio example.com per il database fr", Operation::DomainMetricsHistory, Some("example.com"), Database::Fr),
            ("Mostrami l'autorità per il dominio example.com", Operation::DomainAuthority, Some("example.com"), Database::It),
            ("Mostrami le nicchie per il dominio example.com per il database uk", Operation::DomainNiches, Some("example.com"), Database::Uk),
            ("Mostrami le migliori pagine per il dominio example.com in de", Operation::DomainBestPages, Some("example.com"), Database::De),
            ("Mostrami le parole chiave per il dominio example.com per il database es", Operation::DomainKeywords, Some("example.com"), Database::Es),
            ("Mostrami i competitor per il dominio example.com in fr", Operation::DomainCompetitors, Some("example.com"), Database::Fr),
            ("Mostrami la Page Zoom Authority per l'URL https://example.com/ per il database uk", Operation::UrlPageZoomAuthority, Some("https://example.com/"), Database::Uk),
            ("Mostrami le metriche per l'URL https://example.com/page/", Operation::UrlMetrics, Some("https://example.com/page/"), Database::It),
            ("Mostrami le parole chiave per l'URL https://example.com/page/ per il database es", Operation::UrlKeywords, Some("https://example.com/page/"), Database::Es),
            ("Mostrami l'intent gap per l'URL https://example.com/article/ in fr", Operation::UrlIntentGap, Some("https://example.com/article/"), Database::Fr),
            ("Mostrami la lista dei progetti", Operation::ProjectsList, None, Database::It),
            ("Mostrami la panoramica del progetto <NOME PROGETTO>", Operation::ProjectOverview, Some("<nome progetto>"), Database::It),
            ("Mostrami le parole chiave monitorate per il progetto <NOME PROGETTO> per il database fr", Operation::ProjectKeywords, Some("<nome progetto>"), Database::Fr),
            ("Mostrami le migliori pagine per il progetto <NOME PROGETTO> in uk", Operation::ProjectBestPages, Some("<nome progetto>"), Database::Uk),
            ("Mostrami le pagine con più parole chiave per il progetto <NOME PROGETTO> per il database de", Operation::ProjectPagesWithMoreKeywords, Some("<nome progetto>"), Database::De),
            ("Mostrami le pagine con potenziale per il progetto <NOME PROGETTO>", Operation::ProjectPagesWithPotential, Some("<nome progetto>"), Database::It),
            ("Mostrami le pagine vincenti per il progetto <NOME PROGETTO> per il database it", Operation::ProjectWinnerPages, Some("<nome progetto>"), Database::It),
            ("Mostrami le pagine perdenti per il progetto <NOME PROGETTO> in fr", Operation::ProjectLoserPages, Some("<nome progetto>"), Database::Fr),
        ];

        for (prompt, operation, subject, database) in cases {
            assert_eq!(
                resolve(prompt),
                Some(call(operation, subject, database)),
                "prompt: {prompt}"
            );
        }
    }

    #[test]
    fn test_every_operation_has_exactly_one_rule() {
        let router = IntentRouter::new();
        for op in Operation::ALL {
            let count = router.rules().iter().filter(|r| r.operation == op).count();
            assert_eq!(count, 1, "operation {op}");
        }
    }

    #[test]
    fn test_domain_and_project_phrasings_do_not_overlap() {
        let domain = resolve("migliori pagine per il dominio example.com");
        let project = resolve("migliori pagine per il progetto example.com");

        assert_eq!(domain.unwrap().operation, Operation::DomainBestPages);
        assert_eq!(project.unwrap().operation, Operation::ProjectBestPages);

        let router = IntentRouter::new();
        for text in [
            "migliori pagine per il dominio example.com",
            "migliori pagine per il progetto example.com",
        ] {
            let matching = router
                .rules()
                .iter()
                .filter(|rule| rule.apply(text).is_some())
                .count();
            assert_eq!(matching, 1, "text: {text}");
        }
    }

    #[test]
    fn test_history_rule_shadows_general_metrics_rule() {
        let call = resolve("storico metriche per il dominio example.com").unwrap();
        assert_eq!(call.operation, Operation::DomainMetricsHistory);
    }

    #[test]
    fn test_unknown_database_falls_back_to_default() {
        let call = resolve("metriche per il dominio example.com per il database xx").unwrap();
        assert_eq!(call.subject.as_deref(), Some("example.com"));
        assert_eq!(call.database, Database::It);
    }

    #[test]
    fn test_localized_database_names() {
        let call = resolve("nicchie per il dominio example.com per il database regno unito").unwrap();
        assert_eq!(call.database, Database::Uk);

        let call = resolve("nicchie per il dominio example.com in germania").unwrap();
        assert_eq!(call.database, Database::De);
    }

    #[test]
    fn test_projects_list_with_database() {
        let call = resolve("lista dei progetti per il database fr").unwrap();
        assert_eq!(call, OperationCall::new(Operation::ProjectsList, None, Database::Fr));
    }

    #[test]
    fn test_in_only_splits_on_known_alias() {
        let call = resolve("parole chiave correlate per scarpe in pelle").unwrap();
        assert_eq!(call.subject.as_deref(), Some("scarpe in pelle"));
        assert_eq!(call.database, Database::It);

        let call = resolve("parole chiave correlate per scarpe in pelle in es").unwrap();
        assert_eq!(call.subject.as_deref(), Some("scarpe in pelle"));
        assert_eq!(call.database, Database::Es);
    }

    #[test]
    fn test_text_after_phrase_is_allowed() {
        let call = resolve("Mostrami la lista dei progetti per favore").unwrap();
        assert_eq!(call, OperationCall::new(Operation::ProjectsList, None, Database::It));

        let call = resolve("lista dei progetti per il database fr grazie").unwrap();
        assert_eq!(call, OperationCall::new(Operation::ProjectsList, None, Database::Fr));
    }

    #[test]
    fn test_text_after_database_suffix_is_ignored() {
        let call = resolve("metriche per il dominio example.com per il database fr grazie").unwrap();
        assert_eq!(call.operation, Operation::DomainMetrics);
        assert_eq!(call.subject.as_deref(), Some("example.com"));
        assert_eq!(call.database, Database::Fr);

        let call = resolve("nicchie per il dominio example.com in regno unito, grazie!").unwrap();
        assert_eq!(call.subject.as_deref(), Some("example.com"));
        assert_eq!(call.database, Database::Uk);
    }

    #[test]
    fn test_subject_rule_needs_a_subject() {
        assert_eq!(resolve("metriche per il dominio"), None);
        assert_eq!(resolve("metriche per il dominio per il database fr"), None);
    }

    #[test]
    fn test_trailing_punctuation_and_spacing() {
        let call = resolve("  Metriche   per il dominio Example.com?  ").unwrap();
        assert_eq!(call.subject.as_deref(), Some("example.com"));
        assert_eq!(call.database, Database::It);
    }

    #[test]
    fn test_unrecognized_text() {
        assert_eq!(resolve("tell me a joke"), None);
        assert_eq!(resolve(""), None);
    }

    #[test]
    fn test_custom_rule_table_respects_order() {
        let rules = vec![
            IntentRule::new(Operation::DomainMetrics, "metriche per il dominio").unwrap(),
            IntentRule::new(Operation::DomainMetricsHistory, "storico metriche per il dominio")
                .unwrap(),
        ];
        let router = IntentRouter::with_rules(rules);
        let call = router
            .resolve("storico metriche per il dominio example.com")
            .unwrap();
        assert_eq!(call.operation, Operation::DomainMetrics);
    }

    #[test]
    fn test_rule_equality() {
        let a = IntentRule::new(Operation::DomainNiches, "nicchie per il dominio").unwrap();
        let b = IntentRule::new(Operation::DomainNiches, "nicchie per il dominio").unwrap();
        let c = IntentRule::new(Operation::DomainAuthority, "nicchie per il dominio").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    struct RecordingHandler {
        calls: Mutex<Vec<OperationCall>>,
    }

    #[async_trait]
    impl OperationHandler for RecordingHandler {
        async fn handle(&self, call: &OperationCall) -> String {
            self.calls.lock().await.push(call.clone());
            format!("handled {}", call.operation)
        }
    }

    #[tokio::test]
    async fn test_route_dispatches_once() {
        let handler = RecordingHandler {
            calls: Mutex::new(Vec::new()),
        };
        let router = IntentRouter::new();

        let outcome = router
            .route("Mostrami le nicchie per il dominio example.com in uk", &handler)
            .await;

        assert!(outcome.is_recognized());
        assert_eq!(outcome.call().unwrap().operation, Operation::DomainNiches);
        assert_eq!(outcome.into_text(), "handled domain_niches");
        assert_eq!(handler.calls.lock().await.len(), 1);
    }

    #[tokio::test]
    async fn test_route_returns_sentinel_without_dispatch() {
        let handler = RecordingHandler {
            calls: Mutex::new(Vec::new()),
        };
        let outcome = IntentRouter::new().route("tell me a joke", &handler).await;

        assert_eq!(outcome, RouteOutcome::NotRecognized);
        assert_eq!(outcome.into_text(), NOT_RECOGNIZED);
        assert!(handler.calls.lock().await.is_empty());
    }
}
