//! The SEOZoom operations exposed by this crate.
//!
//! Each operation maps to one `{endpoint}/?action=` pair of the SEOZoom v2 API,
//! takes an optional subject (keyword, domain, URL or project) plus a country
//! database, and may carry fixed extra parameters.

use crate::database::Database;
use serde::{Deserialize, Serialize};
use std::fmt;

/// What an operation is about, and the query parameter that carries it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subject {
    Keyword,
    Domain,
    Url,
    Project,
}

impl Subject {
    pub fn param(&self) -> &'static str {
        match self {
            Subject::Keyword => "keyword",
            Subject::Domain => "domain",
            Subject::Url => "url",
            Subject::Project => "id",
        }
    }

    pub fn describe(&self) -> &'static str {
        match self {
            Subject::Keyword => "Keyword to analyse",
            Subject::Domain => "Domain name, e.g. example.com",
            Subject::Url => "Full page URL",
            Subject::Project => "SEOZoom project identifier",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    KeywordMetrics,
    KeywordSerp,
    KeywordSerpHistory,
    KeywordRelated,
    DomainMetrics,
    DomainMetricsHistory,
    DomainAuthority,
    DomainNiches,
    DomainBestPages,
    DomainKeywords,
    DomainCompetitors,
    UrlPageZoomAuthority,
    UrlMetrics,
    UrlKeywords,
    UrlIntentGap,
    ProjectsList,
    ProjectOverview,
    ProjectKeywords,
    ProjectBestPages,
    ProjectPagesWithMoreKeywords,
    ProjectPagesWithPotential,
    ProjectWinnerPages,
    ProjectLoserPages,
}

impl Operation {
    pub const ALL: [Operation; 23] = [
        Operation::KeywordMetrics,
        Operation::KeywordSerp,
        Operation::KeywordSerpHistory,
        Operation::KeywordRelated,
        Operation::DomainMetrics,
        Operation::DomainMetricsHistory,
        Operation::DomainAuthority,
        Operation::DomainNiches,
        Operation::DomainBestPages,
        Operation::DomainKeywords,
        Operation::DomainCompetitors,
        Operation::UrlPageZoomAuthority,
        Operation::UrlMetrics,
        Operation::UrlKeywords,
        Operation::UrlIntentGap,
        Operation::ProjectsList,
        Operation::ProjectOverview,
        Operation::ProjectKeywords,
        Operation::ProjectBestPages,
        Operation::ProjectPagesWithMoreKeywords,
        Operation::ProjectPagesWithPotential,
        Operation::ProjectWinnerPages,
        Operation::ProjectLoserPages,
    ];

    /// Stable snake_case tag.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::KeywordMetrics => "keyword_metrics",
            Operation::KeywordSerp => "keyword_serp",
            Operation::KeywordSerpHistory => "keyword_serp_history",
            Operation::KeywordRelated => "keyword_related",
            Operation::DomainMetrics => "domain_metrics",
            Operation::DomainMetricsHistory => "domain_metrics_history",
            Operation::DomainAuthority => "domain_authority",
            Operation::DomainNiches => "domain_niches",
            Operation::DomainBestPages => "domain_best_pages",
            Operation::DomainKeywords => "domain_keywords",
            Operation::DomainCompetitors => "domain_competitors",
            Operation::UrlPageZoomAuthority => "url_page_zoom_authority",
            Operation::UrlMetrics => "url_metrics",
            Operation::UrlKeywords => "url_keywords",
            Operation::UrlIntentGap => "url_intent_gap",
            Operation::ProjectsList => "projects_list",
            Operation::ProjectOverview => "project_overview",
            Operation::ProjectKeywords => "project_keywords",
            Operation::ProjectBestPages => "project_best_pages",
            Operation::ProjectPagesWithMoreKeywords => "project_pages_with_more_keywords",
            Operation::ProjectPagesWithPotential => "project_pages_with_potential",
            Operation::ProjectWinnerPages => "project_winner_pages",
            Operation::ProjectLoserPages => "project_loser_pages",
        }
    }

    /// Name of the standalone function tool for this operation.
    pub fn tool_name(&self) -> String {
        format!("get_{}", self.name())
    }

    pub fn endpoint(&self) -> &'static str {
        match self.subject() {
            Some(Subject::Keyword) => "keywords",
            Some(Subject::Domain) => "domains",
            Some(Subject::Url) => "urls",
            Some(Subject::Project) | None => "projects",
        }
    }

    pub fn action(&self) -> &'static str {
        match self {
            Operation::KeywordMetrics | Operation::DomainMetrics | Operation::UrlMetrics => {
                "metrics"
            }
            Operation::KeywordSerp => "serp",
            Operation::KeywordSerpHistory => "serphistory",
            Operation::KeywordRelated => "related",
            Operation::DomainMetricsHistory => "metricshistory",
            Operation::DomainAuthority => "authority",
            Operation::DomainNiches => "niches",
            Operation::DomainBestPages | Operation::ProjectBestPages => "bestpages",
            Operation::DomainKeywords | Operation::UrlKeywords | Operation::ProjectKeywords => {
                "keywords"
            }
            Operation::DomainCompetitors => "competitor",
            Operation::UrlPageZoomAuthority => "urlpza",
            Operation::UrlIntentGap => "intentgap",
            Operation::ProjectsList => "list",
            Operation::ProjectOverview => "overview",
            Operation::ProjectPagesWithMoreKeywords => "pageswithmorekeywords",
            Operation::ProjectPagesWithPotential => "pageswithpotential",
            Operation::ProjectWinnerPages => "winnerpages",
            Operation::ProjectLoserPages => "loserpages",
        }
    }

    pub fn subject(&self) -> Option<Subject> {
        match self {
            Operation::KeywordMetrics
            | Operation::KeywordSerp
            | Operation::KeywordSerpHistory
            | Operation::KeywordRelated => Some(Subject::Keyword),
            Operation::DomainMetrics
            | Operation::DomainMetricsHistory
            | Operation::DomainAuthority
            | Operation::DomainNiches
            | Operation::DomainBestPages
            | Operation::DomainKeywords
            | Operation::DomainCompetitors => Some(Subject::Domain),
            Operation::UrlPageZoomAuthority
            | Operation::UrlMetrics
            | Operation::UrlKeywords
            | Operation::UrlIntentGap => Some(Subject::Url),
            Operation::ProjectsList => None,
            Operation::ProjectOverview
            | Operation::ProjectKeywords
            | Operation::ProjectBestPages
            | Operation::ProjectPagesWithMoreKeywords
            | Operation::ProjectPagesWithPotential
            | Operation::ProjectWinnerPages
            | Operation::ProjectLoserPages => Some(Subject::Project),
        }
    }

    /// Fixed extra query parameters. History endpoints take `history_date`.
    pub fn fixed_params(&self, history_date: &str) -> Vec<(&'static str, String)> {
        let limit = |n: u32| vec![("limit", n.to_string())];
        match self {
            Operation::KeywordSerpHistory | Operation::DomainMetricsHistory => {
                vec![("date", history_date.to_string())]
            }
            Operation::KeywordRelated
            | Operation::UrlIntentGap
            | Operation::ProjectBestPages => limit(100),
            Operation::DomainNiches
            | Operation::UrlKeywords
            | Operation::ProjectPagesWithMoreKeywords
            | Operation::ProjectPagesWithPotential
            | Operation::ProjectWinnerPages
            | Operation::ProjectLoserPages => limit(10),
            Operation::DomainBestPages | Operation::DomainCompetitors => limit(40),
            Operation::DomainKeywords => vec![
                ("type", "up".to_string()),
                ("offset", "0".to_string()),
                ("limit", "100".to_string()),
            ],
            _ => Vec::new(),
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Operation::KeywordMetrics => "Search volume, CPC and difficulty metrics for a keyword.",
            Operation::KeywordSerp => "Current SERP results for a keyword.",
            Operation::KeywordSerpHistory => "Historical SERP snapshot for a keyword.",
            Operation::KeywordRelated => "Keywords related to a keyword.",
            Operation::DomainMetrics => "Traffic and visibility metrics for a domain.",
            Operation::DomainMetricsHistory => "Historical metrics for a domain.",
            Operation::DomainAuthority => "Zoom Authority and trust scores for a domain.",
            Operation::DomainNiches => "Topical niches a domain ranks in.",
            Operation::DomainBestPages => "Best performing pages of a domain.",
            Operation::DomainKeywords => "Keywords a domain ranks for.",
            Operation::DomainCompetitors => "Organic competitors of a domain.",
            Operation::UrlPageZoomAuthority => "Page Zoom Authority of a URL.",
            Operation::UrlMetrics => "Traffic and ranking metrics for a URL.",
            Operation::UrlKeywords => "Keywords a URL ranks for.",
            Operation::UrlIntentGap => "Search intents a URL fails to cover.",
            Operation::ProjectsList => "List the SEOZoom projects of the account.",
            Operation::ProjectOverview => "Overview of a SEOZoom project.",
            Operation::ProjectKeywords => "Keywords monitored by a project.",
            Operation::ProjectBestPages => "Best performing pages of a project.",
            Operation::ProjectPagesWithMoreKeywords => "Project pages ranking for the most keywords.",
            Operation::ProjectPagesWithPotential => "Project pages with growth potential.",
            Operation::ProjectWinnerPages => "Project pages gaining positions.",
            Operation::ProjectLoserPages => "Project pages losing positions.",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A fully normalized request for one operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationCall {
    pub operation: Operation,
    pub subject: Option<String>,
    pub database: Database,
}

impl OperationCall {
    pub fn new(operation: Operation, subject: Option<String>, database: Database) -> Self {
        Self {
            operation,
            subject,
            database,
        }
    }

    /// Query parameters for this call, excluding credentials and `action`.
    pub fn query_params(&self, history_date: &str) -> Vec<(String, String)> {
        let mut params = vec![("db".to_string(), self.database.code().to_string())];

        if let (Some(subject), Some(value)) = (self.operation.subject(), &self.subject) {
            params.push((subject.param().to_string(), value.clone()));
        }

        params.extend(
            self.operation
                .fixed_params(history_date)
                .into_iter()
                .map(|(k, v)| (k.to_string(), v)),
        );
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_names_are_unique() {
        let names: HashSet<_> = Operation::ALL.iter().map(|op| op.name()).collect();
        assert_eq!(names.len(), Operation::ALL.len());
    }

    #[test]
    fn test_endpoint_action_pairs_are_unique() {
        let pairs: HashSet<_> = Operation::ALL
            .iter()
            .map(|op| (op.endpoint(), op.action()))
            .collect();
        assert_eq!(pairs.len(), Operation::ALL.len());
    }

    #[test]
    fn test_only_projects_list_has_no_subject() {
        let without: Vec<_> = Operation::ALL
            .iter()
            .filter(|op| op.subject().is_none())
            .collect();
        assert_eq!(without, vec![&Operation::ProjectsList]);
        assert_eq!(Operation::DomainBestPages.subject(), Some(Subject::Domain));
    }

    #[test]
    fn test_domain_keywords_params() {
        let call = OperationCall::new(
            Operation::DomainKeywords,
            Some("example.com".to_string()),
            Database::Es,
        );
        let params = call.query_params("2025-06-01");
        assert_eq!(
            params,
            vec![
                ("db".to_string(), "es".to_string()),
                ("domain".to_string(), "example.com".to_string()),
                ("type".to_string(), "up".to_string()),
                ("offset".to_string(), "0".to_string()),
                ("limit".to_string(), "100".to_string()),
            ]
        );
    }

    #[test]
    fn test_history_uses_given_date() {
        let call = OperationCall::new(
            Operation::KeywordSerpHistory,
            Some("seo".to_string()),
            Database::It,
        );
        let params = call.query_params("2024-12-01");
        assert!(params.contains(&("date".to_string(), "2024-12-01".to_string())));
    }

    #[test]
    fn test_projects_list_sends_only_db() {
        let call = OperationCall::new(Operation::ProjectsList, None, Database::Fr);
        assert_eq!(
            call.query_params("2025-06-01"),
            vec![("db".to_string(), "fr".to_string())]
        );
        assert_eq!(Operation::ProjectsList.endpoint(), "projects");
    }

    #[test]
    fn test_project_subject_param_is_id() {
        let call = OperationCall::new(
            Operation::ProjectOverview,
            Some("shop".to_string()),
            Database::It,
        );
        assert!(call
            .query_params("2025-06-01")
            .contains(&("id".to_string(), "shop".to_string())));
    }
}
