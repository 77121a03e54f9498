//! Country databases and their localized aliases.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A SEOZoom country database.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Database {
    #[default]
    It,
    Uk,
    Es,
    Fr,
    De,
}

/// Localized token → database. Lookups are exact on the lower-cased token.
const DATABASE_ALIASES: &[(&str, Database)] = &[
    ("uk", Database::Uk),
    ("regno unito", Database::Uk),
    ("es", Database::Es),
    ("spagna", Database::Es),
    ("fr", Database::Fr),
    ("francia", Database::Fr),
    ("de", Database::De),
    ("germania", Database::De),
    ("it", Database::It),
    ("italia", Database::It),
];

impl Database {
    pub const ALL: [Database; 5] = [
        Database::It,
        Database::Uk,
        Database::Es,
        Database::Fr,
        Database::De,
    ];

    /// Two-letter code sent as the `db` query parameter.
    pub fn code(&self) -> &'static str {
        match self {
            Database::It => "it",
            Database::Uk => "uk",
            Database::Es => "es",
            Database::Fr => "fr",
            Database::De => "de",
        }
    }

    /// Looks up a localized token such as "regno unito" or "fr".
    pub fn from_alias(token: &str) -> Option<Database> {
        let token = token.trim().to_lowercase();
        DATABASE_ALIASES
            .iter()
            .find(|(alias, _)| *alias == token)
            .map(|(_, db)| *db)
    }

    /// Normalizes an optional token, falling back to the default database.
    pub fn resolve(token: Option<&str>) -> Database {
        match token {
            Some(token) => Self::from_alias(token).unwrap_or_else(|| {
                tracing::debug!(token = %token, "Unknown database token, using default");
                Database::default()
            }),
            None => Database::default(),
        }
    }

    /// Regex alternation matching every alias, longest first.
    pub(crate) fn alias_alternation() -> String {
        let mut aliases: Vec<&str> = DATABASE_ALIASES.iter().map(|(alias, _)| *alias).collect();
        aliases.sort_by_key(|alias| std::cmp::Reverse(alias.len()));
        aliases
            .into_iter()
            .map(regex::escape)
            .collect::<Vec<_>>()
            .join("|")
    }
}

impl fmt::Display for Database {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aliases_resolve() {
        assert_eq!(Database::from_alias("regno unito"), Some(Database::Uk));
        assert_eq!(Database::from_alias("Germania"), Some(Database::De));
        assert_eq!(Database::from_alias(" es "), Some(Database::Es));
        assert_eq!(Database::from_alias("xx"), None);
    }

    #[test]
    fn test_unknown_token_falls_back_to_it() {
        assert_eq!(Database::resolve(Some("xx")), Database::It);
        assert_eq!(Database::resolve(None), Database::It);
        assert_eq!(Database::resolve(Some("francia")), Database::Fr);
    }

    #[test]
    fn test_every_database_reachable_by_code() {
        for db in Database::ALL {
            assert_eq!(Database::from_alias(db.code()), Some(db));
        }
    }

    #[test]
    fn test_alias_alternation_longest_first() {
        let alternation = Database::alias_alternation();
        assert!(alternation.starts_with("regno unito|"));
        assert!(alternation.contains("|fr"));
    }
}
