//! Typed Custom Search filters.

use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    Pdf,
    Docx,
    Pptx,
    Xlsx,
    Txt,
    Csv,
    Html,
}

impl FileType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FileType::Pdf => "pdf",
            FileType::Docx => "docx",
            FileType::Pptx => "pptx",
            FileType::Xlsx => "xlsx",
            FileType::Txt => "txt",
            FileType::Csv => "csv",
            FileType::Html => "html",
        }
    }

    /// The `filetype:<ext>` query directive.
    pub fn directive(&self) -> String {
        format!("filetype:{}", self.as_str())
    }
}

/// Custom Search `safe` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SafeSearch {
    Active,
    Off,
}

impl SafeSearch {
    pub fn as_str(&self) -> &'static str {
        match self {
            SafeSearch::Active => "active",
            SafeSearch::Off => "off",
        }
    }
}

/// Custom Search `searchType` values. Only image search exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchType {
    Image,
}

impl SearchType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchType::Image => "image",
        }
    }
}

/// Custom Search `siteSearchFilter` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SiteFilter {
    #[serde(rename = "i")]
    Include,
    #[serde(rename = "e")]
    Exclude,
}

impl SiteFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            SiteFilter::Include => "i",
            SiteFilter::Exclude => "e",
        }
    }
}

/// A `dateRestrict` window such as `d5` or `m1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateRestrict {
    Days(u32),
    Weeks(u32),
    Months(u32),
    Years(u32),
}

impl DateRestrict {
    pub fn code(&self) -> String {
        match self {
            DateRestrict::Days(n) => format!("d{}", n),
            DateRestrict::Weeks(n) => format!("w{}", n),
            DateRestrict::Months(n) => format!("m{}", n),
            DateRestrict::Years(n) => format!("y{}", n),
        }
    }
}

impl fmt::Display for DateRestrict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code())
    }
}

impl FromStr for DateRestrict {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let unit = chars.next().ok_or_else(|| "empty date restriction".to_string())?;
        let count: u32 = chars
            .as_str()
            .parse()
            .map_err(|_| format!("invalid date restriction '{}'", s))?;

        match unit.to_ascii_lowercase() {
            'd' => Ok(DateRestrict::Days(count)),
            'w' => Ok(DateRestrict::Weeks(count)),
            'm' => Ok(DateRestrict::Months(count)),
            'y' => Ok(DateRestrict::Years(count)),
            _ => Err(format!("invalid date restriction '{}'", s)),
        }
    }
}

impl Serialize for DateRestrict {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.code())
    }
}

/// Filters extracted from a prompt. `None` means the API default applies.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterSet {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_type: Option<FileType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub safe: Option<SafeSearch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_type: Option<SearchType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_restrict: Option<DateRestrict>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_search_filter: Option<SiteFilter>,
}

impl FilterSet {
    pub fn is_empty(&self) -> bool {
        *self == FilterSet::default()
    }

    /// Filters as Custom Search query parameters.
    ///
    /// The file type is not included: it travels inside `q` as a
    /// `filetype:` directive.
    pub fn to_query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(safe) = self.safe {
            params.push(("safe", safe.as_str().to_string()));
        }
        if let Some(search_type) = self.search_type {
            params.push(("searchType", search_type.as_str().to_string()));
        }
        if let Some(date) = self.date_restrict {
            params.push(("dateRestrict", date.code()));
        }
        if let Some(site) = &self.site_search {
            params.push(("siteSearch", site.clone()));
        }
        if let Some(mode) = self.site_search_filter {
            params.push(("siteSearchFilter", mode.as_str().to_string()));
        }
        params
    }
}
