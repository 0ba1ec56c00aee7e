use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::ReviewError;

/// Filename suggested for a fresh draft.
pub const DEFAULT_FILENAME: &str = "example.js";

/// Focus of a review as understood by the analysis service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ReviewType {
    /// Comprehensive analysis covering all aspects
    #[default]
    General,
    /// Focus on security vulnerabilities
    Security,
    /// Focus on speed and efficiency
    Performance,
    /// Code quality and maintainability
    Style,
}

impl ReviewType {
    pub const ALL: [ReviewType; 4] = [
        ReviewType::General,
        ReviewType::Security,
        ReviewType::Performance,
        ReviewType::Style,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Security => "security",
            Self::Performance => "performance",
            Self::Style => "style",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::General => "General Review",
            Self::Security => "Security Analysis",
            Self::Performance => "Performance Check",
            Self::Style => "Style & Best Practices",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::General => "Comprehensive analysis covering all aspects",
            Self::Security => "Focus on security vulnerabilities",
            Self::Performance => "Optimize for speed and efficiency",
            Self::Style => "Code quality and maintainability",
        }
    }
}

impl fmt::Display for ReviewType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for ReviewType {
    type Err = ReviewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "general" => Ok(Self::General),
            "security" => Ok(Self::Security),
            "performance" | "perf" => Ok(Self::Performance),
            "style" => Ok(Self::Style),
            other => Err(ReviewError::InvalidReviewType(other.to_string())),
        }
    }
}

/// Importance of a single issue.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    High,
    Medium,
    #[default]
    Low,
}

impl Severity {
    /// Lenient parse used for service payloads: anything unrecognized is `Low`.
    pub fn from_wire(value: Option<&str>) -> Self {
        value.and_then(|s| s.parse().ok()).unwrap_or_default()
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::High => write!(f, "high"),
            Self::Medium => write!(f, "medium"),
            Self::Low => write!(f, "low"),
        }
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "high" => Ok(Self::High),
            "medium" => Ok(Self::Medium),
            "low" => Ok(Self::Low),
            other => Err(format!("unknown severity: {other}")),
        }
    }
}

/// Kind of problem an issue describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueCategory {
    Bug,
    Security,
    Performance,
    Style,
}

impl fmt::Display for IssueCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bug => write!(f, "bug"),
            Self::Security => write!(f, "security"),
            Self::Performance => write!(f, "performance"),
            Self::Style => write!(f, "style"),
        }
    }
}

impl FromStr for IssueCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bug" => Ok(Self::Bug),
            "security" => Ok(Self::Security),
            "performance" => Ok(Self::Performance),
            "style" => Ok(Self::Style),
            other => Err(format!("unknown issue category: {other}")),
        }
    }
}

/// Input for one analysis call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewRequest {
    pub code: String,
    pub filename: String,
    pub review_type: ReviewType,
}

impl ReviewRequest {
    pub fn new(
        code: impl Into<String>,
        filename: impl Into<String>,
        review_type: ReviewType,
    ) -> Self {
        Self {
            code: code.into(),
            filename: filename.into(),
            review_type,
        }
    }

    /// True when there is nothing worth sending.
    pub fn is_blank(&self) -> bool {
        self.code.trim().is_empty()
    }
}

/// A single finding reported by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub severity: Severity,
    /// `type` on the wire.
    #[serde(default)]
    pub category: Option<IssueCategory>,
    #[serde(default)]
    pub line: Option<u32>,
    #[serde(default)]
    pub rule_id: Option<String>,
    #[serde(default)]
    pub code_snippet: Option<String>,
    #[serde(default)]
    pub suggestion: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewMetadata {
    pub model: String,
    pub review_type: String,
    pub filename: String,
}

/// Structured critique returned for one submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewResult {
    pub summary: String,
    pub positive_aspects: Vec<String>,
    /// In the order the service returned them.
    pub issues: Vec<Issue>,
    pub metadata: ReviewMetadata,
}

impl ReviewResult {
    pub fn issue_count(&self) -> usize {
        self.issues.len()
    }

    pub fn count_by_severity(&self, severity: Severity) -> usize {
        self.issues.iter().filter(|i| i.severity == severity).count()
    }
}

/// Entry of the service's review type catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewTypeInfo {
    #[serde(rename = "type")]
    pub review_type: String,
    pub name: String,
    pub description: String,
}

/// Reachability of the analysis service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default, alias = "claude_model")]
    pub model: Option<String>,
}

impl HealthStatus {
    pub const OFFLINE: &'static str = "offline";

    pub fn offline() -> Self {
        Self {
            status: Self::OFFLINE.to_string(),
            version: None,
            model: None,
        }
    }

    pub fn is_offline(&self) -> bool {
        self.status == Self::OFFLINE
    }
}
