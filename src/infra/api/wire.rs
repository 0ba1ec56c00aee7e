//! JSON shapes exchanged with the analysis service.
//!
//! Incoming bodies are deserialized into these loose wire structs first and then
//! converted into domain types, so a body that does not look like a review fails
//! here instead of somewhere in the presentation layer.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::{
    Issue, IssueCategory, ReviewError, ReviewMetadata, ReviewRequest, ReviewResult,
    ReviewTypeInfo, Severity,
};

const UNKNOWN_MODEL: &str = "unknown";

#[derive(Debug, Serialize)]
pub struct AnalyzeRequestBody<'a> {
    pub code: &'a str,
    pub filename: &'a str,
    pub review_type: &'a str,
}

impl<'a> From<&'a ReviewRequest> for AnalyzeRequestBody<'a> {
    fn from(request: &'a ReviewRequest) -> Self {
        Self {
            code: &request.code,
            filename: &request.filename,
            review_type: request.review_type.as_str(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct WireReview {
    summary: String,
    #[serde(default)]
    positive_aspects: Option<Vec<String>>,
    #[serde(default)]
    issues: Option<Vec<WireIssue>>,
    #[serde(default)]
    metadata: Option<WireMetadata>,
}

#[derive(Debug, Deserialize)]
struct WireIssue {
    title: String,
    description: String,
    #[serde(default)]
    severity: Option<String>,
    #[serde(default, rename = "type")]
    kind: Option<String>,
    #[serde(default)]
    line: Option<u32>,
    #[serde(default)]
    rule_id: Option<String>,
    #[serde(default)]
    code_snippet: Option<String>,
    #[serde(default)]
    suggestion: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct WireMetadata {
    #[serde(default)]
    model: Option<String>,
    #[serde(default)]
    review_type: Option<String>,
    #[serde(default)]
    filename: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WireReviewTypes {
    review_types: Vec<ReviewTypeInfo>,
}

impl WireIssue {
    fn into_issue(self) -> Issue {
        Issue {
            severity: Severity::from_wire(self.severity.as_deref()),
            category: self.kind.and_then(|k| k.parse::<IssueCategory>().ok()),
            title: self.title,
            description: self.description,
            line: self.line,
            rule_id: self.rule_id,
            code_snippet: self.code_snippet,
            suggestion: self.suggestion,
        }
    }
}

impl WireReview {
    fn into_result(self, request: &ReviewRequest) -> ReviewResult {
        let metadata = self.metadata.unwrap_or_default();
        ReviewResult {
            summary: self.summary,
            positive_aspects: self.positive_aspects.unwrap_or_default(),
            issues: self
                .issues
                .unwrap_or_default()
                .into_iter()
                .map(WireIssue::into_issue)
                .collect(),
            metadata: ReviewMetadata {
                model: metadata.model.unwrap_or_else(|| UNKNOWN_MODEL.to_string()),
                review_type: metadata
                    .review_type
                    .unwrap_or_else(|| request.review_type.to_string()),
                filename: metadata
                    .filename
                    .unwrap_or_else(|| request.filename.clone()),
            },
        }
    }
}

/// Parses a success body into a review, rejecting anything that is not shaped like one.
pub fn parse_review(body: &str, request: &ReviewRequest) -> Result<ReviewResult, ReviewError> {
    let wire: WireReview = serde_json::from_str(body)
        .map_err(|err| ReviewError::malformed(format!("unexpected review payload: {err}")))?;
    Ok(wire.into_result(request))
}

pub fn parse_review_types(body: &str) -> Result<Vec<ReviewTypeInfo>, ReviewError> {
    let wire: WireReviewTypes = serde_json::from_str(body)
        .map_err(|err| ReviewError::malformed(format!("unexpected review types payload: {err}")))?;
    Ok(wire.review_types)
}

/// The service's `detail` message from an error body, if it sent one.
///
/// Strings are returned verbatim; structured details (such as a list of
/// validation errors) are returned as compact JSON. Blank and null details
/// count as absent.
pub fn error_detail(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        Value::Null => None,
        Value::String(detail) if detail.trim().is_empty() => None,
        Value::String(detail) => Some(detail.clone()),
        other => Some(other.to_string()),
    }
}
