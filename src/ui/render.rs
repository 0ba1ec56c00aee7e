//! Plain-text rendering of session snapshots for the terminal.

use crate::domain::{
    HealthStatus, ReviewHistory, ReviewResult, ReviewType, ReviewTypeInfo, Severity,
};
use crate::session::{SessionPhase, SessionState};

pub fn render_state(state: &SessionState) -> String {
    match state.phase() {
        SessionPhase::Submitting => "Analyzing... This might take a few seconds\n".to_string(),
        SessionPhase::Failure => {
            format!("Error: {}\n", state.error.as_deref().unwrap_or_default())
        }
        SessionPhase::Success => match &state.result {
            Some(result) => render_result(result),
            None => String::new(),
        },
        SessionPhase::Idle => "Ready to Review\nRun a review to see results here\n".to_string(),
    }
}

pub fn render_result(result: &ReviewResult) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "Review Results [{} | {}] {}\n\n",
        result.metadata.model, result.metadata.review_type, result.metadata.filename
    ));
    out.push_str("Summary\n");
    out.push_str(&format!("  {}\n\n", result.summary));

    if !result.positive_aspects.is_empty() {
        out.push_str("What's Good\n");
        for aspect in &result.positive_aspects {
            out.push_str(&format!("  + {}\n", aspect));
        }
        out.push('\n');
    }

    out.push_str(&format!(
        "Issues Found: {} (high {}, medium {}, low {})\n",
        result.issue_count(),
        result.count_by_severity(Severity::High),
        result.count_by_severity(Severity::Medium),
        result.count_by_severity(Severity::Low)
    ));

    if result.issues.is_empty() {
        out.push_str("  No issues found. Great job!\n");
        return out;
    }

    for (index, issue) in result.issues.iter().enumerate() {
        let mut heading = format!(
            "\n{}. [{}] {}",
            index + 1,
            issue.severity.to_string().to_uppercase(),
            issue.title
        );
        if let Some(category) = issue.category {
            heading.push_str(&format!(" ({})", category));
        }
        if let Some(line) = issue.line {
            heading.push_str(&format!(" at line {}", line));
        }
        if let Some(rule_id) = &issue.rule_id {
            heading.push_str(&format!(" [{}]", rule_id));
        }
        out.push_str(&heading);
        out.push('\n');
        out.push_str(&format!("   {}\n", issue.description));

        if let Some(suggestion) = &issue.suggestion {
            out.push_str(&format!("   Suggestion: {}\n", suggestion));
        }
        if let Some(snippet) = &issue.code_snippet {
            for line in snippet.lines() {
                out.push_str(&format!("   | {}\n", line));
            }
        }
    }

    out
}

pub fn render_history(history: &ReviewHistory) -> String {
    if history.is_empty() {
        return "No reviews yet\n".to_string();
    }

    let mut out = String::new();
    for entry in history.iter() {
        out.push_str(&format!(
            "{}  {:<20} {:<12} {:>3} issues  {}\n",
            entry.created_at.format("%Y-%m-%d %H:%M:%S"),
            entry.filename,
            entry.review_type,
            entry.issue_count,
            entry.summary
        ));
    }
    out
}

pub fn render_health(status: &HealthStatus) -> String {
    let mut out = format!("Service status: {}", status.status);
    if let Some(version) = &status.version {
        out.push_str(&format!(" (version {})", version));
    }
    if let Some(model) = &status.model {
        out.push_str(&format!(", model {}", model));
    }
    out.push('\n');
    out
}

/// Renders the built-in review type catalog.
pub fn render_review_types() -> String {
    let mut out = String::new();
    for review_type in ReviewType::ALL {
        out.push_str(&format!(
            "{:<12} {:<24} {}\n",
            review_type.as_str(),
            review_type.label(),
            review_type.description()
        ));
    }
    out
}

pub fn render_remote_review_types(types: &[ReviewTypeInfo]) -> String {
    let mut out = String::new();
    for info in types {
        out.push_str(&format!(
            "{:<12} {:<24} {}\n",
            info.review_type, info.name, info.description
        ));
    }
    out
}
