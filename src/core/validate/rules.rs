//! Validation rules for submission candidates
//!
//! The validator is a pure function over one candidate: it either produces a
//! fully typed `SubmissionRecord` or an ordered, non-empty list of
//! human-readable violations. Every rule is checked independently so a single
//! candidate can report all of its problems at once.

use crate::domain::ids::SubmissionId;
use crate::domain::submission::{RawCandidate, SubmissionRecord};
use chrono::NaiveDate;

/// Maximum length of the team name, in characters
pub const MAX_TEAM_LEN: usize = 100;

/// Maximum length of the project name, in characters
pub const MAX_PROJECT_LEN: usize = 120;

/// Maximum length of the category, in characters
pub const MAX_CATEGORY_LEN: usize = 50;

/// Maximum length of the captain name, in characters
pub const MAX_CAPTAIN_LEN: usize = 100;

/// Inclusive score range
pub const SCORE_RANGE: (f64, f64) = (0.0, 100.0);

/// Inclusive member count range
pub const MEMBER_RANGE: (i32, i32) = (1, 15);

/// Expected date format of the `event_date` field
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Validates one raw candidate against the full rule set
///
/// `reference_date` is the "today" used for the future-date check; callers
/// pass the current date, tests pass a fixed one.
///
/// # Returns
///
/// `Ok(SubmissionRecord)` if every rule passes, otherwise `Err` with one
/// message per violated rule, in field order. No rule short-circuits another.
pub fn validate_candidate(
    candidate: &RawCandidate,
    reference_date: NaiveDate,
) -> Result<SubmissionRecord, Vec<String>> {
    let mut violations = Vec::new();

    let id = validate_id(candidate.field("id"), &mut violations);
    let team = validate_text(candidate.field("team"), "Team name", MAX_TEAM_LEN, &mut violations);
    let project = validate_text(
        candidate.field("project"),
        "Project name",
        MAX_PROJECT_LEN,
        &mut violations,
    );
    let category = validate_text(
        candidate.field("category"),
        "Category",
        MAX_CATEGORY_LEN,
        &mut violations,
    );
    let event_date = validate_date(candidate.field("event_date"), reference_date, &mut violations);
    let score = validate_score(candidate.field("score"), &mut violations);
    let member_count = validate_member_count(candidate.field("member_count"), &mut violations);
    let captain = validate_text(
        candidate.field("captain"),
        "Captain name",
        MAX_CAPTAIN_LEN,
        &mut violations,
    );

    if !violations.is_empty() {
        return Err(violations);
    }

    // All Options are Some when no violation was recorded
    Ok(SubmissionRecord {
        id: id.expect("id validated"),
        team: team.expect("team validated"),
        project: project.expect("project validated"),
        category: category.expect("category validated"),
        event_date: event_date.expect("event date validated"),
        score: score.expect("score validated"),
        member_count: member_count.expect("member count validated"),
        captain: captain.expect("captain validated"),
    })
}

fn validate_id(raw: &str, violations: &mut Vec<String>) -> Option<SubmissionId> {
    match raw.trim().parse::<i64>() {
        Ok(value) if value > 0 => Some(SubmissionId::new(value).expect("positive checked")),
        Ok(value) => {
            violations.push(format!("Id must be a positive integer, got {value}"));
            None
        }
        Err(_) => {
            violations.push(format!("Id '{}' is not a valid integer", raw.trim()));
            None
        }
    }
}

fn validate_text(
    raw: &str,
    label: &str,
    max_len: usize,
    violations: &mut Vec<String>,
) -> Option<String> {
    let value = raw.trim();
    if value.is_empty() {
        violations.push(format!("{label} must not be blank"));
        return None;
    }
    if value.chars().count() > max_len {
        violations.push(format!("{label} exceeds {max_len} characters"));
        return None;
    }
    Some(value.to_string())
}

fn validate_date(
    raw: &str,
    reference_date: NaiveDate,
    violations: &mut Vec<String>,
) -> Option<NaiveDate> {
    match NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT) {
        Ok(date) if date > reference_date => {
            violations.push(format!("Event date {date} is in the future"));
            None
        }
        Ok(date) => Some(date),
        Err(_) => {
            violations.push(format!(
                "Event date '{}' is not a valid date (expected YYYY-MM-DD)",
                raw.trim()
            ));
            None
        }
    }
}

fn validate_score(raw: &str, violations: &mut Vec<String>) -> Option<f64> {
    let (min, max) = SCORE_RANGE;
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && (min..=max).contains(&value) => {
            // Stored precision is 2 decimal places
            Some((value * 100.0).round() / 100.0)
        }
        Ok(value) => {
            violations.push(format!("Score {value} is out of range [{min}, {max}]"));
            None
        }
        Err(_) => {
            violations.push(format!("Score '{}' is not a valid number", raw.trim()));
            None
        }
    }
}

fn validate_member_count(raw: &str, violations: &mut Vec<String>) -> Option<i32> {
    let (min, max) = MEMBER_RANGE;
    match raw.trim().parse::<i32>() {
        Ok(value) if (min..=max).contains(&value) => Some(value),
        Ok(value) => {
            violations.push(format!("Member count {value} is out of range [{min}, {max}]"));
            None
        }
        Err(_) => {
            violations.push(format!("Member count '{}' is not a valid integer", raw.trim()));
            None
        }
    }
}
