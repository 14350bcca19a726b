use validator::{ValidationErrors, ValidationErrorsKind};

use std::cmp::Ordering;

use super::app_error::ValidationIssue;

/// Flattens nested validator output into dotted field paths
/// (`origin.lat`, `records[3].name`).
pub(super) fn collect_validation_issues(
    prefix: Option<&str>,
    errors: &ValidationErrors,
    out: &mut Vec<ValidationIssue>,
) {
    for (field, kind) in errors.errors() {
        let path = match prefix {
            Some(prefix) => format!("{prefix}.{field}"),
            None => field.to_string(),
        };

        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                out.extend(field_errors.iter().map(|error| ValidationIssue {
                    field: path.clone(),
                    message: error
                        .message
                        .as_ref()
                        .map(|message| message.to_string())
                        .unwrap_or_else(|| format!("{path} is invalid")),
                    code: error.code.to_string(),
                }));
            }
            ValidationErrorsKind::Struct(nested) => {
                collect_validation_issues(Some(&path), nested, out);
            }
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    collect_validation_issues(Some(&format!("{path}[{index}]")), nested, out);
                }
            }
        }
    }
}

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
enum PathSegment<'a> {
    Name(&'a str),
    Index(usize),
}

/// Splits `records[10].latitude` into names and list indices so that
/// `records[2]` orders before `records[10]`.
fn path_segments(field: &str) -> Vec<PathSegment<'_>> {
    let mut segments = Vec::new();
    let mut parts = field.split('[');
    if let Some(head) = parts.next() {
        segments.push(PathSegment::Name(head));
    }
    for part in parts {
        match part.split_once(']') {
            Some((index, rest)) => {
                match index.parse() {
                    Ok(index) => segments.push(PathSegment::Index(index)),
                    Err(_) => segments.push(PathSegment::Name(index)),
                }
                segments.push(PathSegment::Name(rest));
            }
            None => segments.push(PathSegment::Name(part)),
        }
    }
    segments
}

pub(super) fn compare_issues(left: &ValidationIssue, right: &ValidationIssue) -> Ordering {
    path_segments(&left.field)
        .cmp(&path_segments(&right.field))
        .then_with(|| left.code.cmp(&right.code))
}
