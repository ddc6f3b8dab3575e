use crate::models::FieldError;
use once_cell::sync::Lazy;
use regex::Regex;

pub const TITLE_MIN_LEN: usize = 3;
pub const TITLE_MAX_LEN: usize = 200;
pub const DESCRIPTION_RECOMMENDED_MIN: usize = 50;
pub const DESCRIPTION_RECOMMENDED_MAX: usize = 320;

static ALPHANUMERIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Za-z0-9]").unwrap());

/// Outcome of validating a title/description pair. Errors block slug
/// issuance; warnings are advisory and never block.
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    pub errors: Vec<FieldError>,
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Validate a title and optional description.
///
/// A missing title short-circuits with a single error. A present title is
/// trimmed and checked against the length bounds and for alphanumeric
/// content; both checks can fire and both errors are reported. The
/// description only ever produces warnings, and only when it is non-empty
/// after trimming.
pub fn validate(title: Option<&str>, description: Option<&str>) -> ValidationReport {
    let mut report = ValidationReport::default();

    let Some(title) = title else {
        report
            .errors
            .push(FieldError::new("title", "Title is required."));
        return report;
    };

    let trimmed = title.trim();
    if trimmed.chars().count() < TITLE_MIN_LEN || trimmed.chars().count() > TITLE_MAX_LEN {
        report.errors.push(FieldError::new(
            "title",
            "Title must be between 3 and 200 characters after trimming.",
        ));
    }
    if !ALPHANUMERIC.is_match(trimmed) {
        report.errors.push(FieldError::new(
            "title",
            "Title must contain at least one alphanumeric character.",
        ));
    }

    if let Some(description) = description {
        let trimmed = description.trim();
        if !trimmed.is_empty() {
            if trimmed.chars().count() < DESCRIPTION_RECOMMENDED_MIN {
                report
                    .warnings
                    .push("Description is shorter than the recommended 50 characters.".to_string());
            }
            if trimmed.chars().count() > DESCRIPTION_RECOMMENDED_MAX {
                report
                    .warnings
                    .push("Description is longer than the recommended 320 characters.".to_string());
            }
        }
    }

    report
}
