//! Form validation for job postings and applications.
//!
//! Every field is checked independently and the first violated rule per field
//! is reported, so callers can surface all problems at once. Values are
//! trimmed before length checks and returned trimmed.

use std::collections::{BTreeMap, HashMap};
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::models::job::{is_known_category, EmploymentType, NewJob};
use crate::models::ApplicationSubmission;

pub const MIN_TITLE_CHARS: usize = 3;
pub const MIN_COMPANY_CHARS: usize = 2;
pub const MIN_LOCATION_CHARS: usize = 2;
pub const MIN_DESCRIPTION_CHARS: usize = 10;
pub const MIN_NAME_CHARS: usize = 2;
/// Below this the matcher has too little signal to score.
pub const MIN_RESUME_CHARS: usize = 50;

static RE_EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+'-]+@[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?)+$")
        .unwrap()
});

/// Raw flat key-value form payload.
pub type RawForm = HashMap<String, String>;

/// Field name (wire name) → first violated rule's message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `message` unless the field already has an error.
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_insert_with(|| message.into());
    }

    #[cfg(test)]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    #[cfg(test)]
    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

fn field<'a>(form: &'a RawForm, name: &str) -> &'a str {
    form.get(name).map(|v| v.trim()).unwrap_or_default()
}

fn check_min_chars(
    errors: &mut FieldErrors,
    name: &str,
    value: &str,
    min: usize,
    message: &str,
) {
    if value.chars().count() < min {
        errors.add(name, message);
    }
}

pub fn is_valid_email(email: &str) -> bool {
    RE_EMAIL.is_match(email)
}

/// Validates the job posting form.
pub fn validate_job_posting(form: &RawForm) -> Result<NewJob, FieldErrors> {
    let mut errors = FieldErrors::new();

    let title = field(form, "title");
    let company = field(form, "company");
    let location = field(form, "location");
    let description = field(form, "description");
    let category = field(form, "category");
    let employment_type = field(form, "employmentType");

    check_min_chars(
        &mut errors,
        "title",
        title,
        MIN_TITLE_CHARS,
        "Title must be at least 3 characters",
    );
    check_min_chars(
        &mut errors,
        "company",
        company,
        MIN_COMPANY_CHARS,
        "Company name must be at least 2 characters",
    );
    check_min_chars(
        &mut errors,
        "location",
        location,
        MIN_LOCATION_CHARS,
        "Location must be at least 2 characters",
    );
    check_min_chars(
        &mut errors,
        "description",
        description,
        MIN_DESCRIPTION_CHARS,
        "Description must be at least 10 characters",
    );

    if category.is_empty() {
        errors.add("category", "Category is required");
    } else if !is_known_category(category) {
        errors.add("category", "Category must be one of the listed categories");
    }

    let parsed_type = employment_type.parse::<EmploymentType>().ok();
    if parsed_type.is_none() {
        errors.add(
            "employmentType",
            "Employment type must be one of Full-time, Part-time, Contract, Internship",
        );
    }

    match parsed_type {
        Some(employment_type) if errors.is_empty() => Ok(NewJob {
            title: title.to_string(),
            company: company.to_string(),
            location: location.to_string(),
            description: description.to_string(),
            category: category.to_string(),
            employment_type,
        }),
        _ => Err(errors),
    }
}

/// Validates the application form. Whether `jobId` refers to a stored job is
/// checked by the caller, which owns the store.
pub fn validate_application(form: &RawForm) -> Result<ApplicationSubmission, FieldErrors> {
    let mut errors = FieldErrors::new();

    let job_id = field(form, "jobId");
    let name = field(form, "name");
    let email = field(form, "email");
    let resume = field(form, "resume");
    let cover_letter = field(form, "coverLetter");

    if job_id.is_empty() {
        errors.add("jobId", "Job ID is required");
    }
    check_min_chars(
        &mut errors,
        "name",
        name,
        MIN_NAME_CHARS,
        "Name is required",
    );
    if !is_valid_email(email) {
        errors.add("email", "Invalid email address");
    }
    check_min_chars(
        &mut errors,
        "resume",
        resume,
        MIN_RESUME_CHARS,
        "Resume text must be at least 50 characters",
    );

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(ApplicationSubmission {
        job_id: job_id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        resume: resume.to_string(),
        cover_letter: (!cover_letter.is_empty()).then(|| cover_letter.to_string()),
    })
}
