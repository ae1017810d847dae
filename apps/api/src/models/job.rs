use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Categories a listing may be filed under.
pub const JOB_CATEGORIES: &[&str] = &[
    "Engineering",
    "Product",
    "Design",
    "Marketing",
    "Sales",
    "Customer Support",
    "Data Science",
    "Operations",
    "HR",
    "Finance",
    "Other",
];

/// Filter value meaning "do not filter on this field".
pub const ALL_FILTER: &str = "all";

pub fn is_known_category(category: &str) -> bool {
    JOB_CATEGORIES.contains(&category)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmploymentType {
    #[serde(rename = "Full-time")]
    FullTime,
    #[serde(rename = "Part-time")]
    PartTime,
    #[serde(rename = "Contract")]
    Contract,
    #[serde(rename = "Internship")]
    Internship,
}

impl EmploymentType {
    pub const ALL: [EmploymentType; 4] = [
        EmploymentType::FullTime,
        EmploymentType::PartTime,
        EmploymentType::Contract,
        EmploymentType::Internship,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            EmploymentType::FullTime => "Full-time",
            EmploymentType::PartTime => "Part-time",
            EmploymentType::Contract => "Contract",
            EmploymentType::Internship => "Internship",
        }
    }
}

impl fmt::Display for EmploymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownEmploymentType(pub String);

impl FromStr for EmploymentType {
    type Err = UnknownEmploymentType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EmploymentType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownEmploymentType(s.to_string()))
    }
}

/// A stored listing. `id` and `posted_date` are assigned by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    pub category: String,
    pub employment_type: EmploymentType,
    pub posted_date: DateTime<Utc>,
}

/// A validated listing that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewJob {
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    pub category: String,
    pub employment_type: EmploymentType,
}

/// Optional listing predicates, AND-combined. Blank values mean "no filter".
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobFilters {
    pub query: Option<String>,
    pub location: Option<String>,
    pub category: Option<String>,
    pub employment_type: Option<String>,
}

impl JobFilters {
    pub fn matches(&self, job: &Job) -> bool {
        if let Some(query) = text_filter(&self.query) {
            let query = query.to_lowercase();
            let hit = job.title.to_lowercase().contains(&query)
                || job.company.to_lowercase().contains(&query)
                || job.description.to_lowercase().contains(&query);
            if !hit {
                return false;
            }
        }

        if let Some(location) = text_filter(&self.location) {
            if !job
                .location
                .to_lowercase()
                .contains(&location.to_lowercase())
            {
                return false;
            }
        }

        if let Some(category) = exact_filter(&self.category) {
            if job.category != category {
                return false;
            }
        }

        if let Some(employment_type) = exact_filter(&self.employment_type) {
            if job.employment_type.as_str() != employment_type {
                return false;
            }
        }

        true
    }
}

fn text_filter(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn exact_filter(value: &Option<String>) -> Option<&str> {
    text_filter(value).filter(|v| *v != ALL_FILTER)
}
