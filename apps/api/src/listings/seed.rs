//! Fixed sample listings loaded into every fresh store.

use chrono::{TimeZone, Utc};

use crate::models::job::{EmploymentType, Job};

struct SeedJob {
    title: &'static str,
    company: &'static str,
    location: &'static str,
    description: &'static str,
    category: &'static str,
    employment_type: EmploymentType,
    posted: (i32, u32, u32, u32, u32),
}

const SEED_JOBS: &[SeedJob] = &[
    SeedJob {
        title: "Software Engineer, Frontend",
        company: "Tech Solutions Inc.",
        location: "San Francisco, CA",
        description: "Join our innovative frontend team to build next-generation web applications using React and TypeScript. We are looking for a passionate developer with a keen eye for UI/UX design and performance.",
        category: "Engineering",
        employment_type: EmploymentType::FullTime,
        posted: (2024, 5, 1, 10, 0),
    },
    SeedJob {
        title: "Product Manager",
        company: "Innovate Corp.",
        location: "New York, NY",
        description: "Drive product strategy and execution for our flagship SaaS product. Collaborate with engineering, design, and marketing teams to deliver impactful features that delight users.",
        category: "Product",
        employment_type: EmploymentType::FullTime,
        posted: (2024, 5, 5, 14, 30),
    },
    SeedJob {
        title: "UX Designer",
        company: "Creative Designs Co.",
        location: "Remote",
        description: "We are seeking a talented UX Designer to create intuitive and engaging user experiences for our diverse range of clients. Portfolio demonstrating strong UX principles required.",
        category: "Design",
        employment_type: EmploymentType::Contract,
        posted: (2024, 5, 10, 9, 0),
    },
    SeedJob {
        title: "Marketing Specialist",
        company: "Growth Hackers Ltd.",
        location: "Austin, TX",
        description: "Develop and implement marketing campaigns across various channels. Analyze market trends and customer behavior to optimize strategies and achieve growth targets.",
        category: "Marketing",
        employment_type: EmploymentType::PartTime,
        posted: (2024, 5, 12, 11, 0),
    },
    SeedJob {
        title: "Data Scientist Intern",
        company: "AI Forward",
        location: "Boston, MA",
        description: "Exciting internship opportunity for aspiring data scientists. Work on real-world projects, analyze large datasets, and develop machine learning models under the guidance of experienced mentors.",
        category: "Data Science",
        employment_type: EmploymentType::Internship,
        posted: (2024, 5, 15, 16, 0),
    },
];

/// Sample jobs in insertion order, ids "1" through "5".
pub fn sample_jobs() -> Vec<Job> {
    SEED_JOBS
        .iter()
        .enumerate()
        .filter_map(|(i, seed)| {
            let (y, mo, d, h, mi) = seed.posted;
            let posted_date = Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).single()?;
            Some(Job {
                id: (i + 1).to_string(),
                title: seed.title.to_string(),
                company: seed.company.to_string(),
                location: seed.location.to_string(),
                description: seed.description.to_string(),
                category: seed.category.to_string(),
                employment_type: seed.employment_type,
                posted_date,
            })
        })
        .collect()
}
