//! Static keyword and weight tables
//!
//! All tables are read-only configuration baked into the binary. Matching is
//! case-insensitive substring matching against the lowercased resume text, so
//! every entry here must already be lowercase.

/// Keyword table: term paired with its integer weight.
pub type KeywordTable = &'static [(&'static str, u32)];

/// General resume keywords, weighted by importance. Occurrences are counted
/// (capped per keyword by the engine) rather than presence-tested.
pub const GENERAL_KEYWORDS: KeywordTable = &[
    ("experience", 5),
    ("education", 3),
    ("skills", 5),
    ("projects", 3),
    ("certifications", 3),
    ("achievements", 4),
    ("leadership", 4),
    ("communication", 3),
    ("teamwork", 3),
    ("problem solving", 4),
    ("analytical", 3),
    ("responsible", 2),
    ("managed", 3),
    ("developed", 3),
    ("implemented", 3),
];

/// Generic tech-role keywords, used when a free-form job description is
/// supplied.
pub const TECH_ROLE_KEYWORDS: KeywordTable = &[
    ("api", 4),
    ("backend", 4),
    ("frontend", 4),
    ("full stack", 5),
    ("database", 4),
    ("cloud", 4),
    ("devops", 4),
    ("agile", 3),
    ("scrum", 3),
    ("git", 3),
    ("testing", 3),
    ("ci/cd", 4),
];

/// Keywords for developer/engineer job titles.
pub const DEVELOPER_KEYWORDS: KeywordTable = &[
    ("algorithm", 4),
    ("api", 4),
    ("code", 3),
    ("software", 4),
    ("development", 3),
    ("testing", 3),
    ("debugging", 3),
];

/// Keywords for data-oriented job titles.
pub const DATA_KEYWORDS: KeywordTable = &[
    ("analytics", 4),
    ("statistics", 4),
    ("machine learning", 5),
    ("sql", 4),
    ("python", 4),
    ("visualization", 3),
    ("big data", 4),
];

/// Fallback keywords when no job context matches.
pub const DEFAULT_JOB_KEYWORDS: KeywordTable = &[
    ("responsible", 2),
    ("team", 2),
    ("project", 2),
    ("developed", 3),
    ("implemented", 3),
    ("managed", 3),
    ("created", 2),
];

/// Education-level terms, 3 points each on presence.
pub const EDUCATION_TERMS: &[&str] = &[
    "bachelor",
    "master",
    "phd",
    "degree",
    "diploma",
    "university",
    "college",
];

/// Institutions worth a 5-point bonus each.
pub const PRESTIGIOUS_SCHOOLS: &[&str] = &["harvard", "stanford", "mit", "oxford", "cambridge"];

/// Phrasings that indicate described work experience, 4 points each.
pub const EXPERIENCE_PHRASES: &[&str] = &[
    "years of experience",
    "year experience",
    "years experience",
    "worked as",
    "work experience",
];

/// Technical skill terms, 4 points each on presence.
pub const TECHNICAL_SKILLS: &[&str] = &[
    "python",
    "java",
    "javascript",
    "c++",
    "sql",
    "aws",
    "azure",
    "docker",
    "kubernetes",
    "react",
    "angular",
    "vue",
    "django",
    "node.js",
    "tensorflow",
    "pytorch",
    "machine learning",
    "ai",
];

/// Soft skill terms, 2 points each on presence.
pub const SOFT_SKILLS: &[&str] = &[
    "leadership",
    "communication",
    "teamwork",
    "project management",
    "time management",
    "problem solving",
    "critical thinking",
];

/// Canonical section header words. A header only scores when it is followed
/// by a colon or a line break, i.e. looks like a section label.
pub const SECTION_HEADERS: &[&str] = &[
    "experience",
    "education",
    "skills",
    "projects",
    "certifications",
    "publications",
    "summary",
    "objective",
];
