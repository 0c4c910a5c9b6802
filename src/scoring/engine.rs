//! The scoring engine: five category passes plus the total clamp

use crate::scoring::job_context::JobContext;
use crate::scoring::report::{CategoryScores, ScoreReport};
use crate::scoring::tables::{
    EDUCATION_TERMS, EXPERIENCE_PHRASES, GENERAL_KEYWORDS, PRESTIGIOUS_SCHOOLS, SECTION_HEADERS,
    SOFT_SKILLS, TECHNICAL_SKILLS,
};
use regex::Regex;

/// Maximum counted occurrences per general keyword, to prevent keyword
/// stuffing from inflating the score.
const KEYWORD_OCCURRENCE_CAP: usize = 3;

const EDUCATION_CAP: u32 = 25;
const EXPERIENCE_CAP: u32 = 25;
const SKILLS_CAP: u32 = 25;
const FORMATTING_CAP: u32 = 20;
const TOTAL_CAP: u32 = 100;

/// Per-match clamp on extracted year mentions.
const YEARS_PER_MATCH_CAP: u64 = 10;
/// Clamp on the doubled year subtotal.
const YEARS_POINTS_CAP: u64 = 20;

/// Word count range that earns the formatting length bonus, inclusive.
const WORD_COUNT_BONUS_RANGE: std::ops::RangeInclusive<usize> = 300..=1000;

/// Deterministic ATS scorer. Holds the compiled extraction patterns; the
/// keyword tables live in [`crate::scoring::tables`].
pub struct ScoreEngine {
    year_regex: Regex,
    email_regex: Regex,
    phone_regex: Regex,
    linkedin_regex: Regex,
}

impl Default for ScoreEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoreEngine {
    pub fn new() -> Self {
        let year_regex = Regex::new(r"(\d+)\+?\s*(?:year|yr)s?").expect("Invalid year regex");

        let email_regex = Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b")
            .expect("Invalid email regex");

        let phone_regex =
            Regex::new(r"\b\d{3}[-.]?\d{3}[-.]?\d{4}\b").expect("Invalid phone regex");

        let linkedin_regex =
            Regex::new(r"linkedin\.com/in/[\w-]+").expect("Invalid LinkedIn regex");

        Self {
            year_regex,
            email_regex,
            phone_regex,
            linkedin_regex,
        }
    }

    /// Score extracted resume text against an optional job context.
    ///
    /// Total function: any string input, including empty, yields a valid
    /// report. The text is lowercased once and reused by every
    /// case-insensitive pass; contact patterns run on the original-case text.
    pub fn score(&self, resume_text: &str, job_context: &JobContext) -> ScoreReport {
        let lowered = resume_text.to_lowercase();

        let breakdown = CategoryScores {
            keywords: self.score_keywords(&lowered, job_context),
            education: self.score_education(&lowered),
            experience: self.score_experience(&lowered),
            skills: self.score_skills(&lowered),
            formatting: self.score_formatting(&lowered, resume_text),
        };

        let report = ScoreReport::from_scores(breakdown);
        debug_assert!(report.total_score <= TOTAL_CAP);
        report
    }

    /// General keywords are counted (capped per keyword); job-specific
    /// keywords are presence-tested and add their weight once. No category
    /// cap here: the keyword score is bounded by the final total clamp.
    fn score_keywords(&self, lowered: &str, job_context: &JobContext) -> u32 {
        let mut score = 0u32;

        for &(keyword, weight) in GENERAL_KEYWORDS {
            let occurrences = lowered.matches(keyword).count();
            score += occurrences.min(KEYWORD_OCCURRENCE_CAP) as u32 * weight;
        }

        for &(keyword, weight) in job_context.keyword_table() {
            if lowered.contains(keyword) {
                score += weight;
            }
        }

        score
    }

    fn score_education(&self, lowered: &str) -> u32 {
        let mut score = count_present(lowered, EDUCATION_TERMS) * 3;
        score += count_present(lowered, PRESTIGIOUS_SCHOOLS) * 5;

        if lowered.contains("computer science") || lowered.contains("information technology") {
            score += 5;
        }

        score.min(EDUCATION_CAP)
    }

    fn score_experience(&self, lowered: &str) -> u32 {
        let mut score = count_present(lowered, EXPERIENCE_PHRASES) * 4;

        // Sum mentioned durations like "5 years" or "20+ yrs", clamping each
        // mention to 10 years and the doubled subtotal to 20 points.
        let years: u64 = self
            .year_regex
            .captures_iter(lowered)
            .map(|cap| {
                // a digit run too long for u64 is necessarily over the clamp
                cap[1]
                    .parse::<u64>()
                    .map(|n| n.min(YEARS_PER_MATCH_CAP))
                    .unwrap_or(YEARS_PER_MATCH_CAP)
            })
            .sum();
        score += (years * 2).min(YEARS_POINTS_CAP) as u32;

        score.min(EXPERIENCE_CAP)
    }

    fn score_skills(&self, lowered: &str) -> u32 {
        let score =
            count_present(lowered, TECHNICAL_SKILLS) * 4 + count_present(lowered, SOFT_SKILLS) * 2;
        score.min(SKILLS_CAP)
    }

    fn score_formatting(&self, lowered: &str, original: &str) -> u32 {
        // Section headers only count when they look like labels, i.e. are
        // immediately followed by a colon or a line break.
        let mut score = SECTION_HEADERS
            .iter()
            .filter(|header| {
                lowered.contains(&format!("{header}:")) || lowered.contains(&format!("{header}\n"))
            })
            .count() as u32
            * 3;

        // Contact patterns match against the original-case text and each
        // contributes at most once.
        for pattern in [&self.email_regex, &self.phone_regex, &self.linkedin_regex] {
            if pattern.is_match(original) {
                score += 4;
            }
        }

        let word_count = original.split_whitespace().count();
        if WORD_COUNT_BONUS_RANGE.contains(&word_count) {
            score += 5;
        }

        score.min(FORMATTING_CAP)
    }
}

/// Presence count: how many of the terms appear in the text at least once.
fn count_present(lowered: &str, terms: &[&str]) -> u32 {
    terms.iter().filter(|term| lowered.contains(*term)).count() as u32
}
