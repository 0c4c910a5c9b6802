//! Job context and job-specific keyword table dispatch

use crate::scoring::tables::{
    KeywordTable, DATA_KEYWORDS, DEFAULT_JOB_KEYWORDS, DEVELOPER_KEYWORDS, TECH_ROLE_KEYWORDS,
};

/// Optional job information supplied alongside a resume.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobContext {
    /// Free-form job description text.
    Description(String),
    /// A job title string.
    Title(String),
    /// No job context supplied.
    None,
}

/// A title dispatch rule: if the lowercased title contains any of the
/// needles, the rule's table is selected.
struct TitleRule {
    needles: &'static [&'static str],
    table: KeywordTable,
}

/// Evaluated top to bottom, first match wins.
const TITLE_RULES: &[TitleRule] = &[
    TitleRule {
        needles: &["developer", "engineer"],
        table: DEVELOPER_KEYWORDS,
    },
    TitleRule {
        needles: &["data"],
        table: DATA_KEYWORDS,
    },
];

impl JobContext {
    /// Select the job-specific keyword table for this context.
    ///
    /// A job description always maps to the generic tech-role table; a title
    /// is matched against the ordered rule list; everything else falls back
    /// to the default table.
    pub fn keyword_table(&self) -> KeywordTable {
        match self {
            JobContext::Description(_) => TECH_ROLE_KEYWORDS,
            JobContext::Title(title) => {
                let title = title.to_lowercase();
                TITLE_RULES
                    .iter()
                    .find(|rule| rule.needles.iter().any(|needle| title.contains(needle)))
                    .map(|rule| rule.table)
                    .unwrap_or(DEFAULT_JOB_KEYWORDS)
            }
            JobContext::None => DEFAULT_JOB_KEYWORDS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_description_selects_tech_role_table() {
        let ctx = JobContext::Description("We need someone who knows data".to_string());
        assert_eq!(ctx.keyword_table(), TECH_ROLE_KEYWORDS);
    }

    #[test]
    fn test_developer_and_engineer_titles() {
        let ctx = JobContext::Title("Senior Software Engineer".to_string());
        assert_eq!(ctx.keyword_table(), DEVELOPER_KEYWORDS);

        let ctx = JobContext::Title("Backend Developer".to_string());
        assert_eq!(ctx.keyword_table(), DEVELOPER_KEYWORDS);
    }

    #[test]
    fn test_data_title() {
        let ctx = JobContext::Title("Data Analyst".to_string());
        assert_eq!(ctx.keyword_table(), DATA_KEYWORDS);
    }

    #[test]
    fn test_developer_rule_wins_over_data_rule() {
        // "Data Engineer" matches both rules; the developer rule is first
        let ctx = JobContext::Title("Data Engineer".to_string());
        assert_eq!(ctx.keyword_table(), DEVELOPER_KEYWORDS);
    }

    #[test]
    fn test_unmatched_title_falls_back_to_default() {
        let ctx = JobContext::Title("Project Manager".to_string());
        assert_eq!(ctx.keyword_table(), DEFAULT_JOB_KEYWORDS);
        assert_eq!(JobContext::None.keyword_table(), DEFAULT_JOB_KEYWORDS);
    }

    #[test]
    fn test_title_matching_is_case_insensitive() {
        let ctx = JobContext::Title("SOFTWARE ENGINEER".to_string());
        assert_eq!(ctx.keyword_table(), DEVELOPER_KEYWORDS);
    }
}
