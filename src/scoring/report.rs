//! Score report structures and feedback generation

use serde::{Deserialize, Serialize};

/// Per-category score values. Education, experience, skills and formatting
/// are already capped by the engine; keywords is only bounded by the final
/// 100-point total clamp.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryScores {
    pub keywords: u32,
    pub education: u32,
    pub experience: u32,
    pub skills: u32,
    pub formatting: u32,
}

impl CategoryScores {
    pub fn total(&self) -> u32 {
        self.keywords + self.education + self.experience + self.skills + self.formatting
    }
}

/// The result of scoring a single resume.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreReport {
    /// Total score, clamped to 0-100.
    pub total_score: u32,
    /// Per-category breakdown, pre-total-clamp.
    pub breakdown: CategoryScores,
    /// One feedback line per category, in fixed category order.
    pub feedback: Vec<String>,
}

impl ScoreReport {
    /// Assemble a report from raw category scores: clamp the grand total to
    /// 100 and derive tiered feedback from the per-category values.
    pub fn from_scores(breakdown: CategoryScores) -> Self {
        let total_score = breakdown.total().min(100);
        let feedback = generate_feedback(&breakdown);

        Self {
            total_score,
            breakdown,
            feedback,
        }
    }
}

/// Rule-based feedback: one string per category, picked by fixed thresholds.
/// Always emitted in category order regardless of which tiers triggered.
fn generate_feedback(scores: &CategoryScores) -> Vec<String> {
    let mut feedback = Vec::with_capacity(5);

    feedback.push(
        if scores.keywords < 15 {
            "Consider adding more relevant industry keywords to your resume."
        } else if scores.keywords < 30 {
            "Your resume contains some relevant keywords, but could benefit from more specific terminology."
        } else {
            "Good use of relevant keywords throughout your resume."
        }
        .to_string(),
    );

    feedback.push(
        if scores.education < 10 {
            "Your education section could be enhanced with more details about degrees and institutions."
        } else {
            "Your education details are well presented."
        }
        .to_string(),
    );

    feedback.push(
        if scores.experience < 10 {
            "Add more quantifiable achievements and details to your work experience."
        } else if scores.experience < 20 {
            "Your experience section is solid but could benefit from more specific accomplishments."
        } else {
            "Your experience section appears comprehensive and well-detailed."
        }
        .to_string(),
    );

    feedback.push(
        if scores.skills < 10 {
            "Consider listing more relevant technical and soft skills."
        } else if scores.skills < 18 {
            "Your skills section is good but could highlight more technical proficiencies."
        } else {
            "Excellent range of skills highlighted in your resume."
        }
        .to_string(),
    );

    feedback.push(
        if scores.formatting < 10 {
            "Improve your resume structure with clear section headers and better organization."
        } else {
            "Your resume is well-structured and formatted appropriately."
        }
        .to_string(),
    );

    feedback
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(keywords: u32, education: u32, experience: u32, skills: u32, formatting: u32) -> CategoryScores {
        CategoryScores {
            keywords,
            education,
            experience,
            skills,
            formatting,
        }
    }

    #[test]
    fn test_total_clamped_to_100() {
        let report = ScoreReport::from_scores(scores(80, 25, 25, 25, 20));
        assert_eq!(report.total_score, 100);
        // the breakdown keeps the pre-clamp values
        assert_eq!(report.breakdown.total(), 175);
    }

    #[test]
    fn test_feedback_always_five_lines_in_category_order() {
        let report = ScoreReport::from_scores(CategoryScores::default());
        assert_eq!(report.feedback.len(), 5);
        assert!(report.feedback[0].contains("keywords"));
        assert!(report.feedback[1].contains("education"));
        assert!(report.feedback[2].contains("work experience"));
        assert!(report.feedback[3].contains("skills"));
        assert!(report.feedback[4].contains("structure"));
    }

    #[test]
    fn test_keyword_tier_boundary_at_15_is_middle_tier() {
        let report = ScoreReport::from_scores(scores(15, 0, 0, 0, 0));
        assert!(report.feedback[0].contains("more specific terminology"));

        let report = ScoreReport::from_scores(scores(14, 0, 0, 0, 0));
        assert!(report.feedback[0].contains("adding more relevant industry keywords"));

        let report = ScoreReport::from_scores(scores(30, 0, 0, 0, 0));
        assert!(report.feedback[0].contains("Good use of relevant keywords"));
    }

    #[test]
    fn test_experience_tier_boundaries() {
        assert!(ScoreReport::from_scores(scores(0, 0, 9, 0, 0)).feedback[2]
            .contains("quantifiable achievements"));
        assert!(ScoreReport::from_scores(scores(0, 0, 10, 0, 0)).feedback[2].contains("solid"));
        assert!(ScoreReport::from_scores(scores(0, 0, 20, 0, 0)).feedback[2]
            .contains("comprehensive"));
    }

    #[test]
    fn test_skills_tier_boundaries() {
        assert!(ScoreReport::from_scores(scores(0, 0, 0, 9, 0)).feedback[3]
            .contains("listing more relevant"));
        assert!(ScoreReport::from_scores(scores(0, 0, 0, 17, 0)).feedback[3]
            .contains("could highlight more"));
        assert!(ScoreReport::from_scores(scores(0, 0, 0, 18, 0)).feedback[3]
            .contains("Excellent range"));
    }

    #[test]
    fn test_serializes_with_breakdown_map() {
        let report = ScoreReport::from_scores(scores(10, 5, 5, 5, 5));
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["total_score"], 30);
        assert_eq!(json["breakdown"]["keywords"], 10);
        assert_eq!(json["feedback"].as_array().unwrap().len(), 5);
    }
}
