//! Remote resume draft generation

use crate::builder::prompts::PromptTemplates;
use crate::config::BuilderConfig;
use crate::error::{Result, ResumeScorerError};
use log::{debug, info};
use serde::{Deserialize, Serialize};

/// Client for the generative text service that drafts resumes.
pub struct ResumeGenerator {
    client: reqwest::Client,
    config: BuilderConfig,
    templates: PromptTemplates,
}

#[derive(Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Content,
}

impl ResumeGenerator {
    pub fn new(config: BuilderConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
            templates: PromptTemplates::default(),
        }
    }

    /// Generate a resume draft from free-text personal info.
    pub async fn generate(&self, info: &str) -> Result<String> {
        if info.trim().is_empty() {
            return Err(ResumeScorerError::InvalidInput(
                "No personal info provided".to_string(),
            ));
        }

        let api_key = std::env::var(&self.config.api_key_env).map_err(|_| {
            ResumeScorerError::Configuration(format!(
                "API key environment variable '{}' is not set",
                self.config.api_key_env
            ))
        })?;

        let prompt = self.templates.render_build_resume(info);
        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        };

        let url = format!(
            "{}/{}:generateContent?key={}",
            self.config.api_url, self.config.model, api_key
        );

        info!("Requesting resume draft from {}", self.config.model);
        let response = self.client.post(&url).json(&request).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let details = response.text().await.unwrap_or_default();
            return Err(ResumeScorerError::Generation(format!(
                "Text generation service returned {}: {}",
                status, details
            )));
        }

        let parsed: GenerateResponse = response.json().await?;
        let draft: String = parsed
            .candidates
            .first()
            .map(|candidate| {
                candidate
                    .content
                    .parts
                    .iter()
                    .map(|part| part.text.as_str())
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        if draft.trim().is_empty() {
            return Err(ResumeScorerError::Generation(
                "Text generation service returned no candidates".to_string(),
            ));
        }

        debug!("Generated draft of {} characters", draft.len());
        Ok(draft)
    }
}

/// A resume draft split into the fixed sections the PDF layout expects.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResumeDraft {
    pub personal_info: String,
    pub summary: String,
    pub experience: String,
    pub skills: String,
    pub education: String,
}

impl ResumeDraft {
    /// Split generated text into sections by heading lines. A heading is a
    /// line whose stripped form is one of the known section names; text
    /// before any recognized heading lands in the summary.
    pub fn from_text(text: &str) -> Self {
        let mut draft = ResumeDraft::default();
        let mut current = Section::Summary;

        for line in text.lines() {
            if let Some(section) = Section::from_heading(line) {
                current = section;
                continue;
            }

            let target = match current {
                Section::PersonalInfo => &mut draft.personal_info,
                Section::Summary => &mut draft.summary,
                Section::Experience => &mut draft.experience,
                Section::Skills => &mut draft.skills,
                Section::Education => &mut draft.education,
            };
            if !target.is_empty() {
                target.push('\n');
            }
            target.push_str(line);
        }

        draft
    }
}

#[derive(Debug, Clone, Copy)]
enum Section {
    PersonalInfo,
    Summary,
    Experience,
    Skills,
    Education,
}

impl Section {
    fn from_heading(line: &str) -> Option<Self> {
        // Strip markdown decoration and a trailing colon before matching
        let stripped = line
            .trim()
            .trim_start_matches(['#', '*', '-', ' '])
            .trim_end_matches(['*', ':', ' '])
            .to_lowercase();

        match stripped.as_str() {
            "personal info" | "personal information" | "contact" | "contact information" => {
                Some(Section::PersonalInfo)
            }
            "summary" | "professional summary" | "objective" => Some(Section::Summary),
            "experience" | "work experience" | "professional experience" => {
                Some(Section::Experience)
            }
            "skills" | "technical skills" => Some(Section::Skills),
            "education" => Some(Section::Education),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_splits_on_headings() {
        let text = "\
A driven engineer.

## Experience
Built things at Acme.

Skills:
Rust, Python

Education
BSc Computer Science
";
        let draft = ResumeDraft::from_text(text);
        assert!(draft.summary.contains("A driven engineer."));
        assert!(draft.experience.contains("Built things at Acme."));
        assert!(draft.skills.contains("Rust, Python"));
        assert!(draft.education.contains("BSc Computer Science"));
    }

    #[test]
    fn test_draft_recognizes_heading_variants() {
        let text = "**Contact Information**\njohn@example.com\n\nProfessional Summary:\nHi.";
        let draft = ResumeDraft::from_text(text);
        assert!(draft.personal_info.contains("john@example.com"));
        assert!(draft.summary.contains("Hi."));
    }

    #[test]
    fn test_draft_of_empty_text_is_empty() {
        assert_eq!(ResumeDraft::from_text(""), ResumeDraft::default());
    }
}
