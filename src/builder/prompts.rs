//! Prompt template for resume draft generation

/// Template for turning free-text personal info into a resume draft.
#[derive(Debug, Clone)]
pub struct PromptTemplates {
    pub build_resume: String,
}

impl Default for PromptTemplates {
    fn default() -> Self {
        Self {
            build_resume: BUILD_RESUME_TEMPLATE.to_string(),
        }
    }
}

impl PromptTemplates {
    /// Substitute the user's personal info into the build prompt.
    pub fn render_build_resume(&self, info: &str) -> String {
        self.build_resume.replace("{info}", info)
    }
}

const BUILD_RESUME_TEMPLATE: &str =
    "Generate a professional resume based on this information:\n{info}";
