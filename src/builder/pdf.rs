//! PDF rendering for built resume drafts

use crate::builder::generator::ResumeDraft;
use crate::error::{Result, ResumeScorerError};
use log::info;
use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 20.0;
const HEADING_SIZE: f32 = 14.0;
const BODY_SIZE: f32 = 10.0;
const HEADING_LEADING_MM: f32 = 9.0;
const BODY_LEADING_MM: f32 = 5.5;

/// Render a resume draft into a fixed-section PDF document.
pub struct PdfRenderer;

impl PdfRenderer {
    /// Write the draft to `path` with one block per section, in fixed order:
    /// personal info, summary, experience, skills, education.
    pub fn render(&self, draft: &ResumeDraft, path: &Path) -> Result<()> {
        let (doc, page, layer) = PdfDocument::new("Resume", Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Layer 1");
        let font = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| ResumeScorerError::PdfRender(e.to_string()))?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| ResumeScorerError::PdfRender(e.to_string()))?;

        let mut writer = PageWriter {
            doc: &doc,
            layer: doc.get_page(page).get_layer(layer),
            y: PAGE_HEIGHT_MM - MARGIN_MM,
        };

        let sections = [
            ("Personal Info", &draft.personal_info),
            ("Summary", &draft.summary),
            ("Experience", &draft.experience),
            ("Skills", &draft.skills),
            ("Education", &draft.education),
        ];

        for (heading, body) in sections {
            if body.trim().is_empty() {
                continue;
            }
            writer.heading(heading, &bold);
            for line in body.lines() {
                writer.body_line(line, &font);
            }
        }

        let file = File::create(path)?;
        doc.save(&mut BufWriter::new(file))
            .map_err(|e| ResumeScorerError::PdfRender(e.to_string()))?;

        info!("Rendered resume PDF to {}", path.display());
        Ok(())
    }
}

struct PageWriter<'a> {
    doc: &'a PdfDocumentReference,
    layer: PdfLayerReference,
    y: f32,
}

impl PageWriter<'_> {
    fn heading(&mut self, text: &str, font: &IndirectFontRef) {
        self.advance(HEADING_LEADING_MM);
        self.layer
            .use_text(text, HEADING_SIZE, Mm(MARGIN_MM), Mm(self.y), font);
        self.advance(BODY_LEADING_MM);
    }

    fn body_line(&mut self, text: &str, font: &IndirectFontRef) {
        self.advance(BODY_LEADING_MM);
        self.layer
            .use_text(text, BODY_SIZE, Mm(MARGIN_MM), Mm(self.y), font);
    }

    /// Move the cursor down, starting a fresh page when the margin is hit.
    fn advance(&mut self, leading: f32) {
        self.y -= leading;
        if self.y < MARGIN_MM {
            let (page, layer) = self
                .doc
                .add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Layer 1");
            self.layer = self.doc.get_page(page).get_layer(layer);
            self.y = PAGE_HEIGHT_MM - MARGIN_MM;
        }
    }
}
