//! PDF export for lesson plans and grading reports.
//!
//! DESIGN
//! ======
//! Documents are first flattened into a list of [`Block`]s (pure, easy to
//! test), then laid out top to bottom on US Letter pages with the built-in
//! Helvetica faces. Long text is word-wrapped by an average glyph width and a
//! new page starts whenever the next line would cross the bottom margin.
//!
//! Built-in fonts only cover a Latin code page, so text is reduced to
//! printable ASCII before it is drawn.

use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference};

use edunexus_client::net::types::{GradingReport, LessonPlanExport};
use edunexus_client::state::grading::letter_grade;

const PAGE_WIDTH_MM: f32 = 215.9;
const PAGE_HEIGHT_MM: f32 = 279.4;
const MARGIN_MM: f32 = 20.0;
const PT_TO_MM: f32 = 0.3528;
const LINE_SPACING: f32 = 1.35;
/// Average Helvetica glyph advance as a fraction of the font size.
const AVG_GLYPH_EM: f32 = 0.5;
const BULLET_INDENT_MM: f32 = 5.0;

const TITLE_PT: f32 = 20.0;
const HEADING_PT: f32 = 14.0;
const SUBHEADING_PT: f32 = 12.0;
const BODY_PT: f32 = 11.0;
const SPACER_MM: f32 = 4.0;

#[derive(Debug, thiserror::Error)]
pub enum PdfError {
    #[error("font load failed: {0}")]
    Font(String),
    #[error("document serialization failed: {0}")]
    Save(String),
}

/// One unit of document content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Title(String),
    Heading(String),
    Subheading(String),
    Text(String),
    Bullet(String),
    Spacer,
}

// =============================================================================
// DOCUMENT CONTENT
// =============================================================================

fn or_na(value: &str) -> String {
    if value.trim().is_empty() { "N/A".to_string() } else { value.trim().to_string() }
}

fn bullets(blocks: &mut Vec<Block>, heading: &str, items: &[String]) {
    blocks.push(Block::Heading(heading.to_string()));
    blocks.extend(items.iter().map(|item| Block::Bullet(item.clone())));
    blocks.push(Block::Spacer);
}

#[must_use]
pub fn lesson_plan_blocks(export: &LessonPlanExport) -> Vec<Block> {
    let plan = &export.plan;
    let title = if plan.title.trim().is_empty() { "Lesson Plan" } else { plan.title.trim() };

    let mut blocks = vec![
        Block::Title(title.to_string()),
        Block::Spacer,
        Block::Heading("Lesson Overview".into()),
        Block::Text(format!("Grade Level: {}", or_na(&export.grade))),
        Block::Text(format!("Duration: {}", or_na(&plan.duration))),
        Block::Spacer,
    ];
    bullets(&mut blocks, "Learning Objectives", &plan.objectives);
    bullets(&mut blocks, "Materials Needed", &plan.materials);

    blocks.push(Block::Heading("Activities".into()));
    for activity in &plan.activities {
        let name = or_na(&activity.name);
        let heading = if activity.duration.trim().is_empty() {
            name
        } else {
            format!("{name} ({})", activity.duration.trim())
        };
        blocks.push(Block::Subheading(heading));
        if !activity.description.trim().is_empty() {
            blocks.push(Block::Text(activity.description.trim().to_string()));
        }
    }
    blocks.push(Block::Spacer);

    bullets(&mut blocks, "Assessment Strategies", &plan.assessment);
    bullets(&mut blocks, "Differentiation Strategies", &plan.differentiation);
    blocks
}

#[must_use]
pub fn grading_report_blocks(report: &GradingReport) -> Vec<Block> {
    let mut blocks = vec![
        Block::Title("Grading Report".into()),
        Block::Spacer,
        Block::Heading("Summary".into()),
        Block::Text(format!("Total Submissions: {}", report.total_submissions)),
        Block::Text(format!("Graded: {}", report.graded_count)),
        Block::Text(format!("Average Score: {:.1}%", report.avg_score)),
        Block::Text(format!("Time Saved: {}", or_na(&report.time_to_grade))),
        Block::Spacer,
        Block::Heading("Grade Distribution".into()),
    ];
    blocks.extend(
        report
            .distribution
            .iter()
            .map(|(band, count)| Block::Bullet(format!("{band}: {count}"))),
    );
    blocks.push(Block::Spacer);

    blocks.push(Block::Heading("Student Results".into()));
    for result in &report.student_results {
        blocks.push(Block::Subheading(format!(
            "{} - {:.0}% ({})",
            or_na(&result.name),
            result.score,
            letter_grade(result.score)
        )));
        if !result.feedback.trim().is_empty() {
            blocks.push(Block::Text(result.feedback.trim().to_string()));
        }
    }
    blocks
}

/// `Intro to Fractions!` -> `intro_to_fractions_.pdf`; blank titles use `fallback`.
#[must_use]
pub fn pdf_file_name(title: &str, fallback: &str) -> String {
    let title = title.trim();
    let source = if title.is_empty() { fallback } else { title };
    let stem: String = source
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' { c } else { '_' })
        .collect();
    format!("{stem}.pdf")
}

// =============================================================================
// TEXT LAYOUT
// =============================================================================

/// Reduce `text` to printable ASCII, mapping common typographic punctuation.
#[must_use]
pub fn pdf_safe(text: &str) -> String {
    text.chars()
        .filter_map(|c| match c {
            ' '..='~' => Some(c),
            '\t' | '\n' | '\r' => Some(' '),
            '\u{2018}' | '\u{2019}' => Some('\''),
            '\u{201C}' | '\u{201D}' => Some('"'),
            '\u{2013}' | '\u{2014}' | '\u{2212}' => Some('-'),
            '\u{2022}' | '\u{00B7}' => Some('*'),
            '\u{00A0}' => Some(' '),
            c if c.is_control() => None,
            _ => Some('?'),
        })
        .collect()
}

/// Greedy word wrap to at most `max_chars` per line. Words longer than a line
/// are split.
#[must_use]
pub fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let mut word = word;
        while word.chars().count() > max_chars {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            let split = word.char_indices().nth(max_chars).map_or(word.len(), |(i, _)| i);
            lines.push(word[..split].to_string());
            word = &word[split..];
        }
        if word.is_empty() {
            continue;
        }
        let needed = if current.is_empty() { word.chars().count() } else { current.chars().count() + 1 + word.chars().count() };
        if needed > max_chars {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn chars_per_line(size_pt: f32, indent_mm: f32) -> usize {
    let usable = PAGE_WIDTH_MM - 2.0 * MARGIN_MM - indent_mm;
    (usable / (size_pt * PT_TO_MM * AVG_GLYPH_EM)).floor().max(1.0) as usize
}

fn line_height_mm(size_pt: f32) -> f32 {
    size_pt * PT_TO_MM * LINE_SPACING
}

// =============================================================================
// RENDERING
// =============================================================================

struct PageWriter {
    doc: PdfDocumentReference,
    layer: PdfLayerReference,
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    y: f32,
    pages: usize,
}

impl PageWriter {
    fn new(title: &str) -> Result<Self, PdfError> {
        let (doc, page, layer) = PdfDocument::new(title, Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Page 1");
        let regular = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| PdfError::Font(e.to_string()))?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| PdfError::Font(e.to_string()))?;
        let layer = doc.get_page(page).get_layer(layer);
        Ok(Self { doc, layer, regular, bold, y: PAGE_HEIGHT_MM - MARGIN_MM, pages: 1 })
    }

    fn ensure_room(&mut self, height: f32) {
        if self.y - height >= MARGIN_MM {
            return;
        }
        self.pages += 1;
        let (page, layer) = self
            .doc
            .add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), format!("Page {}", self.pages));
        self.layer = self.doc.get_page(page).get_layer(layer);
        self.y = PAGE_HEIGHT_MM - MARGIN_MM;
    }

    fn paragraph(&mut self, text: &str, size_pt: f32, bold: bool, indent_mm: f32, prefix: Option<&str>) {
        let height = line_height_mm(size_pt);
        let wrapped = wrap_text(&pdf_safe(text), chars_per_line(size_pt, indent_mm));
        for (i, line) in wrapped.iter().enumerate() {
            self.ensure_room(height);
            self.y -= height;
            let font = if bold { &self.bold } else { &self.regular };
            if i == 0 {
                if let Some(marker) = prefix {
                    self.layer
                        .use_text(marker, size_pt, Mm(MARGIN_MM + indent_mm - BULLET_INDENT_MM + 1.0), Mm(self.y), font);
                }
            }
            self.layer
                .use_text(line.as_str(), size_pt, Mm(MARGIN_MM + indent_mm), Mm(self.y), font);
        }
    }

    fn block(&mut self, block: &Block) {
        match block {
            Block::Title(text) => self.paragraph(text, TITLE_PT, true, 0.0, None),
            Block::Heading(text) => self.paragraph(text, HEADING_PT, true, 0.0, None),
            Block::Subheading(text) => self.paragraph(text, SUBHEADING_PT, true, 0.0, None),
            Block::Text(text) => self.paragraph(text, BODY_PT, false, 0.0, None),
            Block::Bullet(text) => self.paragraph(text, BODY_PT, false, BULLET_INDENT_MM, Some("-")),
            Block::Spacer => {
                if self.y - SPACER_MM >= MARGIN_MM {
                    self.y -= SPACER_MM;
                }
            }
        }
    }

    fn finish(self) -> Result<Vec<u8>, PdfError> {
        self.doc
            .save_to_bytes()
            .map_err(|e| PdfError::Save(e.to_string()))
    }
}

/// Lay out `blocks` into a PDF titled `title`.
///
/// # Errors
///
/// Returns a [`PdfError`] if a font cannot be registered or the document
/// fails to serialize.
pub fn render(title: &str, blocks: &[Block]) -> Result<Vec<u8>, PdfError> {
    let mut writer = PageWriter::new(&pdf_safe(title))?;
    for block in blocks {
        writer.block(block);
    }
    let pages = writer.pages;
    let bytes = writer.finish()?;
    tracing::debug!(pages, bytes = bytes.len(), "pdf rendered");
    Ok(bytes)
}

#[cfg(test)]
#[path = "pdf_test.rs"]
mod tests;
