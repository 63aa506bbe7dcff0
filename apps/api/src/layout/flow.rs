//! Flowed-text pagination — the vertical cursor that turns logical blocks
//! into positioned lines across pages.
//!
//! # Page-break rule
//! Breaks are decided prospectively per block: before any line of a block is
//! emitted, the block's full height is checked against the bottom margin. A
//! block that would cross it starts on a fresh page — blocks are never split
//! at the margin boundary.

use crate::layout::font_metrics::{get_metrics, FontStyle, PageSetup};

/// A positioned line of text. `y_mm` grows downward from the top edge.
#[derive(Debug, Clone)]
pub struct FlowLine {
    pub text: String,
    pub y_mm: f32,
    pub font_size_pt: f32,
    pub style: FontStyle,
}

/// One laid-out page: positioned text lines plus horizontal divider rules.
#[derive(Debug, Clone, Default)]
pub struct FlowPage {
    pub lines: Vec<FlowLine>,
    pub rules: Vec<f32>,
}

/// Per-request layout state: the page accumulator and the running cursor.
/// Discarded once the pages are handed to the PDF emitter.
pub struct DocumentFlow {
    setup: PageSetup,
    pages: Vec<FlowPage>,
    cursor_y: f32,
}

impl DocumentFlow {
    pub fn new(setup: PageSetup) -> Self {
        let cursor_y = setup.margin_mm;
        Self {
            setup,
            pages: vec![FlowPage::default()],
            cursor_y,
        }
    }

    pub fn setup(&self) -> &PageSetup {
        &self.setup
    }

    pub fn pages(&self) -> &[FlowPage] {
        &self.pages
    }

    pub fn into_pages(self) -> Vec<FlowPage> {
        self.pages
    }

    #[cfg(test)]
    pub fn cursor_y(&self) -> f32 {
        self.cursor_y
    }

    /// Word-wraps `text` to the content width and emits it as one block,
    /// starting a new page first if the whole block would not fit.
    pub fn text_block(&mut self, text: &str, font_size_pt: f32, style: FontStyle) {
        let lines = get_metrics(style).wrap_text(text, font_size_pt, self.setup.content_width_mm());
        if lines.is_empty() {
            return;
        }

        let advance = self.setup.line_advance_mm(font_size_pt);
        let block_height = lines.len() as f32 * advance;

        if self.cursor_y + block_height > self.setup.bottom_limit_mm() {
            self.start_new_page();
        }

        let page = self.pages.last_mut().expect("flow always has a page");
        for (i, line) in lines.into_iter().enumerate() {
            page.lines.push(FlowLine {
                text: line,
                y_mm: self.cursor_y + i as f32 * advance,
                font_size_pt,
                style,
            });
        }

        self.cursor_y += block_height + self.setup.paragraph_gap_mm;
    }

    /// Advances the cursor without emitting anything.
    pub fn gap(&mut self, mm: f32) {
        self.cursor_y += mm;
    }

    /// Emits a horizontal divider rule at the cursor and advances past it.
    pub fn rule(&mut self) {
        let page = self.pages.last_mut().expect("flow always has a page");
        page.rules.push(self.cursor_y);
        self.cursor_y += 3.0;
    }

    fn start_new_page(&mut self) {
        self.pages.push(FlowPage::default());
        self.cursor_y = self.setup.margin_mm;
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
