//! PDF emission — draws laid-out pages with `printpdf`'s builtin Helvetica
//! fonts. Pure translation of flow coordinates into PDF user space; all
//! layout decisions happen in `flow`/`render`.

use printpdf::{BuiltinFont, Color, Line, Mm, PdfDocument, Point, Rgb};

use crate::errors::AppError;
use crate::layout::flow::FlowPage;
use crate::layout::font_metrics::{FontStyle, PageSetup};

const RULE_GRAY: f32 = 0.78;

/// Renders positioned pages into PDF bytes.
pub fn emit_pdf(pages: &[FlowPage], setup: &PageSetup, title: &str) -> Result<Vec<u8>, AppError> {
    let (doc, first_page, first_layer) = PdfDocument::new(
        title,
        Mm(setup.width_mm),
        Mm(setup.height_mm),
        "Layer 1",
    );
    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(render_err)?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(render_err)?;

    for (index, page) in pages.iter().enumerate() {
        let layer = if index == 0 {
            doc.get_page(first_page).get_layer(first_layer)
        } else {
            let (page_index, layer_index) =
                doc.add_page(Mm(setup.width_mm), Mm(setup.height_mm), "Layer 1");
            doc.get_page(page_index).get_layer(layer_index)
        };

        for line in &page.lines {
            let font = match line.style {
                FontStyle::Bold => &bold,
                FontStyle::Regular => &regular,
            };
            // Flow y grows downward from the top edge; PDF user space grows
            // upward from the bottom-left corner.
            layer.use_text(
                line.text.clone(),
                line.font_size_pt,
                Mm(setup.margin_mm),
                Mm(setup.height_mm - line.y_mm),
                font,
            );
        }

        for &rule_y in &page.rules {
            let y = Mm(setup.height_mm - rule_y);
            layer.set_outline_color(Color::Rgb(Rgb::new(RULE_GRAY, RULE_GRAY, RULE_GRAY, None)));
            layer.set_outline_thickness(0.4);
            layer.add_line(Line {
                points: vec![
                    (Point::new(Mm(setup.margin_mm), y), false),
                    (Point::new(Mm(setup.width_mm - setup.margin_mm), y), false),
                ],
                is_closed: false,
            });
        }
    }

    doc.save_to_bytes().map_err(render_err)
}

fn render_err(e: impl std::fmt::Display) -> AppError {
    AppError::Render(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::font_metrics::default_page_setup;
    use crate::layout::render::layout_resume;
    use crate::resume::data::resume_data;

    #[test]
    fn test_emit_pdf_produces_pdf_bytes() {
        let setup = default_page_setup();
        let pages = layout_resume(resume_data(), &setup);
        let bytes = emit_pdf(&pages, &setup, "Resume").unwrap();
        assert!(bytes.starts_with(b"%PDF"), "output is not a PDF document");
        assert!(bytes.len() > 1024);
    }

    #[test]
    fn test_emit_pdf_handles_empty_page_list() {
        let setup = default_page_setup();
        let bytes = emit_pdf(&[], &setup, "Empty").unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }
}
