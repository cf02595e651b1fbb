//! Turn invoice layout ops into PDF bytes and trigger the download.
//!
//! The layout (block positions, text, formatting) lives in the contracts
//! crate; this module only maps its drawing ops onto printpdf, flipping
//! the y axis because PDF pages have their origin at the bottom edge.

use contracts::domain::invoice::{
    layout_invoice, Align, DocOp, InvoicePayload, PAGE_HEIGHT_MM, PAGE_WIDTH_MM,
};
use printpdf::{
    BuiltinFont, Line, LinePoint, Mm, Op, PdfDocument, PdfPage, PdfSaveOptions, Point, Pt,
    TextItem,
};

use super::api;
use crate::shared::api::error::{ApiError, ApiResult};
use crate::shared::export::{download_blob, make_binary_blob};

/// Average Helvetica glyph advance as a fraction of the font size, used to
/// anchor right- and center-aligned text. Close enough for the numeric
/// columns the layout right-aligns.
const GLYPH_WIDTH_EM: f64 = 0.5;
const PT_TO_MM: f64 = 0.352_778;

fn text_width_mm(text: &str, size_pt: f64) -> f64 {
    text.chars().count() as f64 * size_pt * GLYPH_WIDTH_EM * PT_TO_MM
}

fn anchor_x(x: f64, text: &str, size: f64, align: Align) -> f64 {
    match align {
        Align::Left => x,
        Align::Right => x - text_width_mm(text, size),
        Align::Center => x - text_width_mm(text, size) / 2.0,
    }
}

fn point(x_mm: f64, y_mm: f64) -> Point {
    // Layout y runs from the top edge; PDF y from the bottom.
    Point::new(Mm(x_mm as f32), Mm((PAGE_HEIGHT_MM - y_mm) as f32))
}

pub fn render_pdf(invoice: &InvoicePayload) -> Vec<u8> {
    let mut page_ops: Vec<Op> = Vec::new();

    for op in layout_invoice(invoice) {
        match op {
            DocOp::Text {
                x,
                y,
                size,
                bold,
                align,
                text,
            } => {
                let font = if bold {
                    BuiltinFont::HelveticaBold
                } else {
                    BuiltinFont::Helvetica
                };
                let x = anchor_x(x, &text, size, align);
                page_ops.push(Op::StartTextSection);
                page_ops.push(Op::SetTextCursor { pos: point(x, y) });
                page_ops.push(Op::SetFontSizeBuiltinFont {
                    size: Pt(size as f32),
                    font,
                });
                page_ops.push(Op::WriteTextBuiltinFont {
                    items: vec![TextItem::Text(text)],
                    font,
                });
                page_ops.push(Op::EndTextSection);
            }
            DocOp::Line { x1, y1, x2, y2 } => {
                page_ops.push(Op::DrawLine {
                    line: Line {
                        points: vec![
                            LinePoint {
                                p: point(x1, y1),
                                bezier: false,
                            },
                            LinePoint {
                                p: point(x2, y2),
                                bezier: false,
                            },
                        ],
                        is_closed: false,
                    },
                });
            }
        }
    }

    let page = PdfPage::new(Mm(PAGE_WIDTH_MM as f32), Mm(PAGE_HEIGHT_MM as f32), page_ops);
    let mut warnings = Vec::new();
    PdfDocument::new("Tax Invoice")
        .with_pages(vec![page])
        .save(&PdfSaveOptions::default(), &mut warnings)
}

/// Fetch the invoice for an order, render it and hand the PDF to the
/// browser as a download.
pub async fn download_invoice(order_id: &str) -> ApiResult<()> {
    let invoice = api::fetch_invoice(order_id).await?;
    let bytes = render_pdf(&invoice);
    let blob = make_binary_blob(&bytes, "application/pdf").map_err(ApiError::transport)?;
    download_blob(&blob, &invoice.filename()).map_err(ApiError::transport)
}
