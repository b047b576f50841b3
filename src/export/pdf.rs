//! PDF Export functionality
//!
//! Renders the display table as a plain text report on A4 pages using the
//! built-in Helvetica fonts: a centered bold title at the top of each page and
//! one `Service: Cost` line per row.

use std::io::Write;

use pdf_writer::{Content, Finish, Name, Pdf, Rect, Ref, Str};

use crate::error::{CostError, CostResult};
use crate::reports::DisplayRow;

/// A4 width in points
pub const PAGE_WIDTH: f64 = 595.2756;
/// A4 height in points
pub const PAGE_HEIGHT: f64 = 841.8898;

const TITLE_FONT_SIZE: f64 = 16.0;
const BODY_FONT_SIZE: f64 = 12.0;
const TITLE_TOP_OFFSET: f64 = 50.0;
const BODY_TOP_OFFSET: f64 = 100.0;
const LEFT_MARGIN: f64 = 50.0;
const LINE_HEIGHT: f64 = 20.0;
const BOTTOM_MARGIN: f64 = 50.0;

/// Font used for a text line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PdfFont {
    Helvetica,
    HelveticaBold,
}

impl PdfFont {
    fn resource_name(&self) -> &'static str {
        match self {
            Self::Helvetica => "F1",
            Self::HelveticaBold => "F2",
        }
    }

    fn base_font(&self) -> &'static str {
        match self {
            Self::Helvetica => "Helvetica",
            Self::HelveticaBold => "Helvetica-Bold",
        }
    }
}

/// A positioned line of text
#[derive(Debug, Clone, PartialEq)]
pub struct TextLine {
    pub text: String,
    pub font: PdfFont,
    pub size: f64,
    pub x: f64,
    pub y: f64,
}

/// One laid-out page
#[derive(Debug, Clone, PartialEq)]
pub struct PdfPage {
    pub title: TextLine,
    pub lines: Vec<TextLine>,
}

/// Lay out rows across as many pages as needed
///
/// The cursor starts 100pt below the top edge and moves down 20pt per line;
/// once it drops below the bottom margin the next row starts a new page.
/// An empty table still produces one page with the title.
pub fn layout_pages(title: &str, rows: &[DisplayRow]) -> Vec<PdfPage> {
    let new_page = || PdfPage {
        title: title_line(title),
        lines: Vec::new(),
    };

    let mut pages = vec![new_page()];
    let mut y = PAGE_HEIGHT - BODY_TOP_OFFSET;

    for row in rows {
        if y < BOTTOM_MARGIN {
            pages.push(new_page());
            y = PAGE_HEIGHT - BODY_TOP_OFFSET;
        }
        if let Some(page) = pages.last_mut() {
            page.lines.push(TextLine {
                text: format!("{}: {}", row.service, row.cost),
                font: PdfFont::Helvetica,
                size: BODY_FONT_SIZE,
                x: LEFT_MARGIN,
                y,
            });
        }
        y -= LINE_HEIGHT;
    }

    pages
}

fn title_line(title: &str) -> TextLine {
    let width = text_width(title, PdfFont::HelveticaBold, TITLE_FONT_SIZE);
    TextLine {
        text: title.to_string(),
        font: PdfFont::HelveticaBold,
        size: TITLE_FONT_SIZE,
        x: (PAGE_WIDTH - width) / 2.0,
        y: PAGE_HEIGHT - TITLE_TOP_OFFSET,
    }
}

/// Width of `text` in points when set in `font` at `size`
pub fn text_width(text: &str, font: PdfFont, size: f64) -> f64 {
    let units: u32 = encode_win_ansi(text)
        .iter()
        .map(|b| glyph_width(*b, font))
        .sum();
    units as f64 * size / 1000.0
}

/// Serialize the display table to PDF bytes
pub fn export_pdf(title: &str, rows: &[DisplayRow]) -> CostResult<Vec<u8>> {
    let mut buffer = Vec::new();
    write_pdf(title, rows, &mut buffer)?;
    Ok(buffer)
}

/// Write the display table to `writer` as a PDF document
pub fn write_pdf<W: Write>(title: &str, rows: &[DisplayRow], mut writer: W) -> CostResult<()> {
    let pages = layout_pages(title, rows);
    let bytes = render_document(&pages);
    writer
        .write_all(&bytes)
        .and_then(|_| writer.flush())
        .map_err(|e| CostError::Export(format!("Failed to write PDF output: {}", e)))
}

/// Object layout: 1 catalog, 2 page tree, 3-4 fonts, then a page object and
/// its content stream for every page.
fn render_document(pages: &[PdfPage]) -> Vec<u8> {
    let catalog_id = Ref::new(1);
    let tree_id = Ref::new(2);
    let fonts = [
        (Ref::new(3), PdfFont::Helvetica),
        (Ref::new(4), PdfFont::HelveticaBold),
    ];
    let page_id = |i: usize| Ref::new(5 + 2 * i as i32);

    let mut pdf = Pdf::new();
    pdf.set_version(1, 4);
    pdf.catalog(catalog_id).pages(tree_id);
    pdf.pages(tree_id)
        .kids((0..pages.len()).map(page_id))
        .count(pages.len() as i32);

    for (id, font) in fonts {
        pdf.type1_font(id)
            .base_font(Name(font.base_font().as_bytes()))
            .encoding_predefined(Name(b"WinAnsiEncoding"));
    }

    for (i, page) in pages.iter().enumerate() {
        let id = page_id(i);
        let content_id = Ref::new(id.get() + 1);

        let mut writer = pdf.page(id);
        writer
            .media_box(Rect::new(0.0, 0.0, PAGE_WIDTH as f32, PAGE_HEIGHT as f32))
            .parent(tree_id)
            .contents(content_id);
        let mut resources = writer.resources();
        let mut font_dict = resources.fonts();
        for (font_id, font) in fonts {
            font_dict.pair(Name(font.resource_name().as_bytes()), font_id);
        }
        font_dict.finish();
        resources.finish();
        writer.finish();

        pdf.stream(content_id, &page_content(page));
    }

    pdf.finish()
}

fn page_content(page: &PdfPage) -> Vec<u8> {
    let mut content = Content::new();
    for line in std::iter::once(&page.title).chain(page.lines.iter()) {
        content
            .begin_text()
            .set_font(Name(line.font.resource_name().as_bytes()), line.size as f32)
            .next_line(line.x as f32, line.y as f32)
            .show(Str(&encode_win_ansi(&line.text)))
            .end_text();
    }
    content.finish().to_vec()
}

/// Encode text for the WinAnsi-encoded standard fonts
///
/// Characters without a WinAnsi code point become `?`, except the rupee sign
/// which is spelled `Rs`.
fn encode_win_ansi(text: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '€' => out.push(0x80),
            '₹' => out.extend_from_slice(b"Rs"),
            '\u{2013}' => out.push(0x96),
            '\u{2014}' => out.push(0x97),
            c if (c as u32) < 0x80 => out.push(c as u8),
            c if (0xA0..=0xFF).contains(&(c as u32)) => out.push(c as u32 as u8),
            _ => out.push(b'?'),
        }
    }
    out
}

/// Advance width in 1/1000 em of a WinAnsi byte
fn glyph_width(byte: u8, font: PdfFont) -> u32 {
    let table = match font {
        PdfFont::Helvetica => &HELVETICA_WIDTHS,
        PdfFont::HelveticaBold => &HELVETICA_BOLD_WIDTHS,
    };
    match byte {
        32..=126 => table[(byte - 32) as usize],
        _ => 556,
    }
}

/// Helvetica widths for ASCII 32..=126
const HELVETICA_WIDTHS: [u32; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '../
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556, // 0..?
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, // @..O
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556, // P.._
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, // `..o
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584, // p..~
];

/// Helvetica-Bold widths for ASCII 32..=126
const HELVETICA_BOLD_WIDTHS: [u32; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278, // ' '../
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611, // 0..?
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778, // @..O
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556, // P.._
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611, // `..o
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584, // p..~
];
