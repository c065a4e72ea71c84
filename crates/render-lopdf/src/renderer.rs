use crate::content::{font_resource_name, page_content};
use crate::error::PdfWriteError;
use crate::writer::PdfObjectWriter;
use lopdf::{dictionary, Dictionary, Object, ObjectId, StringFormat};
use offerpdf_layout::text::sanitize;
use offerpdf_layout::{FontRole, FontSet, PageLayout};
use std::io::{Cursor, Seek, Write};

/// Document information dictionary entries. Dates are left out so the output
/// stays reproducible.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentInfo {
    pub title: String,
    pub author: String,
    pub subject: String,
    pub producer: String,
}

impl DocumentInfo {
    fn to_dictionary(&self) -> Dictionary {
        let mut dict = Dictionary::new();
        let entries = [
            ("Title", &self.title),
            ("Author", &self.author),
            ("Subject", &self.subject),
            ("Producer", &self.producer),
        ];
        for (key, value) in entries {
            if !value.trim().is_empty() {
                dict.set(key, text_string(value));
            }
        }
        dict
    }
}

/// A PDF text string: plain ASCII as a literal, anything else as UTF-16BE with
/// a byte order mark. Control characters become spaces.
fn text_string(value: &str) -> Object {
    let value = sanitize(value.trim());
    if value.is_ascii() {
        return Object::String(value.as_bytes().to_vec(), StringFormat::Literal);
    }
    let mut bytes = vec![0xFE, 0xFF];
    for unit in value.encode_utf16() {
        bytes.extend_from_slice(&unit.to_be_bytes());
    }
    Object::String(bytes, StringFormat::Hexadecimal)
}

/// Writes laid-out pages with the standard Type1 fonts of a [`FontSet`].
pub struct LopdfRenderer<W: Write + Seek> {
    writer: Option<PdfObjectWriter<W>>,
    fonts: [(FontRole, String); 2],
}

impl<W: Write + Seek> LopdfRenderer<W> {
    pub fn new(fonts: &FontSet) -> Self {
        Self {
            writer: None,
            fonts: [
                (FontRole::Regular, fonts.regular.postscript_name().to_string()),
                (FontRole::Bold, fonts.bold.postscript_name().to_string()),
            ],
        }
    }

    pub fn begin_document(&mut self, writer: W) -> Result<(), PdfWriteError> {
        let mut font_dict = Dictionary::new();
        for (role, base_font) in &self.fonts {
            let single_font_dict = dictionary! {
                "Type" => "Font",
                "Subtype" => "Type1",
                "BaseFont" => Object::Name(base_font.as_bytes().to_vec()),
                "Encoding" => "WinAnsiEncoding",
            };
            font_dict.set(font_resource_name(*role), Object::Dictionary(single_font_dict));
        }
        self.writer = Some(PdfObjectWriter::new(writer, "1.7", font_dict)?);
        Ok(())
    }

    /// Writes the content stream and page object for one laid-out page.
    pub fn render_page(&mut self, page: &PageLayout) -> Result<ObjectId, PdfWriteError> {
        let writer = self.writer.as_mut().ok_or(PdfWriteError::NotStarted)?;
        let content = page_content(page);
        log::debug!("Page content has {} operations", content.operations.len());
        let content_id = writer.buffer_content_stream(content)?;

        let page_dict = dictionary! {
            "Type" => "Page",
            "Parent" => writer.pages_id,
            "MediaBox" => vec![0.into(), 0.into(), page.size.width.into(), page.size.height.into()],
            "Contents" => content_id,
            "Resources" => writer.resources_id,
        };
        let page_id = writer.buffer_object(page_dict.into());
        writer.add_page_id(page_id);
        Ok(page_id)
    }

    pub fn set_info(&mut self, info: &DocumentInfo) -> Result<(), PdfWriteError> {
        let writer = self.writer.as_mut().ok_or(PdfWriteError::NotStarted)?;
        writer.set_info(info.to_dictionary());
        Ok(())
    }

    pub fn finish(mut self) -> Result<W, PdfWriteError> {
        let writer = self.writer.take().ok_or(PdfWriteError::NotStarted)?;
        log::debug!("Finishing PDF with {} page(s)", writer.page_count());
        Ok(writer.finish()?)
    }
}

/// Renders one page into an in-memory PDF.
pub fn render_to_vec(page: &PageLayout, fonts: &FontSet, info: &DocumentInfo) -> Result<Vec<u8>, PdfWriteError> {
    let mut renderer = LopdfRenderer::new(fonts);
    renderer.begin_document(Cursor::new(Vec::new()))?;
    renderer.render_page(page)?;
    renderer.set_info(info)?;
    Ok(renderer.finish()?.into_inner())
}
