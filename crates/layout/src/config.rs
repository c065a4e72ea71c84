//! Layout constants for the offer page.
//!
//! Every offset, height, column width, font size, truncation limit, color and
//! label the section renderers use is read from here. The defaults reproduce the
//! standard offer template; a JSON file may override any subset of fields.

use offerpdf_types::{Color, Size};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutConfig {
    pub page: PageConfig,
    pub fonts: FontConfig,
    pub palette: Palette,
    pub header: HeaderConfig,
    pub subject: SubjectConfig,
    pub table: TableConfig,
    pub totals: TotalsConfig,
    pub inclusions: InclusionConfig,
    pub exclusions: ExclusionConfig,
    pub timeline: TimelineConfig,
    pub footer: FooterConfig,
    pub labels: Labels,
    /// VAT rate used when the document carries no precomputed totals.
    pub vat_rate_percent: f64,
}

impl LayoutConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn page_size(&self) -> Size {
        Size::new(self.page.width, self.page.height)
    }

    pub fn content_left(&self) -> f32 {
        self.page.margin_left
    }

    pub fn content_right(&self) -> f32 {
        self.page.width - self.page.margin_right
    }

    pub fn content_width(&self) -> f32 {
        self.content_right() - self.content_left()
    }

    /// Lowest y the flowing sections may reach without touching the footer.
    pub fn content_bottom(&self) -> f32 {
        self.page.margin_bottom + self.footer.height
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageConfig {
    pub width: f32,
    pub height: f32,
    pub margin_top: f32,
    pub margin_bottom: f32,
    pub margin_left: f32,
    pub margin_right: f32,
    /// Vertical space left between consecutive sections.
    pub section_gap: f32,
}

impl Default for PageConfig {
    fn default() -> Self {
        let a4 = Size::a4();
        Self {
            width: a4.width,
            height: a4.height,
            margin_top: 30.0,
            margin_bottom: 20.0,
            margin_left: 40.0,
            margin_right: 40.0,
            section_gap: 12.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FontConfig {
    pub regular: String,
    pub bold: String,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            regular: "Helvetica".to_string(),
            bold: "Helvetica-Bold".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Palette {
    pub primary: Color,
    pub on_primary: Color,
    pub text: Color,
    pub muted: Color,
    pub zebra: Color,
    pub border: Color,
    pub panel: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            primary: Color::rgb(0x1e, 0x3a, 0x5f),
            on_primary: Color::WHITE,
            text: Color::rgb(0x22, 0x22, 0x22),
            muted: Color::rgb(0x6b, 0x72, 0x80),
            zebra: Color::rgb(0xf3, 0xf4, 0xf6),
            border: Color::rgb(0xd1, 0xd5, 0xdb),
            panel: Color::rgb(0xf8, 0xfa, 0xfc),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HeaderConfig {
    pub band_height: f32,
    pub title_size: f32,
    pub meta_size: f32,
    /// Width of the right-hand column holding number and date.
    pub meta_width: f32,
    pub padding: f32,
    pub customer_height: f32,
    pub customer_name_size: f32,
    pub customer_text_size: f32,
    pub address_line_height: f32,
    pub max_address_lines: usize,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            band_height: 64.0,
            title_size: 20.0,
            meta_size: 10.0,
            meta_width: 170.0,
            padding: 14.0,
            customer_height: 72.0,
            customer_name_size: 12.0,
            customer_text_size: 9.5,
            address_line_height: 12.0,
            max_address_lines: 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SubjectConfig {
    pub font_size: f32,
    pub line_height: f32,
    pub label_width: f32,
    pub description_size: f32,
    pub description_line_height: f32,
}

impl Default for SubjectConfig {
    fn default() -> Self {
        Self {
            font_size: 10.5,
            line_height: 15.0,
            label_width: 52.0,
            description_size: 9.5,
            description_line_height: 13.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TableConfig {
    pub header_height: f32,
    pub row_height: f32,
    pub font_size: f32,
    pub cell_padding: f32,
    /// Distance from the row's bottom edge to the text baseline.
    pub baseline_offset: f32,
    pub border_width: f32,
    pub description_width: f32,
    pub quantity_width: f32,
    pub unit_price_width: f32,
    pub total_width: f32,
    pub description_max_chars: usize,
    /// Limit for the single full-width row drawn when there are no items.
    pub fallback_max_chars: usize,
}

impl TableConfig {
    /// Left edges of the four columns relative to the table's left edge.
    pub fn column_offsets(&self) -> [f32; 4] {
        let q = self.description_width;
        let u = q + self.quantity_width;
        let t = u + self.unit_price_width;
        [0.0, q, u, t]
    }

    pub fn width(&self) -> f32 {
        self.description_width + self.quantity_width + self.unit_price_width + self.total_width
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            header_height: 22.0,
            row_height: 20.0,
            font_size: 9.0,
            cell_padding: 6.0,
            baseline_offset: 7.0,
            border_width: 1.0,
            description_width: 285.0,
            quantity_width: 50.0,
            unit_price_width: 90.0,
            total_width: 90.0,
            description_max_chars: 52,
            fallback_max_chars: 95,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TotalsConfig {
    pub width: f32,
    pub row_height: f32,
    pub font_size: f32,
    pub gross_row_height: f32,
    pub gross_font_size: f32,
    pub rule_thickness: f32,
    pub top_gap: f32,
}

impl Default for TotalsConfig {
    fn default() -> Self {
        Self {
            width: 200.0,
            row_height: 16.0,
            font_size: 10.0,
            gross_row_height: 24.0,
            gross_font_size: 13.0,
            rule_thickness: 1.0,
            top_gap: 8.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InclusionConfig {
    pub max_items: usize,
    pub columns: usize,
    pub title_height: f32,
    pub row_height: f32,
    pub font_size: f32,
    pub padding: f32,
    pub max_chars: usize,
    pub bullet: String,
}

impl Default for InclusionConfig {
    fn default() -> Self {
        Self {
            max_items: 6,
            columns: 2,
            title_height: 20.0,
            row_height: 14.0,
            font_size: 9.0,
            padding: 10.0,
            max_chars: 40,
            bullet: "•".to_string(),
        }
    }
}

impl InclusionConfig {
    /// The panel reserves room for a full grid whatever the item count.
    pub fn height(&self) -> f32 {
        let rows = self.max_items.div_ceil(self.columns.max(1));
        self.title_height + rows as f32 * self.row_height + self.padding
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExclusionConfig {
    pub title_height: f32,
    pub font_size: f32,
    pub line_height: f32,
    pub padding: f32,
}

impl Default for ExclusionConfig {
    fn default() -> Self {
        Self {
            title_height: 20.0,
            font_size: 9.0,
            line_height: 12.0,
            padding: 10.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TimelineConfig {
    pub height: f32,
    pub title_size: f32,
    pub label_size: f32,
    pub value_size: f32,
    pub padding: f32,
    pub max_chars: usize,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            height: 56.0,
            title_size: 10.0,
            label_size: 8.0,
            value_size: 10.0,
            padding: 10.0,
            max_chars: 28,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FooterConfig {
    pub height: f32,
    pub font_size: f32,
    pub rule_thickness: f32,
}

impl Default for FooterConfig {
    fn default() -> Self {
        Self {
            height: 28.0,
            font_size: 8.0,
            rule_thickness: 0.5,
        }
    }
}

/// Printed captions. Defaults are Italian, the language offers are issued in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Labels {
    pub title: String,
    pub number: String,
    pub date: String,
    pub customer: String,
    pub author: String,
    pub subject: String,
    pub description: String,
    pub quantity: String,
    pub unit_price: String,
    pub line_total: String,
    pub net: String,
    pub tax: String,
    pub gross: String,
    pub inclusions: String,
    pub exclusions: String,
    pub timeline: String,
    pub production: String,
    pub delivery: String,
    pub installation: String,
    pub footer_note: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            title: "PREVENTIVO".to_string(),
            number: "N.".to_string(),
            date: "Data".to_string(),
            customer: "Spett.le".to_string(),
            author: "Referente".to_string(),
            subject: "Oggetto:".to_string(),
            description: "Descrizione".to_string(),
            quantity: "Q.tà".to_string(),
            unit_price: "Prezzo unit.".to_string(),
            line_total: "Totale".to_string(),
            net: "Imponibile".to_string(),
            tax: "IVA".to_string(),
            gross: "Totale".to_string(),
            inclusions: "Cosa è incluso".to_string(),
            exclusions: "Esclusioni".to_string(),
            timeline: "Tempistiche".to_string(),
            production: "Produzione".to_string(),
            delivery: "Consegna".to_string(),
            installation: "Installazione".to_string(),
            footer_note: "Offerta valida 30 giorni dalla data di emissione".to_string(),
        }
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            page: PageConfig::default(),
            fonts: FontConfig::default(),
            palette: Palette::default(),
            header: HeaderConfig::default(),
            subject: SubjectConfig::default(),
            table: TableConfig::default(),
            totals: TotalsConfig::default(),
            inclusions: InclusionConfig::default(),
            exclusions: ExclusionConfig::default(),
            timeline: TimelineConfig::default(),
            footer: FooterConfig::default(),
            labels: Labels::default(),
            vat_rate_percent: 22.0,
        }
    }
}
