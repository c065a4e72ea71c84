//! The offer record consumed by the layout engine.
//!
//! Field names follow the camelCase JSON the web client sends, so a record
//! fetched from the database can be deserialized as-is.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Everything needed to lay out one offer page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferDocumentData {
    #[serde(flatten)]
    pub header: DocumentHeader,
    /// Short subject line printed under the header band.
    #[serde(default)]
    pub subject: String,
    /// Free-text summary. Wrapped under the subject and reused as the only
    /// table row when `items` is empty.
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub items: Vec<LineItem>,
    #[serde(default)]
    pub inclusions: Vec<String>,
    #[serde(default)]
    pub exclusions: String,
    /// Upstream-computed totals. `None` lets the caller fall back to
    /// [`Totals::from_items`].
    #[serde(default)]
    pub totals: Option<Totals>,
    #[serde(default)]
    pub timeline: TimelineFields,
}

impl OfferDocumentData {
    pub fn new(offer_number: impl Into<String>, issue_date: NaiveDate, customer: impl Into<String>) -> Self {
        Self {
            header: DocumentHeader {
                offer_number: offer_number.into(),
                issue_date,
                author: String::new(),
                customer: Customer {
                    name: customer.into(),
                    address: String::new(),
                },
            },
            ..Default::default()
        }
    }

    pub fn with_items(mut self, items: Vec<LineItem>) -> Self {
        self.items = items;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = subject.into();
        self
    }

    pub fn with_inclusions<I, S>(mut self, inclusions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.inclusions = inclusions.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_exclusions(mut self, exclusions: impl Into<String>) -> Self {
        self.exclusions = exclusions.into();
        self
    }

    pub fn with_totals(mut self, totals: Totals) -> Self {
        self.totals = Some(totals);
        self
    }

    pub fn with_timeline(mut self, timeline: TimelineFields) -> Self {
        self.timeline = timeline;
        self
    }

    /// Totals to print: the supplied ones, or a derivation from the items.
    pub fn effective_totals(&self, vat_rate_percent: f64) -> Totals {
        self.totals
            .clone()
            .unwrap_or_else(|| Totals::from_items(&self.items, vat_rate_percent))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentHeader {
    pub offer_number: String,
    pub issue_date: NaiveDate,
    /// Display name of the salesperson who issued the offer.
    #[serde(default)]
    pub author: String,
    pub customer: Customer,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub name: String,
    /// Postal address, possibly multi-line.
    #[serde(default)]
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub description: String,
    pub quantity: f64,
    pub unit_price: f64,
}

impl LineItem {
    pub fn new(description: impl Into<String>, quantity: f64, unit_price: f64) -> Self {
        Self {
            description: description.into(),
            quantity,
            unit_price,
        }
    }

    /// Quantity times unit price. Discounts are applied upstream, never here.
    pub fn line_total(&self) -> f64 {
        self.quantity * self.unit_price
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Totals {
    pub net: f64,
    pub tax: f64,
    pub gross: f64,
}

impl Totals {
    pub fn new(net: f64, tax: f64, gross: f64) -> Self {
        Self { net, tax, gross }
    }

    /// Derives totals from line items. Amounts are rounded to cents.
    pub fn from_items(items: &[LineItem], vat_rate_percent: f64) -> Self {
        let net = round_cents(items.iter().map(LineItem::line_total).sum());
        let tax = round_cents(net * vat_rate_percent / 100.0);
        Self {
            net,
            tax,
            gross: round_cents(net + tax),
        }
    }
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Estimated lead times. Each entry is optional free text ("4 settimane").
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimelineFields {
    #[serde(default)]
    pub production: Option<String>,
    #[serde(default)]
    pub delivery: Option<String>,
    #[serde(default)]
    pub installation: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimelineKind {
    Production,
    Delivery,
    Installation,
}

impl TimelineFields {
    /// Non-blank entries in their fixed display order.
    pub fn entries(&self) -> Vec<(TimelineKind, &str)> {
        [
            (TimelineKind::Production, &self.production),
            (TimelineKind::Delivery, &self.delivery),
            (TimelineKind::Installation, &self.installation),
        ]
        .into_iter()
        .filter_map(|(kind, value)| {
            value
                .as_deref()
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(|v| (kind, v))
        })
        .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }
}
