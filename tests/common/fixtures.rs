use offerpdf::{LineItem, NaiveDate, OfferDocumentData, TimelineFields};
use serde_json::{json, Value};

pub fn issue_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 5).unwrap()
}

/// An offer with only the required header fields
pub fn minimal_offer() -> OfferDocumentData {
    OfferDocumentData::new("OFF-2024-001", issue_date(), "Mario Rossi")
}

/// The three-line offer whose net total is 360.50
pub fn window_offer() -> OfferDocumentData {
    OfferDocumentData::new("OFF-2024-017", issue_date(), "Serramenti Bianchi S.r.l.")
        .with_subject("Sostituzione serramenti piano terra")
        .with_items(vec![
            LineItem::new("Finestra PVC 2 ante 120x140", 1.0, 100.0),
            LineItem::new("Portafinestra PVC 80x220", 1.0, 250.5),
            LineItem::new("Smaltimento vecchi infissi", 1.0, 10.0),
        ])
}

/// An offer that fills every section
pub fn complete_offer() -> OfferDocumentData {
    let mut doc = window_offer()
        .with_description("Fornitura e posa in opera di serramenti in PVC bianco con vetrocamera basso emissivo.")
        .with_inclusions(["Trasporto", "Posa in opera", "Smaltimento", "Silicone", "Coprifili", "Garanzia 10 anni"])
        .with_exclusions("Opere murarie, tinteggiature e pratiche edilizie.")
        .with_timeline(TimelineFields {
            production: Some("4 settimane".into()),
            delivery: Some("1 settimana".into()),
            installation: Some("2 giorni".into()),
        });
    doc.header.author = "Giulia Verdi".into();
    doc.header.customer.address = "Via Roma 1\n20100 Milano (MI)".into();
    doc
}

/// The JSON the web application sends for an offer
pub fn offer_json() -> Value {
    json!({
        "offerNumber": "OFF-2024-042",
        "issueDate": "2024-06-12",
        "author": "Giulia Verdi",
        "customer": { "name": "Condominio Aurora", "address": "Via Verdi 7\n10121 Torino" },
        "subject": "Portoncino blindato",
        "items": [
            { "description": "Portoncino blindato classe 3", "quantity": 1, "unitPrice": 1450.0 },
            { "description": "Serratura di sicurezza", "quantity": 2, "unitPrice": 85.5 }
        ],
        "inclusions": ["Trasporto", "Posa in opera"],
        "exclusions": "Opere murarie.",
        "totals": { "net": 1621.0, "tax": 356.62, "gross": 1977.62 },
        "timeline": { "production": "3 settimane" }
    })
}
