mod common;

use common::fixtures::*;
use common::{generate_pdf, generate_pdf_from_json, TestResult};
use offerpdf::{LineItem, OfferPipelineBuilder, SectionKind, Totals};

#[test]
fn test_header_shows_number_date_and_customer() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let pdf = generate_pdf(&complete_offer())?;
    assert_pdf_contains_text!(pdf, "PREVENTIVO");
    assert_pdf_contains_text!(pdf, "N. OFF-2024-017");
    assert_pdf_contains_text!(pdf, "05/03/2024");
    assert_pdf_contains_text!(pdf, "Serramenti Bianchi S.r.l.");
    assert_pdf_contains_text!(pdf, "Via Roma 1");
    Ok(())
}

#[test]
fn test_derived_totals_have_two_decimals() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let pdf = generate_pdf(&window_offer())?;
    assert_pdf_contains_text!(pdf, "360.50");
    assert_pdf_contains_text!(pdf, "79.31");
    assert_pdf_contains_text!(pdf, "439.81");
    Ok(())
}

#[test]
fn test_supplied_totals_are_not_recomputed() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let doc = window_offer().with_totals(Totals::new(1000.0, 100.0, 1100.0));
    let pdf = generate_pdf(&doc)?;
    assert_pdf_contains_text!(pdf, "1100.00");
    assert_pdf_not_contains_text!(pdf, "439.81");
    Ok(())
}

#[test]
fn test_empty_items_render_fallback_row() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let doc = minimal_offer().with_description("Fornitura completa");
    let pdf = generate_pdf(&doc)?;
    assert_pdf_contains_text!(pdf, "Fornitura completa");
    assert_pdf_contains_text!(pdf, "0.00");
    Ok(())
}

#[test]
fn test_panels_and_timeline_are_drawn() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let pdf = generate_pdf(&complete_offer())?;
    assert_pdf_contains_text!(pdf, "Garanzia 10 anni");
    assert_pdf_contains_text!(pdf, "Esclusioni");
    assert_pdf_contains_text!(pdf, "Opere murarie");
    assert_pdf_contains_text!(pdf, "Tempistiche");
    assert_pdf_contains_text!(pdf, "4 settimane");
    Ok(())
}

#[test]
fn test_missing_optional_sections_are_skipped() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let pipeline = OfferPipelineBuilder::new().build()?;
    let page = pipeline.engine().layout(&window_offer());
    for kind in [SectionKind::Inclusions, SectionKind::Exclusions, SectionKind::Timeline] {
        assert!(page.section_ops(kind).is_empty(), "{:?} should be empty", kind);
    }

    let pdf = generate_pdf(&window_offer())?;
    assert_pdf_not_contains_text!(pdf, "Tempistiche");
    assert_pdf_not_contains_text!(pdf, "Esclusioni");
    Ok(())
}

#[test]
fn test_only_six_inclusions_are_printed() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let doc = window_offer().with_inclusions((1..=8).map(|i| format!("Servizio {}", i)));
    let pdf = generate_pdf(&doc)?;
    assert_pdf_contains_text!(pdf, "Servizio 6");
    assert_pdf_not_contains_text!(pdf, "Servizio 7");
    Ok(())
}

#[test]
fn test_json_offer_renders() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let pdf = generate_pdf_from_json(&offer_json())?;
    assert_pdf_page_count!(pdf, 1);
    assert_pdf_contains_text!(pdf, "OFF-2024-042");
    assert_pdf_contains_text!(pdf, "12/06/2024");
    assert_pdf_contains_text!(pdf, "Condominio Aurora");
    assert_pdf_contains_text!(pdf, "1977.62");
    assert_pdf_contains_text!(pdf, "3 settimane");
    Ok(())
}

#[test]
fn test_overflowing_offer_still_renders_one_page() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let items = (1..=40).map(|i| LineItem::new(format!("Voce {}", i), 1.0, 5.0)).collect();
    let doc = complete_offer().with_items(items);

    let pipeline = OfferPipelineBuilder::new().build()?;
    assert!(pipeline.engine().layout(&doc).overflowed());

    let pdf = generate_pdf(&doc)?;
    assert_pdf_page_count!(pdf, 1);
    assert_pdf_contains_text!(pdf, "Voce 40");
    Ok(())
}
