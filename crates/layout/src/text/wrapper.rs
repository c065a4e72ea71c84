use crate::fonts::FontMetrics;

/// One committed line of wrapped text and its measured width in points.
#[derive(Debug, Clone, PartialEq)]
pub struct LineLayout {
    pub text: String,
    pub width: f32,
}

/// Greedy word-level line breaking.
///
/// Words are accumulated while the measured line stays within `max_width`;
/// the first word that would overflow starts the next line. Words are never
/// split, so a single word wider than `max_width` occupies a line of its own.
/// Explicit newlines in `text` force a break, and a blank source line yields
/// an empty output line.
pub fn break_lines(text: &str, max_width: f32, font_size: f32, font: &FontMetrics) -> Vec<LineLayout> {
    let space_width = font.width_of_text_at_size(" ", font_size);
    let mut lines = Vec::new();

    for paragraph in text.lines() {
        let mut current = String::new();
        let mut current_width = 0.0f32;

        for word in paragraph.split_whitespace() {
            let word_width = font.width_of_text_at_size(word, font_size);

            if current.is_empty() {
                current.push_str(word);
                current_width = word_width;
                continue;
            }

            if current_width + space_width + word_width <= max_width {
                current.push(' ');
                current.push_str(word);
                current_width += space_width + word_width;
            } else {
                lines.push(LineLayout {
                    text: std::mem::take(&mut current),
                    width: current_width,
                });
                current.push_str(word);
                current_width = word_width;
            }
        }

        lines.push(LineLayout {
            text: current,
            width: current_width,
        });
    }

    // `lines()` yields a trailing empty paragraph only for inputs like "a\n\n";
    // drop trailing blank lines so callers never reserve space for nothing.
    while lines.last().is_some_and(|l| l.text.is_empty()) {
        lines.pop();
    }
    lines
}

/// Convenience wrapper returning only the line strings.
pub fn wrap_text(text: &str, max_width: f32, font_size: f32, font: &FontMetrics) -> Vec<String> {
    break_lines(text, max_width, font_size, font)
        .into_iter()
        .map(|line| line.text)
        .collect()
}

/// Drops trailing characters until `text` measures at most `max_width`.
pub fn clip_to_width<'t>(text: &'t str, max_width: f32, font_size: f32, font: &FontMetrics) -> &'t str {
    let mut end = text.len();
    while end > 0 && font.width_of_text_at_size(&text[..end], font_size) > max_width {
        end = text[..end].char_indices().next_back().map_or(0, |(i, _)| i);
    }
    &text[..end]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fonts::{FontProvider, StandardFontProvider};

    fn helvetica() -> FontMetrics {
        StandardFontProvider.load_font("Helvetica").unwrap()
    }

    fn words(s: &str) -> Vec<&str> {
        s.split_whitespace().collect()
    }

    #[test]
    fn short_text_stays_on_one_line() {
        let lines = wrap_text("Fornitura completa", 500.0, 10.0, &helvetica());
        assert_eq!(lines, vec!["Fornitura completa".to_string()]);
    }

    #[test]
    fn lines_never_exceed_max_width_unless_single_word() {
        let font = helvetica();
        let text = "Fornitura e posa in opera di serramenti in PVC con vetrocamera basso emissivo, \
                    controtelai in legno, soglie ribassate e coprifili interni su tutte le aperture \
                    del piano terra e del primo piano, compreso smaltimento dei vecchi infissi.";
        for max_width in [40.0, 80.0, 120.0, 200.0, 333.3, 500.0] {
            for line in break_lines(text, max_width, 9.0, &font) {
                let measured = font.width_of_text_at_size(&line.text, 9.0);
                assert!((measured - line.width).abs() < 0.01);
                assert!(
                    measured <= max_width + 0.001 || !line.text.contains(' '),
                    "line '{}' ({}) overflows {}",
                    line.text,
                    measured,
                    max_width
                );
            }
        }
    }

    #[test]
    fn wrapping_preserves_every_word_in_order() {
        let font = helvetica();
        let text = "Smontaggio  e smaltimento\tdei vecchi serramenti, trasporto al piano e pulizia finale";
        for max_width in [10.0, 60.0, 150.0, 1000.0] {
            let lines = wrap_text(text, max_width, 10.0, &font);
            assert_eq!(words(&lines.join(" ")), words(text));
        }
    }

    #[test]
    fn overlong_word_is_not_split() {
        let lines = wrap_text("a Precipitevolissimevolmente b", 30.0, 10.0, &helvetica());
        assert_eq!(lines, vec!["a", "Precipitevolissimevolmente", "b"]);
    }

    #[test]
    fn explicit_newlines_force_breaks() {
        let lines = wrap_text("Esclusi:\n\nopere murarie\n", 500.0, 10.0, &helvetica());
        assert_eq!(lines, vec!["Esclusi:", "", "opere murarie"]);
    }

    #[test]
    fn empty_input_yields_no_lines() {
        assert!(wrap_text("", 100.0, 10.0, &helvetica()).is_empty());
        assert!(wrap_text("   \n  ", 100.0, 10.0, &helvetica()).is_empty());
    }

    #[test]
    fn clipping_keeps_text_within_width() {
        let font = helvetica();
        assert_eq!(clip_to_width("Posa", 100.0, 10.0, &font), "Posa");
        let clipped = clip_to_width("Responsabile commerciale àèìòù", 60.0, 10.0, &font);
        assert!(font.width_of_text_at_size(clipped, 10.0) <= 60.0);
        assert!("Responsabile commerciale àèìòù".starts_with(clipped));
        assert!(!clipped.is_empty());
        assert_eq!(clip_to_width("Posa", 0.0, 10.0, &font), "");
    }
}
