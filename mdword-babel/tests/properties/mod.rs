//! Property tests over arbitrary line mixes.

use mdword_babel::inline::{apply_pass, strip_inline_markup, RULES};
use mdword_babel::{scan, Block, ScanOptions};
use proptest::prelude::*;

fn markdownish_line() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("   ".to_string()),
        Just("```".to_string()),
        Just("---".to_string()),
        "#{1,8} [a-z ]{0,10}",
        "[-*] [a-z*_`]{0,10}",
        "[0-9]{1,3}\\. [a-z]{0,10}",
        "> ?[a-z*]{0,10}",
        "[a-z*_` ]{1,20}",
    ]
}

/// Non-blank line whose paragraph text is blank once markup is stripped.
fn vanishes(line: &str) -> bool {
    !line.trim().is_empty() && strip_inline_markup(line).trim().is_empty()
}

proptest! {
    #[test]
    fn block_count_is_bounded_by_line_count(lines in prop::collection::vec(markdownish_line(), 0..40)) {
        let source = lines.join("\n");
        let blocks = scan(&source, ScanOptions::default());
        prop_assert!(blocks.len() <= lines.len().max(1));
    }

    #[test]
    fn spacers_never_repeat_or_lead(lines in prop::collection::vec(markdownish_line(), 0..40)) {
        // A paragraph that strips down to whitespace emits nothing, which would let
        // the blank lines around it produce neighbouring spacers.
        let lines: Vec<String> = lines.into_iter().filter(|l| !vanishes(l)).collect();
        let blocks = scan(&lines.join("\n"), ScanOptions::default());
        prop_assert_ne!(blocks.first(), Some(&Block::BlankSpacer));
        for pair in blocks.windows(2) {
            prop_assert!(!(pair[0] == Block::BlankSpacer && pair[1] == Block::BlankSpacer));
        }
    }

    #[test]
    fn fence_free_non_blank_lines_map_one_to_one(lines in prop::collection::vec(markdownish_line(), 0..40)) {
        let lines: Vec<String> = lines
            .into_iter()
            .filter(|l| !l.trim().starts_with("```") && !l.trim().is_empty() && !vanishes(l))
            .collect();
        let blocks = scan(&lines.join("\n"), ScanOptions::default());
        prop_assert_eq!(blocks.len(), lines.len());
    }

    #[test]
    fn passes_are_idempotent_once_exhausted(text in "[a-z*_` ]{0,30}") {
        for rule in RULES {
            let once = apply_pass(rule, &text);
            if !rule.matches(&once) {
                prop_assert_eq!(apply_pass(rule, &once), once);
            }
        }
    }
}
