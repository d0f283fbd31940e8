//! Property tests for marker insertion and rewriting.

use clickhouse_grammar::*;
use proptest::prelude::*;

proptest! {
    #[test]
    fn parameterize_emits_exactly_count_markers(count in 0usize..64) {
        let sql = parameterize(count);
        prop_assert_eq!(sql.matches(PARAM_MARKER).count(), count);
        if count == 0 {
            prop_assert!(sql.is_empty());
        } else {
            // count markers plus ", " between each pair, nothing else
            prop_assert_eq!(sql.len(), count * PARAM_MARKER.len() + (count - 1) * 2);
        }
    }

    #[test]
    fn rewrite_is_identity_without_markers(sql in "[A-Za-z0-9 =<>,:'()_]{0,60}") {
        let rewritten = rewrite_params(&sql);
        prop_assert_eq!(rewritten, sql);
    }

    #[test]
    fn rewrite_assigns_contiguous_indices(count in 1usize..16) {
        let sql = rewrite_params(&parameterize(count));
        let expected: Vec<String> = (0..count).map(|i| format!(":{i}")).collect();
        prop_assert_eq!(sql, expected.join(", "));
    }

    #[test]
    fn rewrite_continues_above_existing_index(existing in 0usize..100, count in 1usize..8) {
        let sql = format!("a = :{existing} AND b IN ({})", parameterize(count));
        let rewritten = rewrite_params(&sql);
        // bound outside the assertion: prop_assert! reuses its condition as a
        // format string, so inline format! braces would not parse
        let prefix = format!("a = :{existing} ");
        prop_assert!(rewritten.starts_with(&prefix));
        for i in 1..=count {
            let expected = format!(":{}", existing + i);
            prop_assert!(rewritten.contains(&expected));
        }
        prop_assert_eq!(next_param_index(&rewritten), existing + count + 1);
    }

    #[test]
    fn scanner_sees_both_prefixes_as_one_namespace(idx in 0usize..50) {
        prop_assert_eq!(next_param_index(&format!("x = :{idx}")), idx + 1);
        prop_assert_eq!(next_param_index(&format!("x = :p{idx}")), idx + 1);
    }
}
