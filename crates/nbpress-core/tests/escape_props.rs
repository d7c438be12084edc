//! Property tests for escaping totality and idempotence

use nbpress_core::escape_text;
use proptest::prelude::*;

proptest! {
    #[test]
    fn escaped_text_has_no_raw_angle_brackets(s in ".*") {
        let escaped = escape_text(&s);
        prop_assert!(!escaped.contains('<'));
        prop_assert!(!escaped.contains('>'));
    }

    #[test]
    fn escaping_is_idempotent(s in ".*") {
        let once = escape_text(&s);
        prop_assert_eq!(escape_text(&once), once);
    }

    #[test]
    fn escaping_preserves_text_without_special_characters(s in "[a-zA-Z0-9 .,!?_'\"-]*") {
        prop_assert_eq!(escape_text(&s), s);
    }
}
