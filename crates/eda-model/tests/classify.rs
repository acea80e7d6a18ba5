//! Property tests for identifier classification.

use eda_model::{IdentifierKind, Value, classify};
use proptest::prelude::*;

proptest! {
    #[test]
    fn non_negative_integers_are_ids(n in 0i64..=i64::MAX) {
        prop_assert_eq!(classify(&Value::from(n)), Some(IdentifierKind::Id));
        prop_assert_eq!(classify(&Value::from(n.to_string())), Some(IdentifierKind::Id));
    }

    #[test]
    fn three_letter_text_is_a_code(s in "[A-Za-z]{3}") {
        prop_assert_eq!(classify(&Value::from(s)), Some(IdentifierKind::Code));
    }

    #[test]
    fn other_text_is_a_label(s in "[A-Za-z][A-Za-z ]{0,1}|[A-Za-z][A-Za-z ]{3,30}") {
        prop_assert_eq!(classify(&Value::from(s)), Some(IdentifierKind::Label));
    }

    #[test]
    fn blank_text_is_unclassified(s in " {0,5}") {
        prop_assert_eq!(classify(&Value::from(s)), None);
    }
}

#[test]
fn null_and_empty_are_unclassified() {
    assert_eq!(classify(&Value::Null), None);
    assert_eq!(classify(&Value::from("")), None);
}
