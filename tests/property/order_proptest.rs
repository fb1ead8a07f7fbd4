//! Property-based tests for ranking order parsing

use proptest::prelude::*;
use wikilytics::shared::{SharedError, SortOrder};

proptest! {
    #[test]
    fn test_any_case_of_asc_and_desc_parses(
        asc in "[aA][sS][cC]",
        desc in "[dD][eE][sS][cC]",
    ) {
        prop_assert_eq!(asc.parse::<SortOrder>(), Ok(SortOrder::Asc));
        prop_assert_eq!(desc.parse::<SortOrder>(), Ok(SortOrder::Desc));
    }

    #[test]
    fn test_other_tokens_are_rejected(token in "\\PC{0,8}") {
        let lowered = token.to_ascii_lowercase();
        prop_assume!(lowered != "asc" && lowered != "desc");

        match token.parse::<SortOrder>() {
            Err(SharedError::ValidationError { field, .. }) => prop_assert_eq!(field, "order"),
            Ok(order) => prop_assert!(false, "{:?} parsed as {:?}", token, order),
        }
    }

    #[test]
    fn test_padded_tokens_are_rejected(token in "(asc|desc|ASC|Desc)[ a-z0-9]{1,3}") {
        prop_assert!(token.parse::<SortOrder>().is_err());
    }
}
