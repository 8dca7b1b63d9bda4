//! Property tests for package filtering.

use proptest::prelude::*;

use policy_export::application::export::PackageFilter;
use policy_export::domain::value_objects::IgnorePatterns;
use std::ffi::OsString;
use std::path::Path;

fn entry_name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z][a-z0-9_]{0,8}(\\.(rb|tmp|md|json))?").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: selection never includes an ignored name and never invents one.
    #[test]
    fn property_select_is_a_sorted_subset(
        names in proptest::collection::btree_set(entry_name(), 0..16),
    ) {
        let patterns = IgnorePatterns::from_content(
            Path::new("/pkg"),
            Path::new("/pkg/chefignore"),
            "*.tmp\n",
        )
        .unwrap();
        let entries: Vec<(OsString, bool)> =
            names.iter().map(|n| (OsString::from(n), false)).collect();

        let selected = PackageFilter::new().select(entries, &patterns);

        let mut sorted = selected.clone();
        sorted.sort();
        prop_assert_eq!(&selected, &sorted);
        for name in &selected {
            let name = name.to_str().unwrap();
            prop_assert!(names.contains(name));
            prop_assert!(!name.ends_with(".tmp"));
        }
        let kept = names.iter().filter(|n| !n.ends_with(".tmp")).count();
        prop_assert_eq!(selected.len(), kept);
    }

    /// PROPERTY: an empty rule set keeps everything.
    #[test]
    fn property_empty_rules_keep_everything(
        names in proptest::collection::btree_set(entry_name(), 0..16),
    ) {
        let entries: Vec<(OsString, bool)> =
            names.iter().map(|n| (OsString::from(n), false)).collect();

        let selected = PackageFilter::new().select(entries, &IgnorePatterns::empty());

        prop_assert_eq!(selected.len(), names.len());
    }
}
