//! Property tests for archive determinism.

use proptest::prelude::*;
use std::collections::BTreeMap;

use policy_export::infrastructure::write_archive;

fn tree() -> impl Strategy<Value = BTreeMap<String, Vec<u8>>> {
    proptest::collection::btree_map(
        proptest::string::string_regex("[a-z]{1,6}(/[a-z]{1,6}){0,2}\\.rb").unwrap(),
        proptest::collection::vec(any::<u8>(), 0..256),
        1..8,
    )
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 24,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: the same tree always produces the same archive bytes.
    #[test]
    fn property_archive_bytes_depend_only_on_content(files in tree()) {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("tree");
        for (relative, content) in &files {
            let path = root.join(relative);
            std::fs::create_dir_all(path.parent().unwrap()).unwrap();
            std::fs::write(&path, content).unwrap();
        }

        let first = write_archive(&root, &dir.path().join("a.tgz")).unwrap();
        let second = write_archive(&root, &dir.path().join("b.tgz")).unwrap();

        prop_assert_eq!(&first.digest, &second.digest);
        prop_assert_eq!(
            std::fs::read(&first.path).unwrap(),
            std::fs::read(&second.path).unwrap()
        );
    }
}
