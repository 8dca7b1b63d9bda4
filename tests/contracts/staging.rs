//! Contract: staging areas never outlive the export that created them.

use crate::common::*;
use policy_export::{ExportError, ExportUseCase};

/// CONTRACT: a missing lock fails before any staging area exists
#[test]
fn contract_missing_lock_creates_no_staging() {
    let env = TestEnv::builder().without_lock().build();

    let err = ExportUseCase::new(env.request()).run().unwrap_err();

    assert!(matches!(err, ExportError::LockNotFound { .. }));
    assert!(env.staging_is_clean());
}

/// CONTRACT: staging is removed after success in both modes
#[test]
fn contract_staging_removed_after_success() {
    let env = TestEnv::builder().with_cookbook("app", "1.2.0").build();

    ExportUseCase::new(env.request()).run().unwrap();
    assert!(env.staging_is_clean());

    ExportUseCase::new(env.request().with_archive(true)).run().unwrap();
    assert!(env.staging_is_clean());
}

/// CONTRACT: staging is removed when assembly fails part-way
#[test]
fn contract_staging_removed_after_assembly_failure() {
    let env = TestEnv::builder()
        .with_cookbook("app", "1.2.0")
        .with_cookbook_file("chefignore", "[\n")
        .build();

    let err = ExportUseCase::new(env.request()).run().unwrap_err();

    assert!(matches!(err, ExportError::Ignore { .. }), "{err:?}");
    assert!(env.staging_is_clean());
    assert!(!env.destination().exists());
}
