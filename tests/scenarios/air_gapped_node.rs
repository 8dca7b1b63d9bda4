//! Scenario: Converge a node without a server
//!
//! Journey: An operator exports a policy to a directory, copies it to a
//! node, later bumps a cookbook and re-exports over the old tree.
//!
//! Success Criteria:
//! - First export succeeds into a fresh directory
//! - Re-export without --force is refused and changes nothing
//! - Re-export with --force replaces the old cookbook version

use crate::common::*;

/// SCENARIO: first export, refused re-export, forced re-export
#[test]
fn scenario_export_then_reexport_with_force() {
    let env = TestEnv::builder()
        .with_cookbook("app", "1.2.0")
        .with_cookbook("db", "3.0.1")
        .build();

    let result = env.run(&["export"]);
    assert!(result.success, "First export failed: {}", result.stderr);
    assert!(result.stdout.contains("Export Complete"), "{}", result.stdout);
    assert!(env.path("export/cookbooks/db-3.0.1").is_dir());

    // Bump app and re-export
    let mut lock = env.read_json(&env.lock_path());
    lock["cookbook_locks"]["app"]["version"] = "1.3.0".into();
    env.write_file("Policyfile.lock.json", &lock.to_string());
    env.write_file(
        "cookbooks/app/metadata.json",
        r#"{"name":"app","version":"1.3.0"}"#,
    );

    let before = snapshot_tree(&env.destination());
    let result = env.run(&["export"]);
    assert!(!result.success, "Re-export without --force should fail");
    assert!(
        result.stderr.contains("cookbooks/app-1.2.0"),
        "Conflict should list offending paths:\n{}",
        result.combined_output()
    );
    assert_eq!(snapshot_tree(&env.destination()), before);

    let result = env.run(&["export", "--force"]);
    assert!(result.success, "Forced export failed: {}", result.stderr);
    assert!(!env.path("export/cookbooks/app-1.2.0").exists());
    assert!(env.path("export/cookbooks/app-1.3.0").is_dir());
    assert!(env.staging_is_clean());
}

/// SCENARIO: exporting from a policy file path
#[test]
fn scenario_export_from_policy_file_name() {
    let env = TestEnv::builder().with_cookbook("app", "1.2.0").build();
    env.write_file("Policyfile.rb", "name 'base'\nrun_list 'app'\n");

    let result = env.run(&["Policyfile.rb", "out"]);

    assert!(result.success, "Export failed: {}", result.combined_output());
    assert!(env.path("out/cookbooks/app-1.2.0").is_dir());
}
