//! Scenario: Publish an export as a release artifact
//!
//! Journey: CI exports the same lock twice (e.g. on two runners) and
//! compares the archives before publishing.
//!
//! Success Criteria:
//! - The archive is named `<policy>-<revision>.tgz`
//! - Both archives are byte-identical
//! - Existing files next to the archive are untouched

use crate::common::*;
use flate2::read::GzDecoder;

fn entry_names(archive: &std::path::Path) -> Vec<String> {
    let file = std::fs::File::open(archive).unwrap();
    let mut archive = tar::Archive::new(GzDecoder::new(file));
    archive
        .entries()
        .unwrap()
        .map(|e| {
            e.unwrap()
                .path()
                .unwrap()
                .to_string_lossy()
                .trim_end_matches('/')
                .to_string()
        })
        .collect()
}

/// SCENARIO: two archive exports are identical
#[test]
fn scenario_archive_is_reproducible() {
    let env = TestEnv::builder()
        .with_policy("web", "0f1e2d")
        .with_cookbook("nginx", "10.1.0")
        .with_cookbook_file("templates/nginx.conf.erb", "worker_processes 2;\n")
        .build();

    let first = env.run(&["Policyfile.lock.json", "dist/a", "--archive"]);
    let second = env.run(&["Policyfile.lock.json", "dist/b", "-a"]);
    assert!(first.success, "{}", first.stderr);
    assert!(second.success, "{}", second.stderr);

    let a = std::fs::read(env.path("dist/a/web-0f1e2d.tgz")).unwrap();
    let b = std::fs::read(env.path("dist/b/web-0f1e2d.tgz")).unwrap();
    assert_eq!(a, b, "archives should be byte-identical");

    let names = entry_names(&env.path("dist/a/web-0f1e2d.tgz"));
    assert!(names.contains(&"Policyfile.lock.json".to_string()));
    assert!(names.contains(&"client.rb".to_string()));
    assert!(names.contains(&"data_bags/policyfiles/web-local.json".to_string()));
    assert!(names.contains(&"cookbooks/nginx-10.1.0/templates/nginx.conf.erb".to_string()));
}

/// SCENARIO: archive lands beside an earlier directory export
#[test]
fn scenario_archive_beside_existing_export() {
    let env = TestEnv::builder().with_cookbook("app", "1.2.0").build();
    assert!(env.run(&["export"]).success);

    let result = env.run(&["export", "--archive"]);

    assert!(result.success, "{}", result.stderr);
    assert!(env.path("export/base-abc123.tgz").is_file());
    assert!(env.path("export/cookbooks/app-1.2.0").is_dir());
}
