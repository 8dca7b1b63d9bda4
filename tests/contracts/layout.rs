//! Contract: the export tree has a fixed shape.

use crate::common::*;
use crate::{assert_exported, assert_not_exported};
use policy_export::ExportUseCase;
use serde_json::json;

/// CONTRACT: every export contains the cookbooks, the policy record, the lock and client.rb
#[test]
fn contract_directory_export_layout() {
    let env = TestEnv::builder().with_cookbook("app", "1.2.0").build();

    ExportUseCase::new(env.request()).run().unwrap();

    assert_exported!(env, "cookbooks/app-1.2.0/recipes/default.rb");
    assert_exported!(env, "cookbooks/app-1.2.0/metadata.json");
    assert_exported!(env, "data_bags/policyfiles/base-local.json");
    assert_exported!(env, "Policyfile.lock.json");
    assert_exported!(env, "client.rb");
}

/// CONTRACT: the exported lock keeps every field of the source lock
#[test]
fn contract_exported_lock_matches_source() {
    let env = TestEnv::builder().with_cookbook("app", "1.2.0").build();

    ExportUseCase::new(env.request()).run().unwrap();

    let source = env.read_json(&env.lock_path());
    let exported = env.read_json(&env.destination().join("Policyfile.lock.json"));
    assert_eq!(exported, source);
}

/// CONTRACT: the policy record embeds the lock with its id set
#[test]
fn contract_policy_record_wraps_lock() {
    let env = TestEnv::builder()
        .with_policy("web", "f00d")
        .with_cookbook("nginx", "10.1.0")
        .build();

    ExportUseCase::new(env.request()).run().unwrap();

    let record = env.read_json(&env.destination().join("data_bags/policyfiles/web-local.json"));
    assert_eq!(record["id"], json!("web-local"));
    assert_eq!(record["data_bag"], json!("policyfiles"));
    assert_eq!(record["name"], json!("data_bag_item_policyfiles_web-local"));
    assert_eq!(record["json_class"], json!("Chef::DataBagItem"));
    assert_eq!(record["raw_data"]["id"], json!("web-local"));
    assert_eq!(record["raw_data"]["revision_id"], json!("f00d"));
    assert_eq!(record["raw_data"]["name"], json!("web"));
}

/// CONTRACT: client.rb points the client at the exported policy
#[test]
fn contract_client_config_names_policy() {
    let env = TestEnv::builder()
        .with_policy("web", "f00d")
        .with_cookbook("nginx", "10.1.0")
        .build();

    ExportUseCase::new(env.request()).run().unwrap();

    let client = std::fs::read_to_string(env.destination().join("client.rb")).unwrap();
    assert!(client.contains("use_policyfile true"));
    assert!(client.contains("deployment_group 'web-local'"));
    assert!(client.contains("policy_document_native_api false"));
}

/// CONTRACT: ignored entries never reach the export, and metadata is pinned
#[test]
fn contract_ignore_rules_and_pinned_metadata() {
    let env = TestEnv::builder()
        .with_cookbook("app", "1.2.0")
        .with_cookbook_file("chefignore", SCRATCH_CHEFIGNORE)
        .with_cookbook_file("notes.tmp", "scratch")
        .with_cookbook_file("metadata.rb", "name 'app'\nversion '0.0.0'\n")
        .with_cookbook_file("files/default/keep.tmp", "nested files are kept")
        .build();

    ExportUseCase::new(env.request()).run().unwrap();

    assert_not_exported!(env, "cookbooks/app-1.2.0/notes.tmp");
    assert_not_exported!(env, "cookbooks/app-1.2.0/metadata.rb");
    assert_exported!(env, "cookbooks/app-1.2.0/files/default/keep.tmp");
    let metadata = env.read_json(&env.destination().join("cookbooks/app-1.2.0/metadata.json"));
    assert_eq!(metadata["version"], json!("1.2.0"));
    assert_eq!(metadata["name"], json!("app"));
}
