//! Generated policy artifacts
//!
//! Builds the policy data record and the client configuration stub. Both
//! are pure functions of the lock; nothing here touches the filesystem.

use serde_json::{json, Value};

/// Policy group every standalone export belongs to
pub const POLICY_GROUP: &str = "local";

/// Prefix the server uses for data bag item names
const DATA_BAG_ITEM_PREFIX: &str = "data_bag_item";

/// Class tag legacy readers use to recognize the record
const DATA_BAG_ITEM_CLASS: &str = "Chef::DataBagItem";

/// Item id of the policy record: `<policy-name>-<policy-group>`
pub fn policy_item_id(policy_name: &str) -> String {
    format!("{policy_name}-{POLICY_GROUP}")
}

/// Build the data bag item holding the lock document.
///
/// `lock_document` is the serialized lock; a copy of it becomes `raw_data`
/// with its own `id` set to the item id.
pub fn policy_data_record(policy_name: &str, lock_document: &Value) -> Value {
    let item_id = policy_item_id(policy_name);

    let mut raw_data = lock_document.clone();
    if let Value::Object(map) = &mut raw_data {
        map.insert("id".to_string(), Value::String(item_id.clone()));
    }

    json!({
        "id": item_id,
        "name": format!("{DATA_BAG_ITEM_PREFIX}_{}_{item_id}", super::layout::POLICY_DATA_BAG),
        "data_bag": super::layout::POLICY_DATA_BAG,
        "json_class": DATA_BAG_ITEM_CLASS,
        "raw_data": raw_data,
    })
}

/// Render the client configuration that points a local run at the export
pub fn client_config(policy_name: &str) -> String {
    format!(
        r#"### Client Configuration ###
# The settings in this file will configure the client to apply the exported
# policy in this directory. To use it, run:
#
# chef-client -z
#

use_policyfile true
deployment_group '{policy_name}-{POLICY_GROUP}'
policy_document_native_api false
"#
    )
}
