//! Domain Services
//!
//! Stateless logic shared by the export pipeline.

pub mod layout;
pub mod policy_data;

pub use layout::{
    ExportLayout, COOKBOOKS_DIR, CONFIG_FILE_NAME, DATA_BAGS_DIR, LOCK_FILE_NAME, POLICY_DATA_BAG,
};
pub use policy_data::{client_config, policy_data_record, policy_item_id, POLICY_GROUP};
