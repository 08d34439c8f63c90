mod record;
mod storage;

pub use record::{ResultRecord, SCHEMA_VERSION};
pub use storage::{default_result_path, load_result, save_result};
