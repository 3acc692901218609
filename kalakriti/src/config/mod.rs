mod errors;
mod model;
mod storage;

pub(crate) use self::model::AppConfig;
pub(crate) use self::storage::{ConfigLoadStatus, load_config};
