pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::{PollenConfig, DEFAULT_BASE_URL};
pub use crate::core::{classify, PollenService, EXPECTED_DATA_VERSION};
pub use crate::domain::model::{Level, LoadResult, Measurement, Plant, Station, POLLEN_UNIT};
pub use crate::domain::ports::{ConfigProvider, PollenProvider};
pub use crate::utils::error::{PollenError, Result};
