use crate::domain::model::{LoadResult, Plant};
use async_trait::async_trait;
use chrono_tz::Tz;

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn timezone(&self) -> Tz;
    fn timeout_seconds(&self) -> u64;
}

/// Seam for anything able to deliver current pollen values, so consumers can
/// swap the live service for a stub.
#[async_trait]
pub trait PollenProvider: Send + Sync {
    async fn load(&self, plants: &[Plant]) -> LoadResult;
    async fn load_all(&self) -> LoadResult;
}
