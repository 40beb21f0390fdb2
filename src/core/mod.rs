pub mod classify;
pub mod feed;
pub mod service;

pub use classify::classify;
pub use feed::EXPECTED_DATA_VERSION;
pub use service::PollenService;
