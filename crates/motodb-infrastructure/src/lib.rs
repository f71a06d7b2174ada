//! File-system backed services for motodb: paths, config, secrets and the
//! catalog data set.

pub mod catalog_source;
pub mod config_service;
pub mod paths;
pub mod secret_service;

pub use crate::catalog_source::JsonCatalogSource;
pub use crate::config_service::ConfigService;
pub use crate::paths::MotodbPaths;
pub use crate::secret_service::SecretServiceImpl;
