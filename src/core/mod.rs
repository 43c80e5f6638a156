//! Aggregates the "business logic" layer: reshaping, ordering, config.

pub mod color;
pub mod config;
pub mod constants;
pub mod data;
pub mod error;
pub mod ordering;

// re-export frequently-used items for convenience
pub use config::{ReportConfig, ReportConfigBuilder};
pub use constants::{APPEARANCE_TYPES, EXCLUDED_APPEARANCE_TYPES, NAME_COLUMN, VOLUME_COLUMNS};
pub use data::{AppearanceRecord, AppearanceTable, WideRow};
pub use error::{AppearanceError, ConfigError, MissingColumnError};
pub use ordering::{AppearanceRank, ChartView, DisplayOrder};
