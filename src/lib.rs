pub mod args;
pub mod error;
pub mod fetch;
pub mod providers;
pub mod render;
pub mod report;
pub mod utils;

pub use args::Args;
pub use error::ProviderError;
pub use fetch::{fetch, SOURCE_URL};
pub use providers::{parse_and_group, parent_domain, ProviderGroups, SortedProviders, StunEntry};
pub use report::{collect_providers, run};
