//! Port implementations backed by a scenario file.

mod package_manager;
mod policy;
mod scorer;

pub use package_manager::ScenarioPackageManager;
pub use policy::ScenarioPolicy;
pub use scorer::TableScorer;
