//! Components implementing the console display logic.
mod overview;

pub use self::overview::resolve_surfaces;
pub use self::overview::AdminOverview;
pub use self::overview::Config as OverviewConfig;
