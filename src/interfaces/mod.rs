//! Interfaces between the console logic and the hosting page.
//!
//! Components never reach into the page directly: they write through
//! display surfaces resolved ahead of time, so pages with different
//! markup (or none at all, in tests) can host the same components.
mod page;

pub use self::page::DisplaySurface;
pub use self::page::Element;
pub use self::page::Field;
pub use self::page::IndicatorState;
pub use self::page::PageElements;
pub use self::page::StaticPage;
pub use self::page::SurfaceMap;
