//! Visual theme for Date Fact.

mod styles;

pub use styles::GLOBAL_STYLES;
