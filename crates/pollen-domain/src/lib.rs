//! Pollen Domain Layer
//!
//! Value objects and trait interfaces shared by every other crate in the
//! workspace. The only external dependency is `chrono` for calendar types.
//!
//! ## Key Concepts
//!
//! - **Category**: one of the five fixed allergen/mold readings tracked per day
//! - **Severity**: ordered qualitative level (Absent < Low < Moderate < High < Very High)
//! - **Reading**: a (category, severity) pair for one report date
//! - **DailyPollenReport**: all readings for one day, at most one per category
//! - **Worst-of reduction**: the maximum-severity reading, used for headlines
//!
//! ## Architecture
//!
//! - No I/O and no HTML parsing here
//! - Tree traversal is expressed as traits (`traits::Document`,
//!   `traits::DocumentNode`); the DOM implementation lives in
//!   `pollen-extractor`

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod category;
pub mod reading;
pub mod report;
pub mod severity;
pub mod traits;
pub mod weather;

// Re-exports for convenience
pub use category::Category;
pub use reading::Reading;
pub use report::DailyPollenReport;
pub use severity::Severity;
pub use weather::WeatherSnapshot;
