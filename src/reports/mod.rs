//! Reports for Poupe
//!
//! Pure computations over the ledger: month totals and savings rate, the
//! yearly series, the category breakdown, the income/expense distribution and
//! the month insights.

pub mod categories;
pub mod distribution;
pub mod insights;
pub mod totals;
pub mod yearly;

pub use categories::{CategoryBreakdown, CategoryEntry, CATEGORY_LIMIT};
pub use distribution::{Distribution, Slice};
pub use insights::{MonthInsights, SavingsRating};
pub use totals::Totals;
pub use yearly::{YearlyPoint, YearlySeries};
