pub mod engine;
pub mod token;
pub mod trend;

pub use engine::{
    compute_report, BestDifferential, CourseSummary, HandicapRange, RoundTotals, StatsReport,
    YearSummary,
};
pub use token::{parse_token, AdjustmentType, NormalizedScore};
pub use trend::{classify, Trend, DEFAULT_EPSILON, TREND_WINDOW};
