pub mod intervals;
pub mod constraints;

pub use intervals::{parse_interval, parse_time_intervals, split_for_lunch, ParsedIntervals};
pub use constraints::{load_constraints, parse_constraints, ConstraintRecord, ConstraintSet};
