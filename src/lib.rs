//! Statistics over daily calorie intake: the largest product of two
//! consecutive days, and the days on which intake went up.

pub mod analysis;
pub mod error;
pub mod input;
pub mod ordered_set;
pub mod report;
