pub mod evaluation;
pub mod pitch;
pub mod valuation;
