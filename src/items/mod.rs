mod calculator;

pub use calculator::DisplayItem;
