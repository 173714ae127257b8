pub mod datetime;
pub mod status;
pub mod timespan;

pub use datetime::{date_time_label, time_label};
pub use timespan::TimespanView;
