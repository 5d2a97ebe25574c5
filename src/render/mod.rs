//! View renderers.
//!
//! Every renderer is a pure function of the state (plus a filter, cursor or
//! config value where noted) and returns the text of one view. Rendering the
//! same state twice yields identical output.

pub mod calendar;
pub mod charts;
pub mod dashboard;
pub mod tables;

pub use calendar::{calendar, day_dialog};
pub use charts::{chart_by_month, chart_by_year};
pub use dashboard::{adoption_queue, all, dashboard, donations_mini, dues, events_mini};
pub use tables::{adoptions, donation_stats, donations, events, rescues};
