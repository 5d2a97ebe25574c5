//! Record types for the six dashboard collections.

pub mod adoption;
pub mod calendar_mark;
pub mod donation;
pub mod due;
pub mod event;
pub mod id;
pub mod rescue;

pub use adoption::{Adoption, AdoptionFilter, AdoptionStatus};
pub use calendar_mark::{CalendarMark, MarkType};
pub use donation::{Channel, Donation};
pub use due::Due;
pub use event::Event;
pub use rescue::{Rescue, RescueStatus};

/// A record that lives in an id-keyed collection.
pub trait Record {
    /// Human readable kind, used in error messages and audit rows.
    const KIND: &'static str;

    fn id(&self) -> &str;
}
