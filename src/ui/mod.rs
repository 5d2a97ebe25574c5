pub mod messages;
pub mod modal;
