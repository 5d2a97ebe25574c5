pub mod adoption;
pub mod backup;
pub mod calendar;
pub mod collection;
pub mod donation;
pub mod due;
pub mod event;
pub mod log;
pub mod rescue;
pub mod seed;
pub mod session;
pub mod state;
pub mod stats;
pub mod transfer;
pub mod validate;

pub use session::Session;
pub use state::AppState;
