//! Event feed composition: what a user sees on first load and after
//! editing their interests.
//!
//! State transitions live in a pure reducer over [`FeedState`]; the
//! [`FeedController`] executes the effects it emits against the database
//! and the preference store.

mod controller;
mod state;

pub use controller::*;
pub use state::*;
