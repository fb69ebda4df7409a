pub mod event_create;
pub mod event_fetch;
pub mod event_list;
pub mod event_recommended;
