pub mod profile_fetch;
pub mod profile_set;
