//! Profiles Entity Module

pub mod profile;

pub use profile::{Profile, ProfileWithOwner};
