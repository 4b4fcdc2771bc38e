//! `watchtower-store`
//!
//! Storage-facing vocabulary: which entity kind an accessor serves
//! ([`AccessorType`]) and the settings bag its backend is built from
//! ([`StoreParams`]). Backend implementations live elsewhere.

pub mod accessor;
pub mod keys;
pub mod params;
pub mod settings;

pub use accessor::AccessorType;
pub use params::StoreParams;
pub use settings::{BackendSettings, params_for};
