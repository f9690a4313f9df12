//! Preferences store access.

mod mapper;
mod service;

pub use service::SettingsService;
