//! gas-init: scaffold and configure Google Apps Script projects.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{InitFlags, InitReport, init, init_at};
pub use domain::AppError;
