//! Repository-style accessors over the two catalog APIs.
//!
//! These are the consumers the networking core serves: each builds a request
//! descriptor, drives it through the [`crate::RestClient`], maps the decoded
//! wire models to domain entities, and reports failures as
//! [`relay_core::AppError`] at its boundary.

mod games;
mod vehicles;

pub use games::{Game, GamesRepository, Genre};
pub use vehicles::{Manufacturer, VehicleRepository, VehicleType};
