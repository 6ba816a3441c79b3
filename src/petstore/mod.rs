//! Pet-store step library
//!
//! Binds the phrases of `features/petStore.feature` to HTTP calls against
//! the pet-store API and checks the status and body contracts:
//! - create: 200 with the created id and name echoed back
//! - create without name or photos: 405 with an error body
//! - fetch of an unknown id: 404 with "Pet not found"

pub mod client;
pub mod expect;
pub mod ids;
pub mod model;
pub mod names;
mod steps;

pub use client::{ApiResponse, PetStoreClient};
pub use model::{ApiErrorBody, Pet};
pub use names::NameSource;
pub use steps::{PetContext, PetStep, PetStoreSteps};
