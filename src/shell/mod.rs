// Composition root for the job board.
//
// Responsibilities
// - Read config from the environment.
// - Instantiate the in-memory stores and wire them into services.

pub mod config;
pub mod state;
