//! Brand catalog and project persistence.
//!
//! - **types** — `Brand`, `Project`, `NewProject` wire/storage structs.
//! - **store** — SQLite-backed store (brands are seeded reference data,
//!   projects are user work-in-progress).
//! - **seed** — embedded brand seed applied on first open.

mod seed;
mod store;
mod types;

pub use store::BrandStore;
pub use types::{Brand, NewProject, Project};
