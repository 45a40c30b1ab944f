//! Concrete provider backends. One module per backend.

pub mod openai;
pub mod scripted;
