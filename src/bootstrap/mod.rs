//! Process bootstrap — things that happen exactly once at startup.

pub mod logger;
