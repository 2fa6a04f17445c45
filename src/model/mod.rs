//! Data models exchanged with the services.
//!
//! `db` aliases the generated entity models, the remaining modules hold the request and
//! response shapes that services accept and return. Response types derive `Serialize` so the
//! HTTP layer can hand them straight to the client.

pub mod act;
pub mod db;
pub mod estimate;
pub mod legacy;
pub mod projection;
pub mod version;
