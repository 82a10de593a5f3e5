//! Core domain types and contracts for the usuarios service.
//!
//! Pure data only: entity and payload types, field validation, the
//! repository trait, and the storage error taxonomy with its HTTP status
//! mapping. No I/O happens in this crate.
//!
//! Note: passwords are stored and carried in clear text, exactly as the
//! service's database file has always held them. Hashing is out of scope
//! for this crate; see [`user::UserRecord`] for the exposure rules.

pub mod storage;
pub mod user;
