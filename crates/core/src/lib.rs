//! Domain core for the salon appointment availability service.
//!
//! Pure types and calculations only: no I/O, no global clock reads. The
//! current time enters through [`clock::Clock`] and is passed down explicitly.

pub mod availability;
pub mod clock;
pub mod errors;
pub mod models;
