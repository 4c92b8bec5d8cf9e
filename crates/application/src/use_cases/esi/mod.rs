//! ESI endpoint use cases.
//!
//! Each use case performs exactly one request through the shared
//! [`RequestExecutor`](crate::RequestExecutor) and validates its input
//! before anything is sent.

mod affiliation;
mod alliances;
mod corporation_history;

pub use affiliation::{GetAffiliation, check_character_ids};
pub use alliances::ListAlliances;
pub use corporation_history::{GetCorporationHistory, check_character_id};
