//! Application use cases (business logic orchestration).

pub mod esi;

pub use esi::{
    GetAffiliation, GetCorporationHistory, ListAlliances, check_character_id, check_character_ids,
};
