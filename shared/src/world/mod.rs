pub mod actor;
pub mod actor_id;
pub mod actor_store;
pub mod diff;
pub mod diff_accumulator;
pub mod error;
pub mod id_allocator;
pub mod observers;
pub mod update;
