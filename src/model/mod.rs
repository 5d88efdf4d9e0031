//! Pure data structures: the drink catalog and the [`ActorEntity`](crate::framework::ActorEntity) it feeds.

pub mod inventory;
pub mod recipe;

pub use inventory::*;
pub use recipe::*;
