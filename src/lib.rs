pub mod battle;
pub mod campaign;
pub mod config;
pub mod event;
pub mod input;
pub mod narrator;
pub mod policy;

pub use combat;
pub use error;
pub use hero;
