pub mod actions;
pub mod confirm;
pub mod notice;
pub mod task_store;

pub use actions::TaskActions;
