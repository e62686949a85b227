pub mod async_actions;
pub mod input;
