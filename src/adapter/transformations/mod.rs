pub mod converter;
pub mod events;
pub mod messages;
pub mod summary;
