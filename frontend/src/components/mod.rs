pub mod articles;
pub mod modal;
