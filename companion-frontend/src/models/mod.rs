pub mod passage;
pub mod view;
