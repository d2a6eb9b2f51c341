pub mod add;
pub mod catalog;
pub mod discover;
pub mod profile;
pub mod render;
pub mod repl;
