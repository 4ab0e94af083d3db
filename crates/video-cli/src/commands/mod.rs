pub mod list;
pub mod output;
pub mod retrieve;
pub mod upload;
