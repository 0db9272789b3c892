pub mod directories;
pub mod failure;
