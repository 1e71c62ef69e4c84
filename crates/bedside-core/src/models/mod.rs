pub mod editorial;
pub mod input;
