pub mod component;
pub mod renderable;
