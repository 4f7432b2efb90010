pub mod filters;
pub mod item;
pub mod route;
