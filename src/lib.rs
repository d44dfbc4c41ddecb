pub mod collision;
pub mod compute;
pub mod display;
pub mod entities;
pub mod error;
pub mod input;
pub mod resources;
pub mod settings;
