pub mod decompose;
pub mod menu;
