pub mod display;
pub mod menu;
pub mod reader;
pub mod writer;
