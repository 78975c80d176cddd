pub mod clear;
pub mod items;
pub mod list;
pub mod misc;
pub mod share;
pub mod suggest;
pub mod templates;
