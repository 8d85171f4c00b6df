pub mod app;
pub mod edit;
pub mod handlers;
pub mod navigation;
pub mod selection;
pub mod ui;
