pub mod app;
pub mod gui;
pub mod options;
pub mod util;
