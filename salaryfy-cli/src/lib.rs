pub mod app;
pub mod batch;
pub mod logging;
pub mod report;
pub mod settings;
