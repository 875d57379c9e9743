pub mod chart;
pub mod judgment;
pub mod note;
pub mod timeline;
