//! Color contrast and harmony grading for scraped web page snapshots

pub mod color;
pub mod grading;
pub mod input;
pub mod style;
