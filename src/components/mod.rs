//! Stage renderers and app chrome

pub mod app_bar;
pub mod file_upload;
pub mod image_gallery;
pub mod ocr_results;
pub mod processing_stage;
