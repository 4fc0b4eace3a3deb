//! Entity definitions for the upload subsystem tables

pub mod upload;
pub mod upload_download;
pub mod upload_view;

pub use upload::FileType;
