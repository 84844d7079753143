//! Input processing module
//! Handles file detection, resume loading and saving, and input management

pub mod file_detector;
pub mod document_loader;
pub mod manager;

pub use manager::InputManager;
