//! Core modules for SpamSense

pub mod api;
pub mod intent;
pub mod phone;
pub mod rpc;
pub mod rules;
pub mod server;
pub mod stdio;

pub use api::{create_router, run_server};
pub use intent::{ClassifyInput, TextClassifier};
pub use phone::{normalize_number, PhoneAnalyzer};
pub use server::{SpamsenseServer, TOOL_CHECK_PHONE, TOOL_DETECT_CALL_INTENT};
pub use stdio::run_stdio;
