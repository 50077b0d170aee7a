pub mod providers;
pub mod quiz_generator;
pub mod quiz_service;
pub mod transcript_service;
