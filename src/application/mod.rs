// Application layer - Use cases over capture data
pub mod capture_repository;
pub mod frame_time_service;
pub mod series_composer;
