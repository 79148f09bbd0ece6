// Shared services
// Browser storage behind a target-independent API
pub mod storage_service;
