pub mod email_service;
pub mod pricing;
pub mod storage_service;
