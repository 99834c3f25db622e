pub mod contract_service;
pub mod error;
