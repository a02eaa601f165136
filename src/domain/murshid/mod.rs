pub mod dto;
pub mod service;

pub use service::{MurshidService, MurshidServiceApi};
