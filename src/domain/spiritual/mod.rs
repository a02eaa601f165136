pub mod dto;
pub mod service;
pub mod zikr;

pub use service::{SpiritualService, SpiritualServiceApi};
pub use zikr::{zikr_for, RECITATION_NOTE};
