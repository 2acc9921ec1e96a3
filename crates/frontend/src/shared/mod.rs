pub mod api_utils;
pub mod config;
pub mod confirm;
pub mod data_table;
pub mod export;
pub mod icons;
pub mod modal_frame;
pub mod notify;
