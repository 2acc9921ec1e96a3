pub mod a001_sim_card_supplier;
pub mod a002_sim_card_type;
pub mod a003_number_level;
pub mod common;
