pub mod date_format;
pub mod models;
pub mod shift_logic;
pub mod shift_model;
