pub mod bar;
pub mod date_range;
pub mod field;
pub mod request_params;
pub mod series_table;
