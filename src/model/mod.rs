pub mod api;
pub mod embed;
pub mod form;
