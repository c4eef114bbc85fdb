pub mod create;
pub mod form_state;
pub mod gateway;
