pub mod account;
pub mod http;
