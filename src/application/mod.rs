pub mod chat;
pub mod forecast;
