pub mod chat;
pub mod dashboard;
pub mod health;
