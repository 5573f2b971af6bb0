pub mod chat_service;
pub mod news_service;
pub mod pdf_service;
pub mod position_service;
