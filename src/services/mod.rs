//! Service layer: SQL and object-storage operations behind the handlers.

pub mod chat_service;
pub mod directory_service;
pub mod message_service;
pub mod storage;

pub use chat_service::ChatService;
pub use directory_service::DirectoryService;
pub use message_service::MessageService;
