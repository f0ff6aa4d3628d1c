//! Memory Layer - In-Memory State Management
//!
//! 卡片仓储的内存实现

mod card_repository;

pub use card_repository::InMemoryCardRepository;
