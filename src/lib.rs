//! Cardify - 阅读练习卡片分段引擎
//!
//! 架构设计: Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - LengthRules: 长度规则（MIN / TARGET / MAX）
//! - text_segmenter: 边界分段 -> 上限约束 -> 下限合并
//!
//! 应用层 (application/):
//! - Ports: TextSegmenter, CardRepository
//! - Commands: PreviewCards, CreateDeckFromText, DeleteDeck
//!
//! 基础设施层 (infrastructure/):
//! - Adapters: RuleBasedTextSegmenter
//! - Memory: InMemoryCardRepository

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
pub use domain::{process, LengthRules, TextProcessingError};
