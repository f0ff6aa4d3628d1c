//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（TextSegmenter、CardRepository）
//! - commands: 命令及处理器
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;

pub use commands::{
    handlers::{
        CreateDeckFromTextHandler, CreateDeckResponse, DeleteDeckHandler, PreviewCardsHandler,
    },
    CreateDeckFromText, DeleteDeck, PreviewCards,
};

pub use error::ApplicationError;

pub use ports::{CardRecord, CardRepositoryPort, RepositoryError, SegmentedText, TextSegmenterPort};
