//! Repository Ports - 出站端口
//!
//! 卡片持久化的抽象接口，存储方案由调用方决定

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

/// Repository 错误
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Duplicate entity: {0}")]
    Duplicate(String),

    #[error("Storage error: {0}")]
    StorageError(String),
}

/// 卡片实体（用于持久化）
///
/// index 为卡片在卡组内从 0 开始的编号
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardRecord {
    pub id: Uuid,
    pub deck_id: Uuid,
    pub index: usize,
    pub content: String,
    pub char_count: usize,
}

/// Card Repository Port
#[async_trait]
pub trait CardRepositoryPort: Send + Sync {
    /// 保存卡组的全部卡片（同一卡组重复保存返回 Duplicate）
    async fn save_cards(&self, deck_id: Uuid, cards: &[CardRecord]) -> Result<(), RepositoryError>;

    /// 按编号顺序获取卡组的卡片
    async fn find_cards_by_deck(&self, deck_id: Uuid) -> Result<Vec<CardRecord>, RepositoryError>;

    /// 删除卡组
    async fn delete_deck(&self, deck_id: Uuid) -> Result<(), RepositoryError>;
}
