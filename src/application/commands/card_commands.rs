//! Card Commands

use uuid::Uuid;

/// 预览卡片命令（只分段，不保存）
#[derive(Debug, Clone)]
pub struct PreviewCards {
    pub text: String,
}

/// 从文本创建卡组命令
///
/// deck_id 为空时自动生成
#[derive(Debug, Clone)]
pub struct CreateDeckFromText {
    pub deck_id: Option<Uuid>,
    pub text: String,
}

/// 删除卡组命令
#[derive(Debug, Clone)]
pub struct DeleteDeck {
    pub deck_id: Uuid,
}
