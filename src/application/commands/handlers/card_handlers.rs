//! Card Command Handlers

use std::sync::Arc;
use uuid::Uuid;

use crate::application::commands::{CreateDeckFromText, DeleteDeck, PreviewCards};
use crate::application::error::ApplicationError;
use crate::application::ports::{CardRecord, CardRepositoryPort, SegmentedText, TextSegmenterPort};
use crate::domain::{LengthRules, TextProcessingError};

/// 在阻塞线程池上运行分段，避免占用异步工作线程
///
/// 分段任务 panic 或被取消时返回 InternalError
async fn segment_off_thread(
    segmenter: Arc<dyn TextSegmenterPort>,
    text: String,
    rules: LengthRules,
) -> Result<Vec<SegmentedText>, ApplicationError> {
    let cards = tokio::task::spawn_blocking(move || segmenter.segment(&text, &rules))
        .await
        .map_err(|e| {
            ApplicationError::from(TextProcessingError::internal(format!(
                "segmentation task failed: {}",
                e
            )))
        })??;
    Ok(cards)
}

// ============================================================================
// PreviewCards
// ============================================================================

/// PreviewCards Handler - 返回卡片列表供用户预览/编辑
pub struct PreviewCardsHandler {
    segmenter: Arc<dyn TextSegmenterPort>,
    rules: LengthRules,
}

impl PreviewCardsHandler {
    pub fn new(segmenter: Arc<dyn TextSegmenterPort>, rules: LengthRules) -> Self {
        Self { segmenter, rules }
    }

    pub async fn handle(&self, command: PreviewCards) -> Result<Vec<SegmentedText>, ApplicationError> {
        let input_chars = command.text.chars().count();
        let cards = segment_off_thread(self.segmenter.clone(), command.text, self.rules).await?;

        tracing::info!(
            input_chars = input_chars,
            total_cards = cards.len(),
            "Cards previewed"
        );

        Ok(cards)
    }
}

// ============================================================================
// CreateDeckFromText
// ============================================================================

/// 创建卡组响应
#[derive(Debug, Clone)]
pub struct CreateDeckResponse {
    pub deck_id: Uuid,
    pub total_cards: usize,
}

/// CreateDeckFromText Handler - 分段并保存为编号卡片
pub struct CreateDeckFromTextHandler {
    segmenter: Arc<dyn TextSegmenterPort>,
    card_repo: Arc<dyn CardRepositoryPort>,
    rules: LengthRules,
}

impl CreateDeckFromTextHandler {
    pub fn new(
        segmenter: Arc<dyn TextSegmenterPort>,
        card_repo: Arc<dyn CardRepositoryPort>,
        rules: LengthRules,
    ) -> Self {
        Self {
            segmenter,
            card_repo,
            rules,
        }
    }

    pub async fn handle(&self, command: CreateDeckFromText) -> Result<CreateDeckResponse, ApplicationError> {
        let deck_id = command.deck_id.unwrap_or_else(Uuid::new_v4);

        let cards = segment_off_thread(self.segmenter.clone(), command.text, self.rules).await?;
        let total_cards = cards.len();

        // 空卡组无法通过 DeleteDeck 删除，也会占用 deck_id
        if cards.is_empty() {
            return Err(ApplicationError::validation("text contains no cards"));
        }

        let records: Vec<CardRecord> = cards
            .into_iter()
            .map(|card| CardRecord {
                id: Uuid::new_v4(),
                deck_id,
                index: card.index,
                content: card.content,
                char_count: card.char_count,
            })
            .collect();

        self.card_repo.save_cards(deck_id, &records).await?;

        tracing::info!(
            deck_id = %deck_id,
            total_cards = total_cards,
            "Deck created"
        );

        Ok(CreateDeckResponse {
            deck_id,
            total_cards,
        })
    }
}

// ============================================================================
// DeleteDeck
// ============================================================================

/// DeleteDeck Handler
pub struct DeleteDeckHandler {
    card_repo: Arc<dyn CardRepositoryPort>,
}

impl DeleteDeckHandler {
    pub fn new(card_repo: Arc<dyn CardRepositoryPort>) -> Self {
        Self { card_repo }
    }

    pub async fn handle(&self, command: DeleteDeck) -> Result<(), ApplicationError> {
        let deck_id = command.deck_id;

        let cards = self.card_repo.find_cards_by_deck(deck_id).await?;
        if cards.is_empty() {
            return Err(ApplicationError::not_found("Deck", deck_id));
        }

        self.card_repo.delete_deck(deck_id).await?;

        tracing::info!(deck_id = %deck_id, total_cards = cards.len(), "Deck deleted");

        Ok(())
    }
}
