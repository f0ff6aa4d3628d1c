//! In-Memory Card Repository Implementation

use async_trait::async_trait;
use dashmap::DashMap;
use uuid::Uuid;

use crate::application::ports::{CardRecord, CardRepositoryPort, RepositoryError};

/// 内存卡片仓储
pub struct InMemoryCardRepository {
    decks: DashMap<Uuid, Vec<CardRecord>>,
}

impl InMemoryCardRepository {
    pub fn new() -> Self {
        Self {
            decks: DashMap::new(),
        }
    }

    /// 当前卡组数
    pub fn deck_count(&self) -> usize {
        self.decks.len()
    }
}

impl Default for InMemoryCardRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CardRepositoryPort for InMemoryCardRepository {
    async fn save_cards(&self, deck_id: Uuid, cards: &[CardRecord]) -> Result<(), RepositoryError> {
        if self.decks.contains_key(&deck_id) {
            return Err(RepositoryError::Duplicate(deck_id.to_string()));
        }
        if let Some(card) = cards.iter().find(|c| c.deck_id != deck_id) {
            return Err(RepositoryError::StorageError(format!(
                "card {} belongs to deck {}, not {}",
                card.id, card.deck_id, deck_id
            )));
        }

        let mut sorted = cards.to_vec();
        sorted.sort_by_key(|c| c.index);
        self.decks.insert(deck_id, sorted);
        tracing::debug!(deck_id = %deck_id, total_cards = cards.len(), "Cards saved");
        Ok(())
    }

    async fn find_cards_by_deck(&self, deck_id: Uuid) -> Result<Vec<CardRecord>, RepositoryError> {
        Ok(self
            .decks
            .get(&deck_id)
            .map(|cards| cards.clone())
            .unwrap_or_default())
    }

    async fn delete_deck(&self, deck_id: Uuid) -> Result<(), RepositoryError> {
        self.decks
            .remove(&deck_id)
            .map(|_| {
                tracing::debug!(deck_id = %deck_id, "Deck removed");
            })
            .ok_or_else(|| RepositoryError::NotFound(deck_id.to_string()))
    }
}
