//! Command Handlers

mod card_handlers;

pub use card_handlers::{
    CreateDeckFromTextHandler, CreateDeckResponse, DeleteDeckHandler, PreviewCardsHandler,
};
