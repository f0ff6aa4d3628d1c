//! 应用层 - 命令
//!
//! 卡片分段与卡组写操作

mod card_commands;

pub mod handlers;

pub use card_commands::*;
