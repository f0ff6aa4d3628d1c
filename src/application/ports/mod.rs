//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod repositories;
mod text_segmenter;

pub use repositories::{CardRecord, CardRepositoryPort, RepositoryError};
pub use text_segmenter::{SegmentedText, TextSegmenterPort};
