//! 应用层错误定义
//!
//! 统一的命令错误类型

use thiserror::Error;
use uuid::Uuid;

use crate::domain::TextProcessingError;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 资源未找到
    #[error("{resource_type} not found: {id}")]
    NotFound {
        resource_type: &'static str,
        id: Uuid,
    },

    /// 验证错误（如长度规则不合法）
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 仓储错误
    #[error("Repository error: {0}")]
    RepositoryError(String),

    /// 内部错误
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl ApplicationError {
    /// 创建 NotFound 错误
    pub fn not_found(resource_type: &'static str, id: Uuid) -> Self {
        Self::NotFound { resource_type, id }
    }

    /// 创建验证错误
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError(message.into())
    }

    /// 创建内部错误
    pub fn internal(message: impl Into<String>) -> Self {
        Self::InternalError(message.into())
    }
}

impl From<TextProcessingError> for ApplicationError {
    fn from(err: TextProcessingError) -> Self {
        match err {
            TextProcessingError::InvalidRules(msg) => Self::ValidationError(msg),
            TextProcessingError::InternalFailure(msg) => {
                Self::InternalError(format!("text processing failed: {}", msg))
            }
        }
    }
}

impl From<crate::application::ports::RepositoryError> for ApplicationError {
    fn from(err: crate::application::ports::RepositoryError) -> Self {
        Self::RepositoryError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_rules_map_to_validation() {
        let err: ApplicationError = TextProcessingError::invalid_rules("bad").into();
        assert!(matches!(err, ApplicationError::ValidationError(ref m) if m == "bad"));
    }

    #[test]
    fn test_internal_failure_keeps_context() {
        let err: ApplicationError = TextProcessingError::internal("boom").into();
        assert_eq!(err.to_string(), "Internal error: text processing failed: boom");
    }
}
