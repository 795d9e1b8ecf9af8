//! 错误类型定义

use thiserror::Error;

/// 容器错误类型
#[derive(Error, Debug)]
pub enum BeanError {
    #[error("Bean 实例化失败: {type_name}, 原因: {source}")]
    ConstructionFailed {
        type_name: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("未知的角色标记: {name}")]
    UnknownMarker { name: String },
}

impl BeanError {
    /// 创建实例化失败错误
    pub fn construction_failed(
        type_name: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::ConstructionFailed {
            type_name: type_name.into(),
            source: source.into(),
        }
    }
}

/// 结果类型别名
pub type BeanResult<T> = Result<T, BeanError>;
