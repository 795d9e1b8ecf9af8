//! 角色标记定义
//!
//! 封闭的标记集合，标记的存在决定类型是否参与自动注册

use crate::errors::BeanError;

/// 角色标记
///
/// 固定的封闭集合，一个类型可以携带零个、一个或多个标记；
/// 携带任意标记即符合扫描加载条件
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    /// 通用组件
    Component,
    /// 数据访问组件
    Repository,
    /// 业务服务组件
    Service,
    /// 控制器组件
    Controller,
}

impl Marker {
    /// 全部标记
    pub const ALL: [Marker; 4] = [
        Marker::Component,
        Marker::Repository,
        Marker::Service,
        Marker::Controller,
    ];

    /// 标记名称
    pub fn as_str(&self) -> &'static str {
        match self {
            Marker::Component => "component",
            Marker::Repository => "repository",
            Marker::Service => "service",
            Marker::Controller => "controller",
        }
    }
}

impl std::fmt::Display for Marker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// 为 Marker 实现 FromStr trait 以支持字符串解析
impl std::str::FromStr for Marker {
    type Err = BeanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "component" => Ok(Marker::Component),
            "repository" => Ok(Marker::Repository),
            "service" => Ok(Marker::Service),
            "controller" => Ok(Marker::Controller),
            _ => Err(BeanError::UnknownMarker {
                name: s.to_string(),
            }),
        }
    }
}
