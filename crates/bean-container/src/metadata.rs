//! 类型元数据定义
//!
//! 提供容器键空间使用的类型标识符

use std::any::TypeId;

/// 类型信息
///
/// 容器对外暴露的类型标识符；相等性以 `TypeId`（声明标识）为准，
/// 而不是结构化比较
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeInfo {
    /// 类型短名称
    pub name: String,
    /// 类型ID
    pub id: TypeId,
    /// 完整模块路径（语义上的全限定名）
    pub module_path: String,
}

impl TypeInfo {
    /// 从具体类型获取类型信息
    pub fn of<T: 'static>() -> Self {
        let full_name = std::any::type_name::<T>();
        Self {
            name: full_name.split("::").last().unwrap_or(full_name).to_string(),
            id: TypeId::of::<T>(),
            module_path: full_name.to_string(),
        }
    }

    /// 从能力类型（trait object）获取类型信息
    pub fn of_capability<T: ?Sized + 'static>() -> Self {
        let full_name = std::any::type_name::<T>();
        Self {
            name: full_name.split("::").last().unwrap_or(full_name).to_string(),
            id: TypeId::of::<T>(),
            module_path: full_name.to_string(),
        }
    }

    /// 获取简短的类型名称（不包含模块路径）
    pub fn short_name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Display for TypeInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.module_path)
    }
}
