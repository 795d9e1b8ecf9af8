//! Bean 定义
//!
//! 编译期注册表中的条目：每个被标记的类型在程序启动时自注册一条定义

use crate::marker::Marker;
use crate::metadata::TypeInfo;
use crate::errors::BeanResult;
use std::any::{Any, TypeId};
use std::collections::HashSet;
use std::sync::Arc;

/// Bean 构造函数类型
///
/// 普通函数指针（`Copy`），可以在 ctor 注册函数中直接携带；
/// 默认实现委托给 `Default::default()`，可替换为可失败的自定义构造
pub type BeanConstructor = fn() -> BeanResult<Arc<dyn Any + Send + Sync>>;

/// Bean 定义
///
/// 对应一个声明类型的注册条目：类型标识、所属模块路径、
/// 标记集合、提供的能力集合以及构造函数
#[derive(Debug, Clone)]
pub struct BeanDefinition {
    /// 类型信息
    pub type_info: TypeInfo,
    /// 声明所在的模块路径（扫描时的"包名"）
    pub module_path: &'static str,
    /// 角色标记集合
    pub markers: HashSet<Marker>,
    /// 提供的能力（trait object 的 TypeId）集合
    pub capabilities: HashSet<TypeId>,
    /// 构造函数
    pub constructor: BeanConstructor,
}

impl BeanDefinition {
    /// 创建新的 bean 定义
    pub fn of<T: 'static>(module_path: &'static str, constructor: BeanConstructor) -> Self {
        Self {
            type_info: TypeInfo::of::<T>(),
            module_path,
            markers: HashSet::new(),
            capabilities: HashSet::new(),
            constructor,
        }
    }

    /// 添加角色标记
    pub fn with_marker(mut self, marker: Marker) -> Self {
        self.markers.insert(marker);
        self
    }

    /// 添加提供的能力
    pub fn with_capability<S: ?Sized + 'static>(mut self) -> Self {
        self.capabilities.insert(TypeId::of::<S>());
        self
    }

    /// 是否携带指定标记
    pub fn has_marker(&self, marker: Marker) -> bool {
        self.markers.contains(&marker)
    }

    /// 是否携带任意标记（决定扫描时是否加载）
    pub fn has_any_marker(&self) -> bool {
        !self.markers.is_empty()
    }

    /// 是否提供指定能力
    pub fn provides(&self, capability: TypeId) -> bool {
        self.capabilities.contains(&capability)
    }
}
