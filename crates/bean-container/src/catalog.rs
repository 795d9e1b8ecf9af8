//! 类发现机制
//!
//! Rust 没有运行时类型枚举能力，这里用编译期生成的注册表代替反射：
//! 每个被标记的类型通过 `bean-macros` 生成的 ctor 函数在程序启动时
//! 自注册一条 [`BeanDefinition`]，扫描就是对注册表按模块路径前缀的纯读取

use crate::definition::BeanDefinition;
use dashmap::DashMap;
use once_cell::sync::Lazy;
use std::any::TypeId;

/// 全局 bean 定义注册表
static BEAN_CATALOG: Lazy<DashMap<TypeId, BeanDefinition>> = Lazy::new(DashMap::new);

/// 注册 bean 定义
///
/// 由宏生成的 ctor 注册函数调用，在 main 之前执行。
/// 同一类型的多条注册（例如同时携带多个标记属性）按 `TypeId` 合并：
/// 标记集合与能力集合取并集，构造函数以首次注册为准
pub fn register_bean_definition(definition: BeanDefinition) {
    match BEAN_CATALOG.entry(definition.type_info.id) {
        dashmap::mapref::entry::Entry::Occupied(mut entry) => {
            let existing = entry.get_mut();
            existing.markers.extend(definition.markers);
            existing.capabilities.extend(definition.capabilities);
        }
        dashmap::mapref::entry::Entry::Vacant(entry) => {
            entry.insert(definition);
        }
    }
}

/// 提取指定包下的全部 bean 定义
///
/// 包名即模块路径，匹配包含全部子模块（按 `::` 段边界判断前缀）。
/// 返回 `None` 表示包完全无法解析——注册表中没有任何类型声明在该包下；
/// 这与"解析到了包但没有类型"不同，由调用方以警告处理，不视为致命错误。
/// 纯读取，无副作用，幂等
pub fn extract_package_beans(package: &str) -> Option<Vec<BeanDefinition>> {
    if package.is_empty() {
        return None;
    }

    let matched: Vec<BeanDefinition> = BEAN_CATALOG
        .iter()
        .filter(|entry| module_matches(entry.module_path, package))
        .map(|entry| entry.value().clone())
        .collect();

    if matched.is_empty() {
        None
    } else {
        Some(matched)
    }
}

/// 查询指定类型的 bean 定义
pub fn definition_of(type_id: TypeId) -> Option<BeanDefinition> {
    BEAN_CATALOG.get(&type_id).map(|entry| entry.value().clone())
}

/// 模块路径是否位于指定包下（含包本身）
fn module_matches(module_path: &str, package: &str) -> bool {
    match module_path.strip_prefix(package) {
        Some("") => true,
        Some(rest) => rest.starts_with("::"),
        None => false,
    }
}
