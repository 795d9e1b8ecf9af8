//! Bean 容器
//!
//! 进程级单例的扁平注册表：一次性扫描加载 + 增删改查 + 过滤查询

use crate::catalog::{definition_of, extract_package_beans};
use crate::errors::BeanResult;
use crate::marker::Marker;
use crate::metadata::TypeInfo;
use dashmap::DashMap;
use once_cell::sync::Lazy;
use parking_lot::Mutex;
use std::any::{Any, TypeId};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// 全局容器实例
static CONTAINER: Lazy<BeanContainer> = Lazy::new(BeanContainer::new);

/// 容器中的一条注册
#[derive(Clone)]
struct BeanEntry {
    /// 类型信息
    type_info: TypeInfo,
    /// 实例（容器独占持有，读取方获得共享引用）
    instance: Arc<dyn Any + Send + Sync>,
}

/// 加载状态
///
/// loaded 在容器生命周期内只会 false→true 一次
#[derive(Debug, Default)]
struct LoadState {
    loaded: bool,
    package: Option<String>,
}

/// Bean 容器
///
/// 底层使用并发安全的关联结构，单个操作无需外部加锁；
/// 只有 [`BeanContainer::load_beans`] 整体作为临界区互斥执行
pub struct BeanContainer {
    /// 存放所有标记类型实例的并发 Map
    beans: DashMap<TypeId, BeanEntry>,
    /// 加载状态（load_beans 的互斥锁）
    load_state: Mutex<LoadState>,
}

impl BeanContainer {
    fn new() -> Self {
        Self {
            beans: DashMap::new(),
            load_state: Mutex::new(LoadState::default()),
        }
    }

    /// 获取进程级容器单例
    ///
    /// 首次访问时惰性创建，并发首次访问下不会出现重复构造
    pub fn instance() -> &'static BeanContainer {
        &CONTAINER
    }

    /// 扫描加载指定包下的全部标记类型
    ///
    /// 整个扫描-过滤-实例化-置位过程在同一临界区内执行，并发调用
    /// 只会有一次实际加载，其余调用观察到已加载状态后直接返回。
    ///
    /// - 已加载：警告并跳过，不是错误
    /// - 包无法解析：警告，加载周期照常完成
    /// - 实例化失败：对本次调用致命，错误向上传播，容器处于部分
    ///   加载状态且 `is_loaded()` 保持 false
    pub fn load_beans(&self, package: &str) -> BeanResult<()> {
        let mut state = self.load_state.lock();
        if state.loaded {
            warn!("容器已完成加载，忽略重复加载请求: {}", package);
            return Ok(());
        }

        debug!("开始扫描包: {}", package);
        match extract_package_beans(package) {
            Some(definitions) => {
                let mut loaded_count = 0usize;
                for definition in &definitions {
                    if !definition.has_any_marker() {
                        continue;
                    }
                    // 标记集合已在注册表按类型合并，多标记类型也只构造一次
                    let instance = (definition.constructor)()?;
                    self.beans.insert(
                        definition.type_info.id,
                        BeanEntry {
                            type_info: definition.type_info.clone(),
                            instance,
                        },
                    );
                    loaded_count += 1;
                }
                info!(
                    "扫描包 {} 完成，发现 {} 个类型，加载 {} 个 bean",
                    package,
                    definitions.len(),
                    loaded_count
                );
            }
            None => {
                warn!("包 {} 无法解析，未发现任何类型", package);
            }
        }

        state.loaded = true;
        state.package = Some(package.to_string());
        Ok(())
    }

    /// 新增 bean 实例（类型安全入口）
    ///
    /// 无条件覆盖写入，加载前后均合法；返回该类型之前的实例
    pub fn add_bean<T: Any + Send + Sync>(
        &self,
        instance: Arc<T>,
    ) -> Option<Arc<dyn Any + Send + Sync>> {
        self.add_bean_by_info(TypeInfo::of::<T>(), instance)
    }

    /// 新增 bean 实例（原始入口）
    ///
    /// 允许把同一实例挂到多个类型标识下，此时 [`BeanContainer::beans`]
    /// 按集合语义折叠为一个元素
    pub fn add_bean_by_info(
        &self,
        type_info: TypeInfo,
        instance: Arc<dyn Any + Send + Sync>,
    ) -> Option<Arc<dyn Any + Send + Sync>> {
        let id = type_info.id;
        self.beans
            .insert(id, BeanEntry { type_info, instance })
            .map(|previous| previous.instance)
    }

    /// 删除 bean 实例，返回被删除的实例；不存在时返回 None，不是错误
    pub fn remove_bean<T: Any + Send + Sync>(&self) -> Option<Arc<dyn Any + Send + Sync>> {
        self.remove_bean_by_id(&TypeId::of::<T>())
    }

    /// 按类型ID删除 bean 实例
    pub fn remove_bean_by_id(&self, type_id: &TypeId) -> Option<Arc<dyn Any + Send + Sync>> {
        self.beans.remove(type_id).map(|(_, entry)| entry.instance)
    }

    /// 获取 bean 实例（精确类型匹配）
    pub fn get_bean<T: Any + Send + Sync>(&self) -> Option<Arc<T>> {
        let entry = self.beans.get(&TypeId::of::<T>())?;
        entry.instance.clone().downcast::<T>().ok()
    }

    /// 按类型ID获取 bean 实例，向期望类型的转换由调用方负责
    pub fn get_bean_by_id(&self, type_id: &TypeId) -> Option<Arc<dyn Any + Send + Sync>> {
        self.beans.get(type_id).map(|entry| entry.instance.clone())
    }

    /// 获取容器中管理的所有类型标识（快照，不暴露内部状态）
    pub fn classes(&self) -> Vec<TypeInfo> {
        self.beans
            .iter()
            .map(|entry| entry.value().type_info.clone())
            .collect()
    }

    /// 获取容器中管理的所有实例
    ///
    /// 按实例标识去重：两个类型标识指向同一实例时只出现一次
    pub fn beans(&self) -> Vec<Arc<dyn Any + Send + Sync>> {
        let mut seen: HashSet<*const ()> = HashSet::new();
        let mut result = Vec::new();
        for entry in self.beans.iter() {
            let identity = Arc::as_ptr(&entry.value().instance) as *const ();
            if seen.insert(identity) {
                result.push(entry.value().instance.clone());
            }
        }
        result
    }

    /// 根据标记筛选类型标识集合（纯过滤，无副作用）
    pub fn classes_by_marker(&self, marker: Marker) -> Vec<TypeInfo> {
        self.beans
            .iter()
            .filter(|entry| {
                definition_of(*entry.key()).is_some_and(|def| def.has_marker(marker))
            })
            .map(|entry| entry.value().type_info.clone())
            .collect()
    }

    /// 根据能力（父类型/接口）筛选类型标识集合，不包括能力类型本身
    pub fn classes_by_capability<S: ?Sized + 'static>(&self) -> Vec<TypeInfo> {
        let capability = TypeId::of::<S>();
        self.beans
            .iter()
            .filter(|entry| *entry.key() != capability)
            .filter(|entry| {
                definition_of(*entry.key()).is_some_and(|def| def.provides(capability))
            })
            .map(|entry| entry.value().type_info.clone())
            .collect()
    }

    /// Bean 实例数量
    pub fn size(&self) -> usize {
        self.beans.len()
    }

    /// 容器是否已完成加载
    pub fn is_loaded(&self) -> bool {
        self.load_state.lock().loaded
    }

    /// 完成加载时使用的包名
    pub fn loaded_package(&self) -> Option<String> {
        self.load_state.lock().package.clone()
    }
}
