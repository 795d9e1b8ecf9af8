//! # Bean Container
//!
//! Simple IoC 的核心 crate，提供最小化的组件注册表（bean 容器）。
//!
//! ## 核心组件
//!
//! - [`Marker`] - 角色标记（Component/Repository/Service/Controller）
//! - [`TypeInfo`] - 类型标识符
//! - [`BeanDefinition`] - 编译期自注册的 bean 定义
//! - [`BeanContainer`] - 进程级单例容器
//!
//! ## 设计原则
//!
//! - 基于 Rust 类型系统的编译时安全
//! - 编译期注册表代替运行时反射
//! - 容器是扁平注册表，不做依赖图解析
//!
//! ## 使用示例
//!
//! ```rust,ignore
//! use bean_container::{BeanContainer, Marker};
//!
//! let container = BeanContainer::instance();
//! container.load_beans("my_app::services")?;
//!
//! let service = container.get_bean::<UserService>().unwrap();
//! let controllers = container.classes_by_marker(Marker::Controller);
//! ```

pub mod catalog;
pub mod container;
pub mod definition;
pub mod errors;
pub mod marker;
pub mod metadata;

pub use catalog::*;
pub use container::*;
pub use definition::*;
pub use errors::*;
pub use marker::*;
pub use metadata::*;
