//! # Bean Macros
//!
//! 这个 crate 提供了用于编译期 bean 自注册的属性宏。
//!
//! Rust 无法在运行时枚举包下的类型，因此每个标记属性都会展开出一个
//! 在程序启动时执行的注册函数，把类型的 [`BeanDefinition`] 写入
//! `bean-container` 的全局注册表；之后的包扫描只是对注册表的纯读取。
//!
//! ## 核心宏
//!
//! - [`component`] / [`repository`] / [`service`] / [`controller`] -
//!   四种角色标记，携带任意一种即参与扫描加载
//! - [`bean`] - 无标记的类型声明，仅让类型在扫描中可见
//!
//! ## 参数
//!
//! - `constructor = "path"` - 可失败构造函数，返回 `Result<Self, E>`；
//!   缺省时要求类型实现 `Default`
//! - `provides(dyn Trait, ...)` - 声明该类型可按哪些能力（父类型/接口）
//!   被筛选到
//!
//! ## 使用示例
//!
//! ```rust,ignore
//! use bean_macros::{controller, service};
//!
//! #[service(provides(dyn UserLookup))]
//! #[derive(Default)]
//! pub struct UserService;
//!
//! #[controller(constructor = "UserController::try_new")]
//! pub struct UserController { /* 字段 */ }
//! ```
//!
//! [`BeanDefinition`]: https://docs.rs/bean-container

use proc_macro::TokenStream;

mod bean;

/// 无标记的类型声明宏
///
/// 只把类型注册进扫描表，不携带任何角色标记，扫描加载时会被跳过
#[proc_macro_attribute]
pub fn bean(args: TokenStream, input: TokenStream) -> TokenStream {
    bean::bean_impl(args, input, None)
}

/// 通用组件标记宏
#[proc_macro_attribute]
pub fn component(args: TokenStream, input: TokenStream) -> TokenStream {
    bean::bean_impl(args, input, Some(bean::MarkerKind::Component))
}

/// 数据访问组件标记宏
#[proc_macro_attribute]
pub fn repository(args: TokenStream, input: TokenStream) -> TokenStream {
    bean::bean_impl(args, input, Some(bean::MarkerKind::Repository))
}

/// 业务服务组件标记宏
#[proc_macro_attribute]
pub fn service(args: TokenStream, input: TokenStream) -> TokenStream {
    bean::bean_impl(args, input, Some(bean::MarkerKind::Service))
}

/// 控制器组件标记宏
#[proc_macro_attribute]
pub fn controller(args: TokenStream, input: TokenStream) -> TokenStream {
    bean::bean_impl(args, input, Some(bean::MarkerKind::Controller))
}
