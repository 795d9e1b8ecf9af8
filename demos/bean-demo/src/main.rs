//! # 演示应用程序
//!
//! 演示 Simple IoC 容器的完整使用流程：标记声明、一次性扫描加载、
//! 按类型/标记/能力的查询，以及手工增删

use bean_container::{BeanContainer, Marker};
use std::sync::Arc;
use tracing::{info, warn};

/// 演示用业务包，扫描目标
mod app {
    pub mod services {
        use bean_macros::{repository, service};

        /// 问候能力
        pub trait Greeter: Send + Sync {
            fn greet(&self, who: &str) -> String;
        }

        #[service(provides(dyn Greeter))]
        #[derive(Debug, Default)]
        pub struct GreetingService;

        impl Greeter for GreetingService {
            fn greet(&self, who: &str) -> String {
                format!("你好, {}!", who)
            }
        }

        #[repository]
        #[derive(Debug, Default)]
        pub struct UserRepository {
            users: Vec<String>,
        }

        impl UserRepository {
            pub fn count(&self) -> usize {
                self.users.len()
            }
        }
    }

    pub mod web {
        use bean_macros::controller;

        #[controller(constructor = "IndexController::try_new")]
        #[derive(Debug)]
        pub struct IndexController {
            route: &'static str,
        }

        impl IndexController {
            pub fn try_new() -> Result<Self, std::io::Error> {
                Ok(Self { route: "/" })
            }

            pub fn handle(&self) -> String {
                format!("index page at {}", self.route)
            }
        }
    }
}

use app::services::{Greeter, GreetingService, UserRepository};
use app::web::IndexController;

fn main() -> anyhow::Result<()> {
    // 初始化日志
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("启动 Simple IoC 演示应用");

    let container = BeanContainer::instance();
    container.load_beans("bean_demo::app")?;
    info!(
        "容器加载完成: 包 {:?}, 共 {} 个 bean",
        container.loaded_package(),
        container.size()
    );

    demonstrate_bean_lookup(container);
    demonstrate_marker_query(container);
    demonstrate_capability_query(container);
    demonstrate_manual_mutation(container);

    info!("演示结束");
    Ok(())
}

/// 演示按精确类型获取实例
fn demonstrate_bean_lookup(container: &BeanContainer) {
    info!("演示按类型获取 bean");

    match container.get_bean::<GreetingService>() {
        Some(service) => info!("GreetingService: {}", service.greet("world")),
        None => warn!("GreetingService 未注册"),
    }

    if let Some(repository) = container.get_bean::<UserRepository>() {
        info!("UserRepository 当前用户数: {}", repository.count());
    }
}

/// 演示按标记筛选（web 层分发器就是这样找到控制器的）
fn demonstrate_marker_query(container: &BeanContainer) {
    info!("演示按标记筛选");

    for marker in Marker::ALL {
        let classes = container.classes_by_marker(marker);
        for info in &classes {
            info!("标记 {} -> {}", marker, info);
        }
    }

    // 分发到控制器
    if let Some(index) = container.get_bean::<IndexController>() {
        info!("控制器响应: {}", index.handle());
    }
}

/// 演示按能力（接口）筛选
fn demonstrate_capability_query(container: &BeanContainer) {
    info!("演示按能力筛选");

    for info in container.classes_by_capability::<dyn Greeter>() {
        info!("提供 Greeter 能力的类型: {}", info.short_name());
    }
}

/// 演示加载完成后的手工增删
fn demonstrate_manual_mutation(container: &BeanContainer) {
    info!("演示手工增删 bean");

    #[derive(Debug)]
    struct RuntimeBean;

    container.add_bean(Arc::new(RuntimeBean));
    info!(
        "手工注册 RuntimeBean 后容器大小: {}",
        container.size()
    );

    container.remove_bean::<RuntimeBean>();
    info!("移除 RuntimeBean 后容器大小: {}", container.size());
}
