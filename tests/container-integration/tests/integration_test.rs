//! Centralized integration tests for bean-container + bean-macros
//!
//! 通过真实的宏展开覆盖"属性标记 -> 编译期注册 -> 扫描加载 -> 查询"
//! 全链路；需要全新容器状态的用例放在 bean-container 的单元测试里，
//! 这里统一使用进程级单例

use bean_container::{BeanContainer, Marker};
use std::any::TypeId;
use std::sync::{Arc, Once};

/// 测试夹具包，模拟被扫描的业务代码
mod fixtures {
    pub mod services {
        use bean_macros::{bean, repository, service};

        /// 测试用能力接口
        pub trait Greeter: Send + Sync {
            fn greet(&self) -> String;
        }

        #[service(provides(dyn Greeter))]
        #[derive(Debug, Default)]
        pub struct AlphaService;

        impl Greeter for AlphaService {
            fn greet(&self) -> String {
                "hello from alpha".to_string()
            }
        }

        #[bean]
        #[derive(Debug, Default)]
        pub struct BetaHelper;

        #[service]
        #[repository]
        #[derive(Debug, Default)]
        pub struct GammaRepository;
    }

    pub mod web {
        use bean_macros::controller;

        #[controller(constructor = "IndexController::try_new")]
        #[derive(Debug)]
        pub struct IndexController {
            pub route: &'static str,
        }

        impl IndexController {
            pub fn try_new() -> Result<Self, std::io::Error> {
                Ok(Self { route: "/" })
            }
        }
    }
}

use fixtures::services::{AlphaService, BetaHelper, GammaRepository, Greeter};
use fixtures::web::IndexController;

/// 单例容器在本测试二进制内共享，加载只做一次
fn loaded_container() -> &'static BeanContainer {
    static INIT: Once = Once::new();
    let container = BeanContainer::instance();
    INIT.call_once(|| {
        container.load_beans("integration_test::fixtures").unwrap();
    });
    container
}

#[test]
fn test_scan_loads_marked_types_only() {
    let container = loaded_container();

    assert!(container.is_loaded());
    assert!(container.get_bean::<AlphaService>().is_some());
    assert!(container.get_bean::<GammaRepository>().is_some());
    assert!(container.get_bean::<IndexController>().is_some());
    // 无标记类型对扫描可见，但不会被加载
    assert!(container.get_bean::<BetaHelper>().is_none());
    assert_eq!(
        container.loaded_package().as_deref(),
        Some("integration_test::fixtures")
    );
}

#[test]
fn test_classes_by_marker() {
    let container = loaded_container();

    let services: Vec<TypeId> = container
        .classes_by_marker(Marker::Service)
        .into_iter()
        .map(|info| info.id)
        .collect();
    assert!(services.contains(&TypeId::of::<AlphaService>()));
    assert!(services.contains(&TypeId::of::<GammaRepository>()));
    assert!(!services.contains(&TypeId::of::<IndexController>()));

    let repositories: Vec<TypeId> = container
        .classes_by_marker(Marker::Repository)
        .into_iter()
        .map(|info| info.id)
        .collect();
    assert_eq!(repositories, vec![TypeId::of::<GammaRepository>()]);

    let controllers: Vec<TypeId> = container
        .classes_by_marker(Marker::Controller)
        .into_iter()
        .map(|info| info.id)
        .collect();
    assert_eq!(controllers, vec![TypeId::of::<IndexController>()]);
}

#[test]
fn test_multi_marker_type_registered_once() {
    let container = loaded_container();

    let definition =
        bean_container::definition_of(TypeId::of::<GammaRepository>()).expect("definition");
    assert!(definition.has_marker(Marker::Service));
    assert!(definition.has_marker(Marker::Repository));
    assert_eq!(definition.markers.len(), 2);

    // 多标记只对应一个实例
    let first = container.get_bean::<GammaRepository>().unwrap();
    let second = container.get_bean::<GammaRepository>().unwrap();
    assert!(Arc::ptr_eq(&first, &second));
}

#[test]
fn test_classes_by_capability() {
    let container = loaded_container();

    let greeters: Vec<TypeId> = container
        .classes_by_capability::<dyn Greeter>()
        .into_iter()
        .map(|info| info.id)
        .collect();
    assert_eq!(greeters, vec![TypeId::of::<AlphaService>()]);

    let greeter = container.get_bean::<AlphaService>().unwrap();
    assert_eq!(greeter.greet(), "hello from alpha");
}

#[test]
fn test_fallible_constructor_is_used() {
    let container = loaded_container();

    let index = container.get_bean::<IndexController>().unwrap();
    assert_eq!(index.route, "/");
}

#[test]
fn test_redundant_load_is_skipped() {
    let container = loaded_container();

    // 再次加载其他包是刻意的静默跳过，内容与包名保持不变
    container.load_beans("integration_test::elsewhere").unwrap();
    assert!(container.get_bean::<AlphaService>().is_some());
    assert_eq!(
        container.loaded_package().as_deref(),
        Some("integration_test::fixtures")
    );
}

#[test]
fn test_manual_add_remove_roundtrip() {
    /// 未参与扫描的普通类型
    #[derive(Debug)]
    struct ManualBean {
        value: u32,
    }

    let container = loaded_container();
    let instance = Arc::new(ManualBean { value: 7 });

    assert!(container.add_bean(instance.clone()).is_none());
    let fetched = container.get_bean::<ManualBean>().unwrap();
    assert!(Arc::ptr_eq(&instance, &fetched));
    assert_eq!(fetched.value, 7);

    assert!(container.remove_bean::<ManualBean>().is_some());
    assert!(container.get_bean::<ManualBean>().is_none());
    assert!(container.remove_bean::<ManualBean>().is_none());
}

#[test]
fn test_concurrent_load_returns_without_deadlock() {
    let handles: Vec<_> = (0..8)
        .map(|_| {
            std::thread::spawn(|| {
                BeanContainer::instance()
                    .load_beans("integration_test::fixtures")
                    .unwrap();
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let container = loaded_container();
    assert!(container.is_loaded());
    assert!(container.get_bean::<AlphaService>().is_some());
}
