//! Bean 注册宏实现

use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use syn::{
    parse::Parse, parse::ParseStream, parse_macro_input, punctuated::Punctuated, Expr, Ident,
    ItemStruct, Lit, Meta, Result, Token, Type,
};

/// 角色标记种类
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind {
    Component,
    Repository,
    Service,
    Controller,
}

impl MarkerKind {
    /// 标记名称，用于生成唯一的注册函数名
    fn as_str(self) -> &'static str {
        match self {
            MarkerKind::Component => "component",
            MarkerKind::Repository => "repository",
            MarkerKind::Service => "service",
            MarkerKind::Controller => "controller",
        }
    }

    /// 对应的 `bean_container::Marker` 变体
    fn variant(self) -> proc_macro2::TokenStream {
        match self {
            MarkerKind::Component => quote! { bean_container::Marker::Component },
            MarkerKind::Repository => quote! { bean_container::Marker::Repository },
            MarkerKind::Service => quote! { bean_container::Marker::Service },
            MarkerKind::Controller => quote! { bean_container::Marker::Controller },
        }
    }
}

/// 标记属性参数
#[derive(Debug, Clone, Default)]
pub struct BeanArgs {
    /// 可失败构造函数路径；缺省时使用 `Default::default()`
    pub constructor: Option<syn::Path>,
    /// 声明提供的能力类型列表
    pub provides: Vec<Type>,
}

impl Parse for BeanArgs {
    fn parse(input: ParseStream<'_>) -> Result<Self> {
        let mut args = BeanArgs::default();

        let parsed = Punctuated::<Meta, Token![,]>::parse_terminated(input)?;

        for meta in parsed {
            match meta {
                Meta::NameValue(nv) => {
                    if nv.path.is_ident("constructor") {
                        if let Expr::Lit(expr_lit) = nv.value {
                            if let Lit::Str(lit_str) = expr_lit.lit {
                                args.constructor = Some(lit_str.parse()?);
                            }
                        }
                    }
                }
                Meta::List(list) => {
                    if list.path.is_ident("provides") {
                        let types = list
                            .parse_args_with(Punctuated::<Type, Token![,]>::parse_terminated)?;
                        args.provides.extend(types);
                    }
                }
                _ => {}
            }
        }

        Ok(args)
    }
}

/// 实现标记属性宏
///
/// `marker` 为 `None` 时对应无标记的 `#[bean]` 声明
pub fn bean_impl(args: TokenStream, input: TokenStream, marker: Option<MarkerKind>) -> TokenStream {
    let bean_args = if args.is_empty() {
        BeanArgs::default()
    } else {
        match syn::parse::<BeanArgs>(args) {
            Ok(args) => args,
            Err(e) => return e.to_compile_error().into(),
        }
    };

    let input_struct = parse_macro_input!(input as ItemStruct);
    let struct_name = &input_struct.ident;

    let registration_code = generate_registration_code(struct_name, &bean_args, marker);

    let expanded = quote! {
        #input_struct

        #registration_code
    };

    TokenStream::from(expanded)
}

/// 生成 bean 自注册代码
///
/// 同一类型携带多个标记属性时，每个属性生成各自的注册函数，
/// 注册表按 TypeId 合并为一条定义
fn generate_registration_code(
    struct_name: &Ident,
    args: &BeanArgs,
    marker: Option<MarkerKind>,
) -> proc_macro2::TokenStream {
    let marker_name = marker.map_or("bean", MarkerKind::as_str);
    let registration_fn_name = Ident::new(
        &format!(
            "__register_{}_{}",
            marker_name,
            struct_name.to_string().to_lowercase()
        ),
        Span::call_site(),
    );

    let constructor_body = match &args.constructor {
        Some(path) => quote! {
            match #path() {
                Ok(value) => Ok(::std::sync::Arc::new(value)),
                Err(error) => Err(bean_container::BeanError::construction_failed(
                    ::std::any::type_name::<#struct_name>(),
                    error,
                )),
            }
        },
        None => quote! {
            Ok(::std::sync::Arc::new(
                <#struct_name as ::std::default::Default>::default(),
            ))
        },
    };

    let with_marker = marker.map(|kind| {
        let variant = kind.variant();
        quote! { .with_marker(#variant) }
    });

    let provides = &args.provides;

    quote! {
        // 使用 ctor 在程序启动时把定义写入全局注册表
        #[ctor::ctor]
        fn #registration_fn_name() {
            fn __construct() -> bean_container::BeanResult<
                ::std::sync::Arc<dyn ::std::any::Any + ::std::marker::Send + ::std::marker::Sync>,
            > {
                #constructor_body
            }

            bean_container::register_bean_definition(
                bean_container::BeanDefinition::of::<#struct_name>(
                    ::std::module_path!(),
                    __construct,
                )
                #with_marker
                #( .with_capability::<#provides>() )*,
            );
        }
    }
}
