//! 缓存层
//!
//! 通过插件注册表选择缓存后端（moka 内存缓存 / redis），
//! 后端实现 `ObjectCache` trait 并用 `declare_object_cache_plugin!` 自注册。

pub mod object_cache;
pub mod register;
pub mod traits;

pub use traits::{CacheResult, ObjectCache};

/// 声明并自注册一个缓存插件
///
/// 展开为一个 `ctor` 启动函数，把插件构造器写入全局注册表。
#[macro_export]
macro_rules! declare_object_cache_plugin {
    ($name:literal, $plugin:ident) => {
        paste::paste! {
            #[ctor::ctor]
            fn [<__register_object_cache_ $plugin:snake>]() {
                $crate::cache::register::register_object_cache_plugin(
                    $name,
                    ::std::sync::Arc::new(|| {
                        ::std::boxed::Box::pin(async {
                            let cache = $plugin::new()
                                .map_err($crate::errors::CodeTrackError::cache_connection)?;
                            Ok(::std::boxed::Box::new(cache)
                                as ::std::boxed::Box<dyn $crate::cache::ObjectCache>)
                        })
                            as $crate::cache::register::BoxedObjectCacheFuture
                    }),
                );
            }
        }
    };
}
