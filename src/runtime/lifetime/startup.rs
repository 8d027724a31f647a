use crate::cache::{ObjectCache, register::get_object_cache_plugin};
use crate::config::AppConfig;
use crate::models::users::entities::{UserProfile, UserRole};
use crate::models::users::requests::CreateUserRequest;
use crate::storage::Storage;
use crate::utils::random_code::generate_random_password;
use std::sync::Arc;
use tracing::{debug, warn};

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
    pub cache: Arc<dyn ObjectCache>,
}

/// 创建缓存实例
async fn create_cache() -> Result<Arc<dyn ObjectCache>, Box<dyn std::error::Error>> {
    let config = AppConfig::get();
    let cache_type = &config.cache.cache_type;

    warn!("Attempting to create {} cache backend", cache_type);

    // 根据配置选择缓存后端
    if let Some(constructor) = get_object_cache_plugin(cache_type) {
        match constructor().await {
            Ok(cache) => {
                warn!("Successfully created {} cache backend", cache_type);
                return Ok(Arc::from(cache));
            }
            Err(e) => {
                warn!("Failed to create {} cache: {}", cache_type, e);

                // 配置的缓存失败时回退到内存缓存
                if cache_type == "redis"
                    && let Some(fallback_constructor) = get_object_cache_plugin("moka")
                {
                    match fallback_constructor().await {
                        Ok(cache) => {
                            warn!("Successfully created fallback Moka (in-memory) cache backend");
                            return Ok(Arc::from(cache));
                        }
                        Err(fallback_e) => {
                            warn!("Failed to create fallback Moka cache: {}", fallback_e);
                        }
                    }
                }
            }
        }
    } else {
        warn!("Cache backend '{}' not found in registry", cache_type);

        if cache_type != "moka"
            && let Some(fallback_constructor) = get_object_cache_plugin("moka")
        {
            match fallback_constructor().await {
                Ok(cache) => {
                    warn!("Successfully created fallback Moka (in-memory) cache backend");
                    return Ok(Arc::from(cache));
                }
                Err(fallback_e) => {
                    warn!("Failed to create fallback Moka cache: {}", fallback_e);
                }
            }
        }
    }

    Err(format!("No cache backend available (tried: {cache_type})").into())
}

/// 初始化默认管理员账号
/// 如果数据库中没有任何用户，则创建一个默认的 admin 账号
async fn seed_admin(storage: &Arc<dyn Storage>) {
    match storage.count_users().await {
        Ok(count) if count > 0 => {
            debug!(
                "Database already has {} user(s), skipping admin seed",
                count
            );
            return;
        }
        Ok(_) => {}
        Err(e) => {
            warn!("Failed to count users, skipping admin seed: {}", e);
            return;
        }
    }

    let password = generate_random_password(16);
    let request = CreateUserRequest {
        username: "admin".to_string(),
        email: "admin@localhost".to_string(),
        password: password.clone(),
        role: UserRole::Admin,
        profile: UserProfile {
            profile_name: "Administrator".to_string(),
            avatar_url: None,
        },
    };

    match storage.create_user(request).await {
        Ok(user) => {
            // 初始密码只在首次启动打印一次
            warn!(
                "Seeded default admin account '{}' with password: {}",
                user.username, password
            );
        }
        Err(e) => {
            warn!("Failed to seed admin account: {}", e);
        }
    }
}

/// 服务器启动前的准备：存储、缓存、种子数据
pub async fn prepare_server_startup() -> StartupContext {
    crate::cache::register::debug_object_cache_registry();

    let storage = crate::storage::create_storage()
        .await
        .expect("Failed to initialize storage");

    let cache = create_cache().await.expect("Failed to initialize cache");

    seed_admin(&storage).await;

    StartupContext { storage, cache }
}
