//! # Application Dependencies / 应用依赖
//!
//! This module defines the dependency grouping for App construction.
//! 此模块定义 App 构造的依赖分组。
//!
//! **Note / 注意**: This is NOT a Builder pattern.
//! **这不是 Builder 模式。**
//! - No build steps / 无构建步骤
//! - No default values / 无默认值
//! - Just parameter grouping / 仅用于参数打包

use std::sync::Arc;

use dh_core::ports::*;
use dh_core::{Category, FuelRecord, Nickname, PaymentMethod, Vehicle};

/// Application dependency grouping (non-Builder, just parameter grouping)
/// 应用依赖分组（非 Builder，仅参数打包）
///
/// All dependencies are required - no defaults, no optional fields.
/// 所有依赖都是必需的 - 无默认值，无可选字段。
pub struct AppDeps {
    // Remote profile document / 远程资料文档
    pub remote: Arc<dyn RemoteDocumentPort>,

    // Local caches, one per domain / 本地缓存，每个数据域一个
    pub payment_cache: Arc<dyn LocalCachePort<PaymentMethod>>,
    pub category_cache: Arc<dyn LocalCachePort<Category>>,
    pub nickname_cache: Arc<dyn LocalCachePort<Nickname>>,
    pub vehicle_cache: Arc<dyn LocalCachePort<Vehicle>>,
    pub fuel_record_cache: Arc<dyn LocalCachePort<FuelRecord>>,

    // System dependencies / 系统依赖
    pub clock: Arc<dyn ClockPort>,
}
