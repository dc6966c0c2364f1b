//! 全局提取器单例管理
//! 核心职责：
//! 1. 维护进程生命周期内唯一的DataExtractor实例
//! 2. 提供幂等初始化接口与自定义模式库注入
//! 3. 支持懒加载初始化
//! 4. 统一错误处理和状态管理

use std::sync::Arc;

use once_cell::sync::{Lazy, OnceCell};

use super::extractor::DataExtractor;
#[cfg(feature = "builtin-patterns")]
use super::result::Extraction;
use crate::core::PatternLibrary;
use crate::error::{RsextractError, RsxResult};

/// 全局提取器实例 - 线程安全单例
/// 设计说明：
/// - Lazy：延迟初始化，首次使用时创建
/// - Arc：多线程共享所有权
/// - OnceCell：确保实例仅初始化一次，进程内唯一
static GLOBAL_EXTRACTOR: Lazy<Arc<OnceCell<DataExtractor>>> =
    Lazy::new(|| Arc::new(OnceCell::new()));

/// 初始化全局提取器（使用内置标准模式库）
/// 特性：
/// 1. 幂等设计：已初始化则直接返回Ok(())
/// 2. 线程安全：基于OnceCell保证仅初始化一次
/// 返回：初始化结果 | 错误（仅当并发初始化冲突时返回）
#[cfg(feature = "builtin-patterns")]
pub fn init_global_extractor() -> RsxResult<()> {
    // 幂等检查：已初始化则直接返回
    if GLOBAL_EXTRACTOR.get().is_some() {
        log::debug!("Global extractor already initialized, skip reinitialization");
        return Ok(());
    }

    let extractor = DataExtractor::with_builtin();

    // 尝试设置全局实例（OnceCell保证仅一次成功）
    GLOBAL_EXTRACTOR.set(extractor).map_err(|_| {
        RsextractError::ExtractorInitError(
            "Global extractor initialization failed: instance already initialized by another thread"
                .to_string(),
        )
    })?;

    log::info!("Global DataExtractor initialized with builtin pattern library");
    Ok(())
}

/// 手动注入模式库，初始化全局提取器
/// 适用场景：进程启动时加载自定义模式库后手动初始化
/// 参数：library - 预构建的模式库
/// 返回：初始化结果 | 错误（模式编译失败/并发初始化冲突）
pub fn init_global_extractor_with_patterns(library: &PatternLibrary) -> RsxResult<()> {
    // 幂等检查：已初始化则直接返回
    if GLOBAL_EXTRACTOR.get().is_some() {
        log::debug!("Global extractor already initialized, skip reinitialization with custom patterns");
        return Ok(());
    }

    let extractor = DataExtractor::new(library).map_err(|e| {
        RsextractError::ExtractorInitError(format!(
            "Failed to create DataExtractor with custom patterns: {}",
            e
        ))
    })?;

    // 尝试设置全局实例
    GLOBAL_EXTRACTOR.set(extractor).map_err(|_| {
        RsextractError::ExtractorInitError(
            "Global extractor initialization failed: instance already initialized by another thread"
                .to_string(),
        )
    })?;

    log::info!("Global DataExtractor initialized with custom pattern library");
    Ok(())
}

/// 使用全局提取器执行提取（自动懒加载）
/// 特性：未初始化则使用内置标准模式库初始化
#[cfg(feature = "builtin-patterns")]
pub fn global_extract(text: &str) -> RsxResult<Extraction> {
    Ok(get_global_extractor()?.extract(text))
}

/// 获取全局提取器实例（自动懒加载）
/// 返回：全局提取器静态引用 | 错误
#[cfg(feature = "builtin-patterns")]
pub(crate) fn get_global_extractor() -> RsxResult<&'static DataExtractor> {
    // 自动懒加载初始化（使用内置标准模式库）
    if GLOBAL_EXTRACTOR.get().is_none() {
        log::debug!("Lazy initializing global DataExtractor with builtin patterns");
        init_global_extractor()?;
    }

    // 获取实例并返回精准错误
    GLOBAL_EXTRACTOR.get().ok_or_else(|| {
        RsextractError::ExtractorNotInitialized(
            "Global DataExtractor not initialized! Please call init_global_extractor first"
                .to_string(),
        )
    })
}

#[cfg(all(test, feature = "builtin-patterns"))]
mod tests {
    use super::*;

    #[test]
    fn test_global_extract_lazy_init() {
        let result = global_extract("mail a@b.org").unwrap();
        assert_eq!(result.get("email").unwrap(), ["a@b.org"]);
    }

    #[test]
    fn test_init_is_idempotent() {
        // 重复初始化（含注入变体）均直接返回Ok
        init_global_extractor().unwrap();
        init_global_extractor().unwrap();
        init_global_extractor_with_patterns(&crate::core::builtin_library()).unwrap();
    }
}
