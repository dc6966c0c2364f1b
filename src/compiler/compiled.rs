//! 编译后模式模型
//! 模式库在提取器构建阶段一次性编译；任一模式编译失败即整体失败，
//! 进程不得携带损坏的模式库继续运行

use regex::RegexBuilder;
use rustc_hash::FxHashMap;

use crate::core::PatternLibrary;
use crate::error::{RsextractError, RsxResult};

/// 编译后的单条模式
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    pub category: String,
    pub regex: regex::Regex,
}

/// 编译后的模式库
/// patterns 保持库序；category_index 提供类别 -> 下标的O(1)定位
#[derive(Debug, Clone, Default)]
pub struct CompiledLibrary {
    patterns: Vec<CompiledPattern>,
    category_index: FxHashMap<String, usize>,
}

impl CompiledLibrary {
    /// 编译模式库（统一忽略大小写）
    /// 返回：编译后的库 | 编译错误（带类别上下文，初始化阶段致命）
    pub fn compile(library: &PatternLibrary) -> RsxResult<Self> {
        let mut patterns = Vec::with_capacity(library.len());
        let mut category_index = FxHashMap::default();

        for def in library.iter() {
            let regex = RegexBuilder::new(&def.pattern)
                .case_insensitive(true)
                .build()
                .map_err(|e| RsextractError::PatternCompileError {
                    category: def.category.clone(),
                    reason: e.to_string(),
                })?;

            category_index.insert(def.category.clone(), patterns.len());
            patterns.push(CompiledPattern {
                category: def.category.clone(),
                regex,
            });
        }

        log::debug!("Pattern library compiled: patterns={}", patterns.len());
        Ok(Self {
            patterns,
            category_index,
        })
    }

    /// 编译后模式列表（库序）
    pub fn patterns(&self) -> &[CompiledPattern] {
        &self.patterns
    }

    /// 按类别名定位编译后模式
    pub fn get(&self, category: &str) -> Option<&CompiledPattern> {
        self.category_index.get(category).map(|&i| &self.patterns[i])
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}
