//! 模式定义模型

use serde::{Deserialize, Serialize};

/// 单条模式定义
/// 不变量：category 在所属模式库内唯一；pattern 为 regex crate 方言的正则源串，
/// 编译阶段统一附加忽略大小写
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PatternDef {
    /// 类别名（结果聚合的键，如 "email"）
    pub category: String,
    /// 正则源串
    pub pattern: String,
}

impl PatternDef {
    pub fn new(category: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            pattern: pattern.into(),
        }
    }
}

impl From<(&str, &str)> for PatternDef {
    fn from((category, pattern): (&str, &str)) -> Self {
        Self::new(category, pattern)
    }
}
