//! 模式库：类别 -> 模式定义的有序集合
//! 顺序即插入顺序，决定提取结果中类别的排列；类别名全库唯一

use rustc_hash::FxHashSet;
use serde::Serialize;

use super::pattern::PatternDef;
use crate::error::{RsextractError, RsxResult};

/// 模式库
/// 内部以Vec保持插入顺序，类别唯一性由插入/构建时校验保证
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct PatternLibrary {
    defs: Vec<PatternDef>,
}

impl PatternLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// 添加一条模式定义
    /// 返回：Ok | 类别重复错误
    pub fn add(
        &mut self,
        category: impl Into<String>,
        pattern: impl Into<String>,
    ) -> RsxResult<()> {
        self.push(PatternDef::new(category, pattern))
    }

    /// 添加已构建的模式定义，类别重复时拒绝插入
    pub fn push(&mut self, def: PatternDef) -> RsxResult<()> {
        if self.defs.iter().any(|d| d.category == def.category) {
            return Err(RsextractError::DuplicateCategory(def.category));
        }
        self.defs.push(def);
        Ok(())
    }

    /// 从定义列表构建模式库（批量校验类别唯一性）
    pub fn from_defs(defs: Vec<PatternDef>) -> RsxResult<Self> {
        let mut seen: FxHashSet<&str> = FxHashSet::default();
        for def in &defs {
            if !seen.insert(def.category.as_str()) {
                return Err(RsextractError::DuplicateCategory(def.category.clone()));
            }
        }
        Ok(Self { defs })
    }

    /// 从JSON数组字符串解析模式库
    /// 格式：[{"category": "...", "pattern": "..."}, ...]
    pub fn from_json_str(json: &str) -> RsxResult<Self> {
        let defs: Vec<PatternDef> = serde_json::from_str(json)?;
        Self::from_defs(defs)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PatternDef> {
        self.defs.iter()
    }

    pub fn len(&self) -> usize {
        self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }

    /// 类别名列表（库序）
    pub fn categories(&self) -> Vec<&str> {
        self.defs.iter().map(|d| d.category.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_preserves_insertion_order() {
        let mut lib = PatternLibrary::new();
        lib.add("email", r"\w+@\w+").unwrap();
        lib.add("url", r"https?://\S+").unwrap();
        lib.add("phone", r"\d{3}-\d{4}").unwrap();
        assert_eq!(lib.categories(), vec!["email", "url", "phone"]);
    }

    #[test]
    fn test_duplicate_category_rejected_on_add() {
        // 测试场景：重复类别不允许静默覆盖
        let mut lib = PatternLibrary::new();
        lib.add("email", r"\w+@\w+").unwrap();
        let err = lib.add("email", r".+").unwrap_err();
        assert!(matches!(err, RsextractError::DuplicateCategory(c) if c == "email"));
        assert_eq!(lib.len(), 1);
    }

    #[test]
    fn test_duplicate_category_rejected_on_from_defs() {
        let defs = vec![
            PatternDef::new("time", r"\d+:\d+"),
            PatternDef::new("time", r"\d+h\d+"),
        ];
        assert!(matches!(
            PatternLibrary::from_defs(defs),
            Err(RsextractError::DuplicateCategory(_))
        ));
    }

    #[test]
    fn test_from_json_str_parses_defs_in_order() {
        let json = r#"[
            {"category": "currency", "pattern": "\\$\\d+"},
            {"category": "time", "pattern": "\\d{2}:\\d{2}"}
        ]"#;
        let lib = PatternLibrary::from_json_str(json).unwrap();
        assert_eq!(lib.categories(), vec!["currency", "time"]);
    }

    #[test]
    fn test_from_json_str_invalid_json_is_error() {
        assert!(matches!(
            PatternLibrary::from_json_str("not json"),
            Err(RsextractError::JsonError(_))
        ));
    }
}
