//! 内置标准模式库
//! 七类标准模式（库序固定）：email/url/phone/credit_card/currency/time/html_tag
//! 已知限制按文档化行为保留：
//! - phone 不匹配括号区号写法（如 (123) 456-7890）
//! - credit_card 仅做语法匹配，无发卡方/校验位验证
//! - currency 仅支持 $ 符号
//! 所有模式仅使用非捕获分组，报告值始终为整体匹配区间

use once_cell::sync::Lazy;

use super::library::PatternLibrary;
use super::pattern::PatternDef;

/// 标准模式定义表（类别名, 正则源串）
const BUILTIN_DEFS: &[(&str, &str)] = &[
    ("email", r"\b[a-zA-Z0-9._%+-]+@(?:[a-zA-Z0-9.-]+\.)[a-zA-Z]{2,}\b"),
    ("url", r"https?://[^\s/$.?#].[^\s]*"),
    ("phone", r"\b\d{3}[-.\s]?\d{3}[-.\s]?\d{4}\b"),
    ("credit_card", r"\b(?:\d{4}[-.\s]?){3}\d{4}\b"),
    ("currency", r"\$\d{1,3}(?:,\d{3})*(?:\.\d{2})?"),
    ("time", r"\b(?:[01]?\d|2[0-3]):[0-5]\d(?:\s?[APap][Mm])?\b"),
    (
        "html_tag",
        r#"<[a-z]+(?:\s+[a-z-]+(?:=(?:"[^"]*"|'[^']*'|[^>\s]+))?)*\s*/?>"#,
    ),
];

/// 全局懒加载的内置模式库单例 - 进程内仅构建一次，构建后只读
static BUILTIN_LIBRARY: Lazy<PatternLibrary> = Lazy::new(|| {
    let defs = BUILTIN_DEFS
        .iter()
        .map(|&(category, pattern)| PatternDef::new(category, pattern))
        .collect();
    // 内置表类别名静态可见且互不重复
    PatternLibrary::from_defs(defs).unwrap()
});

/// 获取内置标准模式库（克隆副本，调用方可自由扩展）
pub fn builtin_library() -> PatternLibrary {
    BUILTIN_LIBRARY.clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_order_is_canonical() {
        let lib = builtin_library();
        assert_eq!(
            lib.categories(),
            vec![
                "email",
                "url",
                "phone",
                "credit_card",
                "currency",
                "time",
                "html_tag"
            ]
        );
    }

    #[test]
    fn test_builtin_patterns_use_non_capturing_groups_only() {
        // 测试场景：模式内不存在捕获分组，整体匹配语义不受分组影响
        for def in builtin_library().iter() {
            let re = regex::Regex::new(&def.pattern).unwrap();
            assert_eq!(
                re.captures_len(),
                1,
                "category '{}' must not contain capturing groups",
                def.category
            );
        }
    }
}
