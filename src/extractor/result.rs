//! 提取结果模型与报告输出

use std::fmt;

use rustc_hash::FxHashMap;
use serde::Serialize;

/// 单类别匹配结果
/// matches 按源文本中出现顺序排列，保留重复项，不做去重
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CategoryMatches {
    pub category: String,
    pub matches: Vec<String>,
}

/// 一次提取调用的完整结果
/// 类别顺序与模式库一致；每次调用新建，调用方独占所有权
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct Extraction {
    categories: Vec<CategoryMatches>,
    #[serde(skip)]
    index: FxHashMap<String, usize>,
}

impl Extraction {
    /// 从按库序排列的类别结果构建
    pub fn from_categories(categories: Vec<CategoryMatches>) -> Self {
        let index = categories
            .iter()
            .enumerate()
            .map(|(i, entry)| (entry.category.clone(), i))
            .collect();
        Self { categories, index }
    }

    /// 类别结果列表（库序）
    pub fn categories(&self) -> &[CategoryMatches] {
        &self.categories
    }

    /// 按类别名取匹配列表
    pub fn get(&self, category: &str) -> Option<&[String]> {
        self.index
            .get(category)
            .map(|&i| self.categories[i].matches.as_slice())
    }

    /// 全类别匹配总数
    pub fn total_matches(&self) -> usize {
        self.categories.iter().map(|entry| entry.matches.len()).sum()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

impl fmt::Display for Extraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== EXTRACTION RESULTS ===")?;
        writeln!(f)?;
        writeln!(f, "Total items found: {}", self.total_matches())?;

        for entry in &self.categories {
            writeln!(f)?;
            writeln!(
                f,
                "{} matches ({} found):",
                entry.category.to_uppercase(),
                entry.matches.len()
            )?;
            writeln!(f, "{}", "-".repeat(40))?;

            if entry.matches.is_empty() {
                writeln!(f, "  No matches found.")?;
            } else {
                for m in &entry.matches {
                    writeln!(f, "  • {}", m)?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Extraction {
        Extraction::from_categories(vec![
            CategoryMatches {
                category: "email".to_string(),
                matches: vec!["a@b.com".to_string()],
            },
            CategoryMatches {
                category: "url".to_string(),
                matches: vec![],
            },
        ])
    }

    #[test]
    fn test_get_by_category() {
        let extraction = sample();
        assert_eq!(extraction.get("email").unwrap(), ["a@b.com"]);
        assert!(extraction.get("url").unwrap().is_empty());
        assert!(extraction.get("phone").is_none());
    }

    #[test]
    fn test_total_matches() {
        assert_eq!(sample().total_matches(), 1);
    }

    #[test]
    fn test_display_report_shape() {
        // 测试场景：报告包含总数行、大写类别标题、空类别提示
        let report = sample().to_string();
        assert!(report.contains("=== EXTRACTION RESULTS ==="));
        assert!(report.contains("Total items found: 1"));
        assert!(report.contains("EMAIL matches (1 found):"));
        assert!(report.contains("  • a@b.com"));
        assert!(report.contains("URL matches (0 found):"));
        assert!(report.contains("  No matches found."));
    }

    #[test]
    fn test_serialize_skips_lookup_index() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert!(json.contains(r#""category":"email""#));
        assert!(json.contains(r#""matches":["a@b.com"]"#));
        assert!(!json.contains("index"));
    }
}
