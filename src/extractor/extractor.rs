//! 数据提取器：对输入文本按库序逐类别执行正则匹配，聚合整体匹配子串
//! 无状态纯变换：编译后模式库构建后只读，extract 仅借用 &self，
//! 多线程并发调用无需加锁

use crate::compiler::CompiledLibrary;
use crate::core::PatternLibrary;
use crate::error::RsxResult;
use crate::utils::match_preview;

use super::result::{CategoryMatches, Extraction};

/// 数据提取器
#[derive(Debug, Clone)]
pub struct DataExtractor {
    compiled: CompiledLibrary,
}

impl DataExtractor {
    /// 从模式库构建提取器（一次性编译所有模式）
    /// 任一模式编译失败即构建失败
    pub fn new(library: &PatternLibrary) -> RsxResult<Self> {
        let compiled = CompiledLibrary::compile(library)?;
        Ok(Self { compiled })
    }

    /// 使用内置标准模式库构建提取器
    /// 内置模式静态可见且全部合法，编译不会失败
    #[cfg(feature = "builtin-patterns")]
    pub fn with_builtin() -> Self {
        Self::new(&crate::core::builtin_library()).unwrap()
    }

    /// 执行提取：按库序对每个类别收集全部非重叠匹配（从左到右）
    ///
    /// 结果类别集与库的类别集一致且同序（含空匹配类别）；
    /// 匹配值为整体匹配文本，不受模式内分组影响（find_iter 始终
    /// 返回完整匹配区间，不返回分组片段）；
    /// 空文本/无匹配均得到空列表，不构成错误
    pub fn extract(&self, text: &str) -> Extraction {
        let mut categories = Vec::with_capacity(self.compiled.len());

        for compiled in self.compiled.patterns() {
            let matches: Vec<String> = compiled
                .regex
                .find_iter(text)
                .map(|m| {
                    log::trace!(
                        "Match found: category={} span=({},{}) text={}",
                        compiled.category,
                        m.start(),
                        m.end(),
                        match_preview(m.as_str(), 60)
                    );
                    m.as_str().to_string()
                })
                .collect();

            log::debug!(
                "Category scanned: category={} matches={}",
                compiled.category,
                matches.len()
            );
            categories.push(CategoryMatches {
                category: compiled.category.clone(),
                matches,
            });
        }

        Extraction::from_categories(categories)
    }

    /// 类别名列表（库序）
    pub fn categories(&self) -> Vec<&str> {
        self.compiled
            .patterns()
            .iter()
            .map(|p| p.category.as_str())
            .collect()
    }
}
