//! 必需变量规则表
//!
//! 规则在进程内固定不变，按顺序逐条校验。

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// Supabase 项目地址变量名
pub const SUPABASE_URL: &str = "REACT_APP_SUPABASE_URL";
/// Supabase 匿名密钥变量名
pub const SUPABASE_KEY: &str = "REACT_APP_SUPABASE_KEY";

/// 单条必需变量规则
#[derive(Debug, Serialize)]
pub struct Requirement {
    pub name: &'static str,
    pub description: &'static str,
    /// 完整匹配的正则（带 ^...$ 锚点）
    #[serde(serialize_with = "serialize_pattern")]
    pub pattern: Regex,
    /// 缺少 .env 时提示用户的示例值
    #[serde(skip)]
    pub example: &'static str,
}

impl Requirement {
    fn new(
        name: &'static str,
        pattern: &str,
        description: &'static str,
        example: &'static str,
    ) -> Self {
        Self {
            name,
            description,
            // 只接受内置常量；tests::test_table_order_is_fixed 会强制编译全部规则
            pattern: Regex::new(pattern).expect("内置正则无效"),
            example,
        }
    }

    /// 值是否整体匹配规则
    #[must_use]
    pub fn matches(&self, value: &str) -> bool {
        self.pattern.is_match(value)
    }
}

fn serialize_pattern<S: serde::Serializer>(re: &Regex, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(re.as_str())
}

/// 固定的必需变量规则表（顺序即输出顺序）
pub static REQUIREMENTS: Lazy<[Requirement; 2]> = Lazy::new(|| {
    [
        Requirement::new(
            SUPABASE_URL,
            r"^https://[a-z0-9]+\.supabase\.co$",
            "Supabase project URL",
            "https://your-project.supabase.co",
        ),
        Requirement::new(
            SUPABASE_KEY,
            r"^eyJ[A-Za-z0-9_=-]+\.[A-Za-z0-9_=-]+\.?[A-Za-z0-9_.+/=-]*$",
            "Supabase anon key (JWT format)",
            "your-anon-key",
        ),
    ]
});

/// 规则表切片
#[must_use]
pub fn requirements() -> &'static [Requirement] {
    REQUIREMENTS.as_slice()
}
