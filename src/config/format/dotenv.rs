//! .env 格式解析器 (简单原则：透明的文本解析)

use crate::domain::models::EnvMap;

/// .env 格式解析器
#[derive(Debug, Default)]
pub struct DotenvParser;

impl DotenvParser {
    /// 解析 .env 文件内容
    ///
    /// 规则：
    /// - 按 `\n` 分行，按第一个 `=` 拆分 KEY 和 VALUE
    /// - VALUE 中后续的 `=` 原样保留
    /// - KEY/VALUE 去除首尾空白（含 `\r`）
    /// - 没有 `=` 或 KEY 为空的行直接跳过，不报错
    /// - 忽略开头的 UTF-8 BOM
    /// - 不识别注释、引号和转义
    /// - 同名 KEY 后者覆盖前者
    ///
    /// # 示例
    /// ```ignore
    /// REACT_APP_SUPABASE_URL=https://abcxyz.supabase.co
    /// REACT_APP_SUPABASE_KEY = eyJhbGciOiJIUzI1NiJ9.eyJzdWIiOiIxIn0.sig
    /// ```
    #[must_use]
    pub fn parse(content: &str) -> EnvMap {
        let mut vars = EnvMap::new();

        let content = content.strip_prefix('\u{feff}').unwrap_or(content);

        for line in content.split('\n') {
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };

            let key = key.trim();
            if key.is_empty() {
                continue;
            }

            vars.insert(key, value.trim());
        }

        vars
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        let content = "KEY1=value1\nKEY2 = value2 \r\n";
        let result = DotenvParser::parse(content);
        assert_eq!(result.len(), 2);
        assert_eq!(result.get("KEY1"), Some("value1"));
        assert_eq!(result.get("KEY2"), Some("value2"));
    }

    #[test]
    fn test_embedded_equals_preserved() {
        let result = DotenvParser::parse("KEY=a=b=c");
        assert_eq!(result.get("KEY"), Some("a=b=c"));
    }

    #[test]
    fn test_line_without_equals_is_skipped() {
        let result = DotenvParser::parse("JUST_A_WORD\n\n   \nKEY=v");
        assert_eq!(result.len(), 1);
        assert_eq!(result.get("JUST_A_WORD"), None);
    }

    #[test]
    fn test_empty_key_is_skipped() {
        let result = DotenvParser::parse("=value\n  = other");
        assert!(result.is_empty());
    }

    #[test]
    fn test_parse_empty_value() {
        let result = DotenvParser::parse("KEY=\nKEY2=value");
        assert_eq!(result.get("KEY"), Some(""));
        assert_eq!(result.present("KEY"), None);
    }

    #[test]
    fn test_last_duplicate_wins() {
        let result = DotenvParser::parse("KEY=first\nKEY=second");
        assert_eq!(result.get("KEY"), Some("second"));
    }

    #[test]
    fn test_comments_are_not_special() {
        let result = DotenvParser::parse("# KEY=value");
        assert_eq!(result.get("# KEY"), Some("value"));
        assert_eq!(result.get("KEY"), None);
    }

    #[test]
    fn test_leading_bom_is_stripped() {
        let result = DotenvParser::parse("\u{feff}REACT_APP_SUPABASE_URL=https://abcxyz.supabase.co\nB=1");
        assert_eq!(
            result.get("REACT_APP_SUPABASE_URL"),
            Some("https://abcxyz.supabase.co")
        );
        assert_eq!(result.get("B"), Some("1"));
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_parse_is_idempotent() {
        let content = "A=1\nB=2=3\nbroken\nA=4";
        assert_eq!(DotenvParser::parse(content), DotenvParser::parse(content));
    }
}
