//! 终端彩色输出

use crate::domain::models::{FileStatus, Requirement, RequirementStatus, ValidationReport};
use colored::{Color, Colorize};
use std::io::{self, Write};

/// 彩色行输出器
pub struct Console<W: Write> {
    out: W,
}

impl Console<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Console<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// 输出一整行，颜色作用于整行
    pub fn line(&mut self, color: Color, message: &str) -> io::Result<()> {
        writeln!(self.out, "{}", message.color(color))
    }

    /// 原样输出（不着色），用于 JSON
    pub fn raw(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{text}")?;
        self.out.flush()
    }

    pub fn blank(&mut self) -> io::Result<()> {
        writeln!(self.out)
    }

    /// 校验开始前的提示
    pub fn header(&mut self) -> io::Result<()> {
        self.line(Color::Blue, "🔍 正在校验环境配置...")?;
        self.blank()
    }

    /// 根据报告输出完整的校验过程
    pub fn report(&mut self, report: &ValidationReport, requirements: &[Requirement]) -> io::Result<()> {
        match report.file_status {
            FileStatus::Seeded => return self.seeded(),
            FileStatus::Missing => return self.missing(requirements),
            FileStatus::Present => {}
        }

        self.line(Color::Blue, "📋 检查必需变量:")?;
        for outcome in &report.requirements {
            match outcome.status {
                RequirementStatus::Missing => {
                    self.line(Color::Red, &format!("❌ {} 缺失", outcome.name))?;
                    self.line(Color::Yellow, &format!("   说明: {}", outcome.description))?;
                }
                RequirementStatus::InvalidFormat => {
                    self.line(Color::Red, &format!("❌ {} 格式无效", outcome.name))?;
                    self.line(Color::Yellow, &format!("   说明: {}", outcome.description))?;
                    if let Some(preview) = &outcome.preview {
                        self.line(Color::Yellow, &format!("   当前值: {preview}"))?;
                    }
                }
                RequirementStatus::Valid => {
                    self.line(Color::Green, &format!("✅ {}", outcome.name))?;
                }
            }
        }
        self.blank()?;

        if report.valid {
            self.success(report.project_id.as_deref())
        } else {
            self.failure()
        }
    }

    fn seeded(&mut self) -> io::Result<()> {
        self.line(Color::Yellow, "⚠️  未找到 .env 文件")?;
        self.line(Color::Blue, "💡 发现 .env.example，正在复制为 .env...")?;
        self.line(Color::Green, "✅ 已根据模板创建 .env 文件")?;
        self.line(Color::Yellow, "⚠️  请在 .env 中填写真实的 Supabase 凭据")
    }

    fn missing(&mut self, requirements: &[Requirement]) -> io::Result<()> {
        self.line(Color::Yellow, "⚠️  未找到 .env 文件")?;
        self.line(Color::Red, "❌ 也没有找到 .env.example")?;
        self.line(Color::Yellow, "💡 请创建 .env 并写入以下变量:")?;
        for req in requirements {
            self.line(Color::Blue, &format!("   {}={}", req.name, req.example))?;
        }
        Ok(())
    }

    fn success(&mut self, project_id: Option<&str>) -> io::Result<()> {
        self.line(Color::Green, "🎉 所有环境变量均有效！")?;
        self.line(Color::Blue, "📋 附加信息:")?;
        if let Some(id) = project_id {
            self.line(Color::Blue, &format!("   Supabase 项目 ID: {id}"))?;
        }
        self.line(Color::Blue, "   环境变量将在构建时嵌入")?;
        self.line(Color::Blue, "   可以执行: npm run build")
    }

    fn failure(&mut self) -> io::Result<()> {
        self.line(Color::Red, "❌ 环境校验失败")?;
        self.blank()?;
        self.line(Color::Yellow, "💡 获取 Supabase 凭据:")?;
        self.line(Color::Blue, "   1. 打开 https://app.supabase.com")?;
        self.line(Color::Blue, "   2. 选择项目（或新建项目）")?;
        self.line(Color::Blue, "   3. 进入 Settings → API")?;
        self.line(Color::Blue, "   4. 将 \"Project URL\" 填入 REACT_APP_SUPABASE_URL")?;
        self.line(Color::Blue, "   5. 将 \"anon public\" key 填入 REACT_APP_SUPABASE_KEY")
    }

    /// 输出规则表
    pub fn requirements(&mut self, requirements: &[Requirement]) -> io::Result<()> {
        self.line(Color::Blue, "📋 必需变量:")?;
        for req in requirements {
            self.line(Color::Green, &format!("   {}", req.name))?;
            self.line(Color::Yellow, &format!("      说明: {}", req.description))?;
            self.line(Color::Yellow, &format!("      格式: {}", req.pattern.as_str()))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{RequirementOutcome, requirements};
    use serial_test::serial;
    use std::path::PathBuf;

    fn render(report: &ValidationReport) -> String {
        colored::control::set_override(false);
        let mut console = Console::new(Vec::new());
        console.report(report, requirements()).unwrap();
        colored::control::unset_override();
        String::from_utf8(console.into_inner()).unwrap()
    }

    fn outcome(name: &'static str, status: RequirementStatus, preview: Option<&str>) -> RequirementOutcome {
        RequirementOutcome {
            name,
            description: "desc",
            status,
            preview: preview.map(str::to_string),
        }
    }

    #[test]
    #[serial]
    fn test_missing_lists_every_requirement() {
        let report = ValidationReport::without_checks(PathBuf::from(".env"), FileStatus::Missing);
        let text = render(&report);

        assert!(text.contains("REACT_APP_SUPABASE_URL=https://your-project.supabase.co"));
        assert!(text.contains("REACT_APP_SUPABASE_KEY=your-anon-key"));
        assert!(!text.contains("📋"));
    }

    #[test]
    #[serial]
    fn test_invalid_format_shows_preview_only() {
        let report = ValidationReport {
            env_file: PathBuf::from(".env"),
            file_status: FileStatus::Present,
            valid: false,
            requirements: vec![
                outcome("A", RequirementStatus::InvalidFormat, Some("http://abcxyz.supaba...")),
                outcome("B", RequirementStatus::Missing, None),
            ],
            project_id: None,
        };
        let text = render(&report);

        assert!(text.contains("❌ A 格式无效"));
        assert!(text.contains("当前值: http://abcxyz.supaba..."));
        assert!(text.contains("❌ B 缺失"));
        assert!(text.contains("环境校验失败"));
        assert!(!text.contains("\x1b["));
    }

    #[test]
    #[serial]
    fn test_success_shows_project_id() {
        let report = ValidationReport {
            env_file: PathBuf::from(".env"),
            file_status: FileStatus::Present,
            valid: true,
            requirements: vec![outcome("A", RequirementStatus::Valid, None)],
            project_id: Some("abcxyz".to_string()),
        };
        let text = render(&report);

        assert!(text.contains("✅ A"));
        assert!(text.contains("Supabase 项目 ID: abcxyz"));
        assert!(text.contains("npm run build"));
    }

    /// 模拟已关闭的管道
    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_raw_passes_text_through() {
        let mut console = Console::new(Vec::new());
        console.raw("{\"valid\": true}").unwrap();
        assert_eq!(
            String::from_utf8(console.into_inner()).unwrap(),
            "{\"valid\": true}\n"
        );
    }

    #[test]
    fn test_write_errors_are_returned_not_panicked() {
        let mut console = Console::new(BrokenPipe);
        let err = console.raw("{}").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);

        let err = console.line(Color::Green, "ok").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);

        let mapped = crate::domain::DomainError::io("<stdout>", err);
        assert!(mapped.to_string().contains("<stdout>"));
    }

    #[test]
    #[serial]
    fn test_forced_color_emits_ansi() {
        colored::control::set_override(true);
        let mut console = Console::new(Vec::new());
        console.line(Color::Red, "boom").unwrap();
        colored::control::unset_override();

        let text = String::from_utf8(console.into_inner()).unwrap();
        assert!(text.contains("\x1b[31m"));
    }
}
