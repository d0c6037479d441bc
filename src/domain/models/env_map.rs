//! 环境变量映射

use std::collections::HashMap;

/// 从 .env 内容解析出的键值映射（键唯一，后出现的覆盖先出现的）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvMap {
    vars: HashMap<String, String>,
}

impl EnvMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// 写入变量，同名覆盖
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(key.into(), value.into());
    }

    /// 原始值（可能为空串）
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// 非空值才算"存在"
    #[must_use]
    pub fn present(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|v| !v.is_empty())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for EnvMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}
