//! 关键字过滤（Aho-Corasick）
//!
//! 所有关键字构建为一个自动机，判定候选文本是否“包含任一关键字”。
//! 区分大小写，只做子串包含，不考虑单词边界。

use aho_corasick::AhoCorasick;

use crate::error::ScanError;
use crate::rules::RuleSpec;

pub(crate) struct KeywordFilter {
    ac: AhoCorasick,
}

impl KeywordFilter {
    pub(crate) fn from_spec(spec: &RuleSpec) -> Result<Self, ScanError> {
        let ac = AhoCorasick::new(&spec.keywords).map_err(|e| ScanError::InvalidRules { reason: e.to_string() })?;
        Ok(Self { ac })
    }

    pub(crate) fn matches(&self, text: &str) -> bool {
        self.ac.is_match(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_filter() -> KeywordFilter {
        KeywordFilter::from_spec(&RuleSpec::default()).unwrap()
    }

    #[test]
    fn substring_containment_ignores_word_boundaries() {
        let f = default_filter();
        assert!(f.matches("Pizzaz"));
        assert!(f.matches("seafood"));
        assert!(f.matches("Thousand Island"));
    }

    #[test]
    fn matching_is_case_sensitive() {
        let f = default_filter();
        assert!(!f.matches("Cheeseburger"));
        assert!(f.matches("CheeseBurger"));
        assert!(!f.matches("FOOD"));
        assert!(!f.matches("Club"));
    }

    #[test]
    fn empty_keyword_list_matches_nothing() {
        let spec = RuleSpec { keywords: Vec::new(), ..RuleSpec::default() };
        let f = KeywordFilter::from_spec(&spec).unwrap();
        assert!(!f.matches("Burger"));
    }
}
