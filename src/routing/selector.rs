use crate::config::PricingConfig;
use crate::routing::pricing::PricingTable;

/// Decides which pricing tier serves a prompt.
///
/// A request lands on the cheap tier only when it asks for it via `mode`
/// and the prompt is shorter than `max_prompt_chars` characters.
#[derive(Debug, Clone)]
pub struct SelectionPolicy {
    pub cheap_mode: String,
    pub max_prompt_chars: usize,
}

impl SelectionPolicy {
    pub fn from_config(cfg: &PricingConfig) -> Self {
        Self {
            cheap_mode: cfg.cheap_mode.clone(),
            max_prompt_chars: cfg.cheap_prompt_max_chars,
        }
    }

    pub fn select_model<'a>(&self, table: &'a PricingTable, prompt: &str, mode: &str) -> &'a str {
        // 按字符计数，而不是字节
        if mode == self.cheap_mode && prompt.chars().count() < self.max_prompt_chars {
            table.cheap_model()
        } else {
            table.expensive_model()
        }
    }
}

impl Default for SelectionPolicy {
    fn default() -> Self {
        Self::from_config(&PricingConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn select(prompt: &str, mode: &str) -> String {
        SelectionPolicy::default()
            .select_model(&PricingTable::default(), prompt, mode)
            .to_string()
    }

    #[test]
    fn short_cheap_prompt_uses_cheap_model() {
        assert_eq!(select("Hello world this is a test", "cheap"), "cheap-model");
        assert_eq!(select("", "cheap"), "cheap-model");
    }

    #[test]
    fn length_boundary_is_strict() {
        let just_under = "a".repeat(199);
        let at_limit = "a".repeat(200);
        assert_eq!(select(&just_under, "cheap"), "cheap-model");
        assert_eq!(select(&at_limit, "cheap"), "expensive-model");
        assert_eq!(select(&"a".repeat(1000), "cheap"), "expensive-model");
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        // 199 个多字节字符仍然低于阈值
        let prompt = "你".repeat(199);
        assert!(prompt.len() > 200);
        assert_eq!(select(&prompt, "cheap"), "cheap-model");
    }

    #[test]
    fn any_other_mode_uses_expensive_model() {
        for mode in ["", "quality", "CHEAP", "cheap ", "expensive"] {
            assert_eq!(select("short", mode), "expensive-model", "mode={mode:?}");
        }
    }

    #[test]
    fn policy_follows_config() {
        let mut cfg = PricingConfig::default();
        cfg.cheap_mode = "budget".into();
        cfg.cheap_prompt_max_chars = 5;
        let policy = SelectionPolicy::from_config(&cfg);
        let table = PricingTable::default();
        assert_eq!(policy.select_model(&table, "abcd", "budget"), "cheap-model");
        assert_eq!(policy.select_model(&table, "abcde", "budget"), "expensive-model");
        assert_eq!(policy.select_model(&table, "abcd", "cheap"), "expensive-model");
    }
}
