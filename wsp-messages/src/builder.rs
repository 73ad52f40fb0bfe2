use std::collections::HashMap;

/// Substitutes `{key}` placeholders in a static template.
pub struct MessageBuilder {
    template: &'static str,
    vars: HashMap<&'static str, String>,
}

impl MessageBuilder {
    pub fn new(template: &'static str) -> Self {
        Self {
            template,
            vars: HashMap::new(),
        }
    }

    pub fn var(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.vars.insert(key, value.into());
        self
    }

    pub fn build(self) -> String {
        let mut result = self.template.to_string();
        for (key, value) in self.vars {
            result = result.replace(&format!("{{{key}}}"), &value);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use crate::msg;

    #[test]
    fn test_placeholders_are_replaced() {
        let text = msg!("Switched to '{name}' ({count} steps)", name = "demo", count = "3");
        assert_eq!(text, "Switched to 'demo' (3 steps)");
    }

    #[test]
    fn test_unknown_placeholders_are_left_alone() {
        let text = msg!("Hello {who}");
        assert_eq!(text, "Hello {who}");
    }
}
