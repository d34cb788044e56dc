//! Grammar-rule stack used for diagnostic context and debug tracing.

use tracing::debug;

/// Rule name reported when no grammar rule is active.
pub const TOP_LEVEL_RULE: &str = "program";

/// Stack of active grammar rules, innermost last.
///
/// The stack only feeds diagnostics and `tracing` output; the grammar never
/// branches on it.
#[derive(Debug, Clone, Default)]
pub struct RuleTrace {
    stack: Vec<&'static str>,
    verbose: bool,
}

impl RuleTrace {
    /// Creates an empty trace. `verbose` enables `tracing` events.
    pub fn new(verbose: bool) -> Self {
        Self {
            stack: Vec::new(),
            verbose,
        }
    }

    /// Pushes `rule` as the innermost active rule.
    pub fn enter(&mut self, rule: &'static str) {
        self.stack.push(rule);
        if self.verbose {
            debug!(depth = self.stack.len(), rule, "enter rule");
        }
    }

    /// Pops the innermost rule.
    pub fn exit(&mut self, succeeded: bool) {
        let rule = self.stack.pop().unwrap_or(TOP_LEVEL_RULE);
        if self.verbose {
            debug!(depth = self.stack.len() + 1, rule, succeeded, "exit rule");
        }
    }

    /// Innermost active rule name.
    pub fn current(&self) -> &'static str {
        self.stack.last().copied().unwrap_or(TOP_LEVEL_RULE)
    }

    /// Number of active rules.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Active rules, outermost first.
    pub fn rules(&self) -> &[&'static str] {
        &self.stack
    }
}
