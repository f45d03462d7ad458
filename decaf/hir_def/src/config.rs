/// Which declaration wins when an enclosing and a nested scope bind the same name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScopePrecedence {
    /// The enclosing declaration stays visible, the nested one is hidden.
    #[default]
    OuterWins,
    /// The nested declaration shadows the enclosing one.
    InnerShadows,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckConfig {
    pub precedence: ScopePrecedence,
    /// Emit a diagnostic when a class (indirectly) extends itself. Checking terminates on cyclic
    /// hierarchies regardless of this setting.
    pub report_inheritance_cycles: bool,
}

impl CheckConfig {
    pub fn with_precedence(mut self, precedence: ScopePrecedence) -> CheckConfig {
        self.precedence = precedence;
        self
    }

    pub fn report_inheritance_cycles(mut self) -> CheckConfig {
        self.report_inheritance_cycles = true;
        self
    }
}
