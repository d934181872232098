//! Runtime limits for parse execution.

/// Resource ceilings for a single parse call.
///
/// Fuel is charged once per symbol-set attempt - the only construct that can
/// iterate without consuming recursion depth - and the recursion limit is
/// charged at rule-set entry, so a left-recursive grammar reports
/// [`ParseError::RecursionLimitExceeded`] instead of exhausting the call
/// stack.
///
/// [`ParseError::RecursionLimitExceeded`]: super::ParseError::RecursionLimitExceeded
#[derive(Clone, Copy, Debug)]
pub struct Limits {
    /// Maximum symbol-set attempts (default: 1,000,000).
    pub(crate) exec_fuel: u32,
    /// Maximum nested rule-set entries (default: 1,024).
    pub(crate) recursion_limit: u32,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            exec_fuel: 1_000_000,
            recursion_limit: 1024,
        }
    }
}

impl Limits {
    /// Create new limits with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the execution fuel limit.
    pub fn exec_fuel(mut self, fuel: u32) -> Self {
        self.exec_fuel = fuel;
        self
    }

    /// Set the recursion limit.
    pub fn recursion_limit(mut self, limit: u32) -> Self {
        self.recursion_limit = limit;
        self
    }

    pub fn get_exec_fuel(&self) -> u32 {
        self.exec_fuel
    }

    pub fn get_recursion_limit(&self) -> u32 {
        self.recursion_limit
    }
}
