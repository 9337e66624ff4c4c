use crate::ShuntError;

/// Resource limits to prevent abuse and keep conversion memory predictable
///
/// These limits protect against malicious inputs while being generous enough
/// for all legitimate use cases.
#[derive(Debug, Clone)]
pub struct ResourceLimits {
    /// Maximum expression size in bytes
    /// Real usage: ~50 bytes, Limit: 64KB (1000x)
    pub max_expression_bytes: usize,

    /// Maximum number of parenthesis groups open at once, counting the
    /// implicit group around the whole expression
    /// Real usage: ~3 levels, Limit: 100 (30x+)
    pub max_nesting_depth: usize,
}

impl Default for ResourceLimits {
    fn default() -> Self {
        Self {
            max_expression_bytes: 64 * 1024, // 64 KB
            max_nesting_depth: 100,
        }
    }
}

impl ResourceLimits {
    /// Create a new ResourceLimits with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn check_expression_size(&self, expression: &str) -> Result<(), ShuntError> {
        if expression.len() > self.max_expression_bytes {
            return Err(ShuntError::ResourceLimitExceeded {
                limit_name: "max_expression_bytes".to_string(),
                limit_value: self.max_expression_bytes.to_string(),
                actual_value: expression.len().to_string(),
                suggestion: format!(
                    "Shorten the expression to {} bytes or less",
                    self.max_expression_bytes
                ),
            });
        }
        Ok(())
    }

    pub(crate) fn check_nesting_depth(&self, depth: usize) -> Result<(), ShuntError> {
        if depth > self.max_nesting_depth {
            return Err(ShuntError::ResourceLimitExceeded {
                limit_name: "max_nesting_depth".to_string(),
                limit_value: self.max_nesting_depth.to_string(),
                actual_value: depth.to_string(),
                suggestion: format!(
                    "Reduce parenthesis nesting to {} levels or fewer",
                    self.max_nesting_depth
                ),
            });
        }
        Ok(())
    }
}
