use crate::error::{Result, TreeError};

#[derive(Clone, Debug)]
pub struct TreeParams {
    pub max_depth: u16,
    pub min_size: usize,
}

impl Default for TreeParams {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeParams {
    pub fn new() -> Self {
        Self {
            max_depth: 10,
            min_size: 1,
        }
    }

    pub fn set_max_depth(&mut self, max_depth: u16) -> Result<()> {
        if max_depth < 1 {
            return Err(TreeError::InvalidParameter(
                "max_depth".into(),
                "The maximum depth must be greater than 0.".into(),
            ));
        }
        self.max_depth = max_depth;
        Ok(())
    }

    /// Nodes holding at most `min_size` rows become leaves. 0 disables the rule.
    pub fn set_min_size(&mut self, min_size: usize) {
        self.min_size = min_size;
    }

    pub fn max_depth(&self) -> u16 {
        self.max_depth
    }

    pub fn min_size(&self) -> usize {
        self.min_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = TreeParams::default();
        assert_eq!(params.max_depth(), 10);
        assert_eq!(params.min_size(), 1);
    }

    #[test]
    fn test_set_max_depth() {
        let mut params = TreeParams::new();
        assert!(params.set_max_depth(0).is_err());
        assert_eq!(params.max_depth(), 10);
        params.set_max_depth(3).unwrap();
        assert_eq!(params.max_depth(), 3);
    }

    #[test]
    fn test_set_min_size() {
        let mut params = TreeParams::new();
        params.set_min_size(0);
        assert_eq!(params.min_size(), 0);
    }
}
