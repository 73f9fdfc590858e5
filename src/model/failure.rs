use std::fmt;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum FailureKind {
    Fetch,
    Render,
}

/// One failed item from a batch run. Batches collect these and keep going;
/// nothing inside the per-item loop is fatal.
#[derive(Debug, Clone)]
pub struct Failure {
    pub item: String,
    pub kind: FailureKind,
    pub message: String,
}

impl Failure {
    pub fn fetch(item: impl ToString, message: impl ToString) -> Self {
        Self::new(item, FailureKind::Fetch, message)
    }

    pub fn render(item: impl ToString, message: impl ToString) -> Self {
        Self::new(item, FailureKind::Render, message)
    }

    fn new(item: impl ToString, kind: FailureKind, message: impl ToString) -> Self {
        Self {
            item: item.to_string(),
            kind,
            message: message.to_string(),
        }
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.item, self.message)
    }
}

/// The `Failed for: [...]` line the batches end with.
pub fn failed_items(failures: &[Failure]) -> Vec<&str> {
    failures.iter().map(|f| f.item.as_str()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_kind_and_item() {
        let failure = Failure::fetch("numpy", "HTTP 502");
        assert_eq!(failure.kind, FailureKind::Fetch);
        assert_eq!(failure.to_string(), "numpy: HTTP 502");
        assert_eq!(failed_items(&[failure]), vec!["numpy"]);
    }
}
