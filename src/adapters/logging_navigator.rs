use crate::ports::navigator::Navigator;

/// Navigator for headless runs: records the route change in the log and
/// does nothing else.
#[derive(Debug, Default)]
pub struct LoggingNavigator;

impl Navigator for LoggingNavigator {
    fn navigate(&self, path: &str) {
        tracing::info!(path, "navigating");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigate_accepts_any_path() {
        let navigator = LoggingNavigator;
        navigator.navigate("/checkout");
        navigator.navigate("/dashboard");
    }
}
