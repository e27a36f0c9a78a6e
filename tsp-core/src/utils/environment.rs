use crate::utils::Quota;
use std::sync::Arc;

/// A logger type which is called with various information regarding the work done by the solvers.
pub type InfoLogger = Arc<dyn Fn(&str) + Send + Sync>;

/// Keeps track of environment specific information which influences algorithm behavior.
#[derive(Clone)]
pub struct Environment {
    /// An information logger.
    pub logger: InfoLogger,

    /// An optional computational quota which is checked by long running searches.
    pub quota: Option<Arc<dyn Quota + Send + Sync>>,
}

impl Environment {
    /// Creates an instance of `Environment` with the given logger and quota.
    pub fn new(logger: InfoLogger, quota: Option<Arc<dyn Quota + Send + Sync>>) -> Self {
        Self { logger, quota }
    }

    /// Returns true if the quota is specified and reached.
    pub fn is_quota_reached(&self) -> bool {
        self.quota.as_ref().is_some_and(|quota| quota.is_reached())
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self { logger: Arc::new(|msg: &str| println!("{msg}")), quota: None }
    }
}
