// ABOUTME: Problems noticed during a preview deploy that leave the hosting result usable.
// ABOUTME: The preview command prints them after the channel URLs are known.

/// Warnings gathered by [`Deployer::deploy_preview`](crate::deploy::Deployer::deploy_preview).
#[derive(Default)]
pub struct Diagnostics {
    warnings: Vec<Warning>,
}

impl Diagnostics {
    /// Log the warning at warn level and keep it for the final report.
    pub fn warn(&mut self, warning: Warning) {
        tracing::warn!("{}", warning.message);
        self.warnings.push(warning);
    }

    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// One problem, with the message shown to the user.
#[derive(Debug, Clone)]
pub struct Warning {
    pub kind: WarningKind,
    pub message: String,
}

impl Warning {
    /// The entry point had no discoverable exports.
    pub fn no_exports_discovered(message: impl Into<String>) -> Self {
        Self {
            kind: WarningKind::NoExportsDiscovered,
            message: message.into(),
        }
    }

    /// The channel functions deploy exited cleanly but reported an error.
    pub fn functions_deploy(message: impl Into<String>) -> Self {
        Self {
            kind: WarningKind::FunctionsDeploy,
            message: message.into(),
        }
    }
}

/// What went wrong, for callers that react to specific problems.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningKind {
    /// The channel entry point re-exports nothing.
    NoExportsDiscovered,
    /// The functions deploy after a channel deploy reported `status: "error"`.
    FunctionsDeploy,
}
