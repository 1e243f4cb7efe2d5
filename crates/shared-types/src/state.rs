use crate::error::AppError;

/// Submit state of a form.
///
/// `Idle → Submitting → Success | Error`; a new submit may start from any
/// state except `Submitting`.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum FormStatus {
    #[default]
    Idle,
    Submitting,
    Success(String),
    Error(String),
}

impl FormStatus {
    /// Move to `Submitting`. Returns `false` (and changes nothing) when a
    /// submit is already in flight.
    pub fn begin_submit(&mut self) -> bool {
        if self.is_busy() {
            return false;
        }
        *self = FormStatus::Submitting;
        true
    }

    pub fn succeed(&mut self, message: impl Into<String>) {
        *self = FormStatus::Success(message.into());
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        *self = FormStatus::Error(message.into());
    }

    /// Record a failed submit with the error's inline message.
    pub fn fail_with(&mut self, err: &AppError) {
        self.fail(err.user_message());
    }

    pub fn is_busy(&self) -> bool {
        matches!(self, FormStatus::Submitting)
    }

    /// Whether the form's controls take input. A submit in flight and a
    /// success waiting for its redirect both lock the form.
    pub fn accepts_input(&self) -> bool {
        matches!(self, FormStatus::Idle | FormStatus::Error(_))
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FormStatus::Error(msg) => Some(msg),
            _ => None,
        }
    }

    pub fn success(&self) -> Option<&str> {
        match self {
            FormStatus::Success(msg) => Some(msg),
            _ => None,
        }
    }
}

/// Fetch state of a dashboard.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum LoadState<T> {
    #[default]
    Loading,
    Loaded(T),
    Failed(AppError),
}
