/// Shown for every failed sign-in, whatever the backend's reason.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid username or password";

/// Shown after every recovery request, registered email or not.
pub const RECOVERY_SENT_MESSAGE: &str = "If the email exists, a recovery link has been sent.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginView {
    #[default]
    SignIn,
    Recovery,
}

/// State of the sign-in card.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LoginFlow {
    pub view: LoginView,
    pub error: Option<String>,
    pub recovery_message: Option<String>,
    pub submitting: bool,
}

impl LoginFlow {
    /// "Forgot your password?"
    pub fn show_recovery(&mut self) {
        self.view = LoginView::Recovery;
    }

    /// "Back to Sign In": also drops any recovery confirmation.
    pub fn back_to_sign_in(&mut self) {
        self.view = LoginView::SignIn;
        self.recovery_message = None;
    }

    pub fn begin_sign_in(&mut self) {
        self.error = None;
        self.submitting = true;
    }

    pub fn sign_in_succeeded(&mut self) {
        self.submitting = false;
    }

    /// The reason is deliberately discarded: unknown user and wrong
    /// password must look the same.
    pub fn sign_in_failed(&mut self) {
        self.submitting = false;
        self.error = Some(INVALID_CREDENTIALS_MESSAGE.to_string());
    }

    /// Completes a recovery request. The outcome of the backend call is not
    /// an input, so the message cannot reveal whether the email exists.
    pub fn recovery_requested(&mut self) {
        self.recovery_message = Some(RECOVERY_SENT_MESSAGE.to_string());
    }
}
