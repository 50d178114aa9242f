pub mod orchestrator;
pub mod use_cases;

#[cfg(test)]
mod mocks;

pub use orchestrator::{OnboardingError, OnboardingOrchestrator};
pub use use_cases::{
    fetch_profile::{FetchProfileError, FetchProfileUseCase},
    federated_login::{FederatedLoginError, FederatedLoginOutcome, FederatedLoginUseCase},
    login::{LoginError, LoginUseCase},
    mark_onboarding_seen::{MarkOnboardingSeenError, MarkOnboardingSeenUseCase},
    register::{
        CompleteRegistrationError, CompleteRegistrationUseCase, PendingProfile, RegisterError,
        RegisterUseCase,
    },
    reset_password::{ResetPasswordError, ResetPasswordUseCase},
};
