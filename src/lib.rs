//! # Onboarding - Authentication and profile bootstrap for the onboarding screens
//!
//! This is a facade crate that re-exports all public APIs from the onboarding components.
//! The UI layer drives an [`OnboardingOrchestrator`] and renders its results; everything
//! below it is reachable from here.
//!
//! ## Structure
//!
//! - **Core domain types**: `Email`, `Password`, `UserRecord`, `Identity`, forms, etc.
//! - **Ports**: `AuthSession`, `ProfileStore`
//! - **Use cases**: `LoginUseCase`, `RegisterUseCase`, `FederatedLoginUseCase`, etc.
//! - **Orchestrator**: `OnboardingOrchestrator` - the main entry point
//! - **Adapters**: in-memory and Firebase backends, configuration, telemetry

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types and value objects
pub mod core {
    pub use onboarding_core::*;
}

// Re-export most commonly used core types at the root level
pub use onboarding_core::{
    Email, FederatedCredential, FederatedProvider, FormViewModel, FullName, Identity, LoginForm,
    Password, RegistrationForm, RequiredField, ResetPasswordForm, Session, SessionHandle, UserId,
    UserRecord, ValidationError,
};

// ============================================================================
// Ports
// ============================================================================

/// Port trait definitions
pub mod ports {
    pub use onboarding_core::{AuthError, AuthSession, ProfileStore, ProfileStoreError};
}

pub use ports::{AuthError, AuthSession, ProfileStore, ProfileStoreError};

// ============================================================================
// Use Cases (Application Layer)
// ============================================================================

/// Application use cases
pub mod use_cases {
    pub use onboarding_application::*;
}

pub use onboarding_application::{
    FederatedLoginOutcome, OnboardingError, OnboardingOrchestrator, PendingProfile,
};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// Identity provider implementations
    pub mod identity {
        pub use onboarding_adapters::identity::*;
    }

    /// Profile store implementations
    pub mod persistence {
        pub use onboarding_adapters::persistence::*;
    }

    /// Configuration
    pub mod config {
        pub use onboarding_adapters::config::*;
    }

    /// Tracing and error report setup
    pub mod telemetry {
        pub use onboarding_adapters::telemetry::*;
    }
}

pub use onboarding_adapters::{
    configure_firebase,
    identity::{FirebaseAuthSession, HashMapAuthSession},
    persistence::{FirebaseProfileStore, HashMapProfileStore},
};

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing the port traits
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};
