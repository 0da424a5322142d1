//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Validation
// =============================================================================

/// Minimum password length requirement (sign-up only)
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Minimum name length requirement
pub const MIN_NAME_LENGTH: usize = 2;

/// Maximum name length requirement
pub const MAX_NAME_LENGTH: usize = 50;

// =============================================================================
// Password Strength Scoring
// =============================================================================

/// Points awarded per satisfied password check
pub const POINTS_PER_CHECK: u8 = 20;

/// Scores below this are classified as Weak
pub const WEAK_THRESHOLD: u8 = 40;

/// Scores at or above this are classified as Strong
pub const STRONG_THRESHOLD: u8 = 80;

// =============================================================================
// Simulated Backend
// =============================================================================

/// Simulated sign-in round trip in milliseconds
pub const DEFAULT_SIGN_IN_DELAY_MS: u64 = 1500;

/// Simulated account creation round trip in milliseconds
pub const DEFAULT_SIGN_UP_DELAY_MS: u64 = 2000;

/// How long a success state is displayed before the flow resets
pub const DEFAULT_SUCCESS_DISPLAY_MS: u64 = 3000;

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 3000;
