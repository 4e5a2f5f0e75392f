// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application.

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Default auto-dismiss delay in milliseconds. `<= 0` means sticky.
pub const DEFAULT_NOTIFICATION_DURATION_MS: i64 = 5000;

/// Default interval between auto-dismiss checks (in milliseconds).
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 100;

/// Minimum tick interval, roughly one frame at 60 Hz.
pub const MIN_TICK_INTERVAL_MS: u64 = 16;

/// Maximum tick interval.
pub const MAX_TICK_INTERVAL_MS: u64 = 1000;

/// Whether hovering a toast pauses its countdown by default.
pub const DEFAULT_PAUSE_ON_HOVER: bool = true;

/// Whether Escape closes the newest toast by default.
pub const DEFAULT_ESCAPE_DISMISSES: bool = true;
