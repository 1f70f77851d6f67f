//! Core types used throughout the system
//!
//! These are fundamental type aliases used by all modules.
//! They provide semantic meaning and enable future type evolution.

/// Account ID - globally unique identifier for an account.
///
/// # Constraints:
/// - **Immutable**: Once assigned, NEVER changes
/// - **Non-empty**: Minted by callers (e.g. "Id-123"), never blank
/// - **Totally ordered**: The `Ord` on the underlying string is the fixed
///   global order the lock registry uses to sequence pairwise acquisition
pub type AccountId = String;
