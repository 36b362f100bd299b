//! Profile repository trait.
//!
//! Defines the interface for profile persistence operations.

use super::model::Profile;
use crate::error::Result;

/// An abstract repository for managing profile persistence.
///
/// This trait defines the contract for persisting and retrieving onboarding
/// profiles, decoupling the pipeline from the specific storage mechanism
/// (e.g., reactive store, database, remote API).
#[async_trait::async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Finds the profile owned by a user.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Profile))`: Profile found
    /// - `Ok(None)`: The user has not completed onboarding
    /// - `Err(DishaError)`: Error if retrieval fails
    async fn find_by_user(&self, user_id: &str) -> Result<Option<Profile>>;

    /// Saves a user's profile, replacing any existing one.
    ///
    /// Invoked once at onboarding completion; there is no incremental
    /// update path afterward.
    ///
    /// # Returns
    ///
    /// - `Ok(())`: Profile saved successfully
    /// - `Err(DishaError)`: Error if save fails
    async fn save(&self, user_id: &str, profile: &Profile) -> Result<()>;
}
