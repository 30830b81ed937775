//! Loyalty service — card status, stamp crediting, reward redemption,
//! and unsubscribe orchestration.
//!
//! Every tenant-scoped operation takes the active tenant code explicitly
//! and checks the involved profiles against it before touching anything.
//! Authorization is enforced here, not assumed from storage policies.

use sello_core::error::{SelloError, SelloResult};
use sello_core::loyalty::{RewardProgress, reward_progress};
use sello_core::models::config::Rules;
use sello_core::models::profile::Profile;
use sello_core::repository::ProfileRepository;
use tracing::info;
use uuid::Uuid;

use crate::error::LoyaltyError;
use crate::token;

/// Upper bound on stamps credited in a single scan.
pub const MAX_STAMPS_PER_CREDIT: u32 = 10;

/// Loyalty service.
///
/// Generic over the profile repository so this layer has no dependency
/// on the database crate.
#[derive(Clone)]
pub struct LoyaltyService<P: ProfileRepository> {
    profiles: P,
}

impl<P: ProfileRepository> LoyaltyService<P> {
    pub fn new(profiles: P) -> Self {
        Self { profiles }
    }

    /// Current card status for a profile of the active tenant.
    pub async fn card_status(
        &self,
        tenant_code: &str,
        profile_id: Uuid,
        rules: &Rules,
    ) -> SelloResult<RewardProgress> {
        let profile = self.profiles.get_by_id(profile_id).await?;
        require_same_tenant(&profile, tenant_code)?;

        Ok(reward_progress(profile.stamps, rules.stamps_per_reward))
    }

    /// Credit stamps to a customer's card.
    ///
    /// The actor must be staff of the active tenant; the customer must
    /// belong to the same tenant; the count must be between 1 and
    /// [`MAX_STAMPS_PER_CREDIT`].
    pub async fn credit_stamps(
        &self,
        tenant_code: &str,
        actor_id: Uuid,
        profile_id: Uuid,
        count: u32,
        rules: &Rules,
    ) -> SelloResult<RewardProgress> {
        if count == 0 || count > MAX_STAMPS_PER_CREDIT {
            return Err(LoyaltyError::InvalidCount(format!(
                "count must be between 1 and {MAX_STAMPS_PER_CREDIT}, got {count}"
            ))
            .into());
        }

        self.require_staff_of(tenant_code, actor_id).await?;

        let customer = self.profiles.get_by_id(profile_id).await?;
        require_same_tenant(&customer, tenant_code)?;

        let updated = self.profiles.credit_stamps(profile_id, count).await?;

        info!(
            tenant = tenant_code,
            actor = %actor_id,
            profile = %profile_id,
            count,
            stamps = updated.stamps,
            "Stamps credited"
        );

        Ok(reward_progress(updated.stamps, rules.stamps_per_reward))
    }

    /// Redeem a reward: checks eligibility, then debits a full card's
    /// worth of stamps so overflow stamps carry over to the next card.
    pub async fn redeem_reward(
        &self,
        tenant_code: &str,
        actor_id: Uuid,
        profile_id: Uuid,
        rules: &Rules,
    ) -> SelloResult<RewardProgress> {
        self.require_staff_of(tenant_code, actor_id).await?;

        let customer = self.profiles.get_by_id(profile_id).await?;
        require_same_tenant(&customer, tenant_code)?;

        let progress = reward_progress(customer.stamps, rules.stamps_per_reward);
        if !progress.reward_ready {
            return Err(LoyaltyError::NotEligible {
                stamps: customer.stamps,
                required: rules.stamps_per_reward,
            }
            .into());
        }

        let updated = self
            .profiles
            .debit_stamps(profile_id, rules.stamps_per_reward)
            .await?;

        info!(
            tenant = tenant_code,
            actor = %actor_id,
            profile = %profile_id,
            stamps = updated.stamps,
            "Reward redeemed"
        );

        Ok(reward_progress(updated.stamps, rules.stamps_per_reward))
    }

    /// Handle an unsubscribe token: decode it and flip the opt-in flag.
    ///
    /// Unknown emails are treated as already unsubscribed so the flow is
    /// idempotent and does not leak which addresses exist. Returns the
    /// decoded email for the confirmation page.
    pub async fn unsubscribe(&self, raw_token: &str) -> SelloResult<String> {
        let email = token::decode_unsubscribe_token(raw_token)?;

        match self.profiles.set_email_opt_in(&email, false).await {
            Ok(_) => {
                info!(email, "Email opt-out recorded");
                Ok(email)
            }
            Err(SelloError::NotFound { .. }) => Ok(email),
            Err(e) => Err(e),
        }
    }

    /// Load the actor and require a staff role within the active tenant.
    async fn require_staff_of(&self, tenant_code: &str, actor_id: Uuid) -> SelloResult<Profile> {
        let actor = self.profiles.get_by_id(actor_id).await?;
        require_same_tenant(&actor, tenant_code)?;

        if !actor.role.is_staff() {
            return Err(LoyaltyError::NotStaff {
                role: format!("{:?}", actor.role),
            }
            .into());
        }

        Ok(actor)
    }
}

fn require_same_tenant(profile: &Profile, tenant_code: &str) -> SelloResult<()> {
    if profile.client_code != tenant_code {
        return Err(LoyaltyError::TenantMismatch {
            tenant: tenant_code.to_string(),
        }
        .into());
    }
    Ok(())
}
