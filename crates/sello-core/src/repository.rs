//! Repository trait definitions for data access abstraction.
//!
//! All repository operations are async. Profiles carry their tenant in
//! `client_code`; tenant isolation is enforced by the service layer, which
//! checks the code against the active tenant on every scoped operation.

use uuid::Uuid;

use crate::error::SelloResult;
use crate::models::{
    profile::{CreateProfile, Profile, UpdateProfile},
    shop::{CreateShop, Shop, UpdateShop},
};

/// Pagination parameters for list queries.
#[derive(Debug, Clone)]
pub struct Pagination {
    pub offset: u64,
    pub limit: u64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: 50,
        }
    }
}

/// A paginated result set.
#[derive(Debug, Clone)]
pub struct PaginatedResult<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub offset: u64,
    pub limit: u64,
}

// ---------------------------------------------------------------------------
// Shops (global scope, keyed by tenant code)
// ---------------------------------------------------------------------------

pub trait ShopRepository: Send + Sync {
    fn create(&self, input: CreateShop) -> impl Future<Output = SelloResult<Shop>> + Send;
    fn get_by_code(&self, code: &str) -> impl Future<Output = SelloResult<Shop>> + Send;
    fn update(
        &self,
        code: &str,
        input: UpdateShop,
    ) -> impl Future<Output = SelloResult<Shop>> + Send;
    fn delete(&self, code: &str) -> impl Future<Output = SelloResult<()>> + Send;
    fn list(
        &self,
        pagination: Pagination,
    ) -> impl Future<Output = SelloResult<PaginatedResult<Shop>>> + Send;
}

// ---------------------------------------------------------------------------
// Profiles (keyed by id, unique email)
// ---------------------------------------------------------------------------

pub trait ProfileRepository: Send + Sync {
    fn create(&self, input: CreateProfile) -> impl Future<Output = SelloResult<Profile>> + Send;
    fn get_by_id(&self, id: Uuid) -> impl Future<Output = SelloResult<Profile>> + Send;
    fn get_by_email(&self, email: &str) -> impl Future<Output = SelloResult<Profile>> + Send;
    fn update(
        &self,
        id: Uuid,
        input: UpdateProfile,
    ) -> impl Future<Output = SelloResult<Profile>> + Send;
    fn delete(&self, id: Uuid) -> impl Future<Output = SelloResult<()>> + Send;
    fn list_by_client(
        &self,
        client_code: &str,
        pagination: Pagination,
    ) -> impl Future<Output = SelloResult<PaginatedResult<Profile>>> + Send;

    /// Add `count` stamps to a profile's balance.
    fn credit_stamps(
        &self,
        id: Uuid,
        count: u32,
    ) -> impl Future<Output = SelloResult<Profile>> + Send;

    /// Remove `count` stamps from a profile's balance. Callers must ensure
    /// the balance covers the debit; the schema rejects negative balances.
    fn debit_stamps(
        &self,
        id: Uuid,
        count: u32,
    ) -> impl Future<Output = SelloResult<Profile>> + Send;

    /// Flip the email opt-in flag for the profile with the given email.
    fn set_email_opt_in(
        &self,
        email: &str,
        opt_in: bool,
    ) -> impl Future<Output = SelloResult<Profile>> + Send;
}
