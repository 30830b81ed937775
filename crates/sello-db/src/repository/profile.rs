//! SurrealDB implementation of [`ProfileRepository`].

use chrono::{DateTime, Utc};
use sello_core::error::SelloResult;
use sello_core::models::profile::{CreateProfile, Profile, ProfileRole, UpdateProfile};
use sello_core::repository::{PaginatedResult, Pagination, ProfileRepository};
use surrealdb::{Connection, Surreal};
use surrealdb_types::SurrealValue;
use uuid::Uuid;

use crate::error::DbError;

fn role_to_str(role: ProfileRole) -> &'static str {
    match role {
        ProfileRole::Customer => "Customer",
        ProfileRole::Staff => "Staff",
        ProfileRole::Admin => "Admin",
    }
}

fn role_from_str(s: &str) -> Result<ProfileRole, DbError> {
    match s {
        "Customer" => Ok(ProfileRole::Customer),
        "Staff" => Ok(ProfileRole::Staff),
        "Admin" => Ok(ProfileRole::Admin),
        other => Err(DbError::Decode(format!("unknown role: {other}"))),
    }
}

/// DB-side row struct for queries where the UUID is already known.
#[derive(Debug, SurrealValue)]
struct ProfileRow {
    email: String,
    role: String,
    client_code: String,
    email_opt_in: bool,
    stamps: u32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl ProfileRow {
    fn into_profile(self, id: Uuid) -> Result<Profile, DbError> {
        Ok(Profile {
            id,
            email: self.email,
            role: role_from_str(&self.role)?,
            client_code: self.client_code,
            email_opt_in: self.email_opt_in,
            stamps: self.stamps,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

/// DB-side row struct that includes the record ID via `meta::id(id)`.
#[derive(Debug, SurrealValue)]
struct ProfileRowWithId {
    record_id: String,
    email: String,
    role: String,
    client_code: String,
    email_opt_in: bool,
    stamps: u32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl ProfileRowWithId {
    fn try_into_profile(self) -> Result<Profile, DbError> {
        let id = Uuid::parse_str(&self.record_id)
            .map_err(|e| DbError::Decode(format!("invalid UUID: {e}")))?;
        Ok(Profile {
            id,
            email: self.email,
            role: role_from_str(&self.role)?,
            client_code: self.client_code,
            email_opt_in: self.email_opt_in,
            stamps: self.stamps,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

/// Row struct for count queries.
#[derive(Debug, SurrealValue)]
struct CountRow {
    total: u64,
}

/// SurrealDB implementation of the Profile repository.
pub struct SurrealProfileRepository<C: Connection> {
    db: Surreal<C>,
}

impl<C: Connection> Clone for SurrealProfileRepository<C> {
    fn clone(&self) -> Self {
        Self {
            db: self.db.clone(),
        }
    }
}

impl<C: Connection> SurrealProfileRepository<C> {
    pub fn new(db: Surreal<C>) -> Self {
        Self { db }
    }

    /// Apply a signed stamp delta and decode the returned row.
    async fn adjust_stamps(&self, id: Uuid, query: &'static str, count: u32) -> SelloResult<Profile> {
        let id_str = id.to_string();

        let result = self
            .db
            .query(query)
            .bind(("id", id_str.clone()))
            .bind(("count", count))
            .await
            .map_err(DbError::from)?;

        let mut result = result.check().map_err(DbError::from)?;

        let rows: Vec<ProfileRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "profile".into(),
            id: id_str,
        })?;

        Ok(row.into_profile(id)?)
    }
}

impl<C: Connection> ProfileRepository for SurrealProfileRepository<C> {
    async fn create(&self, input: CreateProfile) -> SelloResult<Profile> {
        let id = Uuid::new_v4();
        let id_str = id.to_string();

        let result = self
            .db
            .query(
                "CREATE type::record('profile', $id) SET \
                 email = $email, role = $role, client_code = $client_code, \
                 email_opt_in = true, stamps = 0",
            )
            .bind(("id", id_str.clone()))
            .bind(("email", input.email))
            .bind(("role", role_to_str(input.role).to_string()))
            .bind(("client_code", input.client_code))
            .await
            .map_err(DbError::from)?;

        let mut result = result
            .check()
            .map_err(|e| DbError::from_write("profile", &id_str, e))?;

        let rows: Vec<ProfileRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "profile".into(),
            id: id_str,
        })?;

        Ok(row.into_profile(id)?)
    }

    async fn get_by_id(&self, id: Uuid) -> SelloResult<Profile> {
        let id_str = id.to_string();

        let mut result = self
            .db
            .query("SELECT * FROM type::record('profile', $id)")
            .bind(("id", id_str.clone()))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<ProfileRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "profile".into(),
            id: id_str,
        })?;

        Ok(row.into_profile(id)?)
    }

    async fn get_by_email(&self, email: &str) -> SelloResult<Profile> {
        let email_owned = email.to_string();

        let mut result = self
            .db
            .query(
                "SELECT meta::id(id) AS record_id, * \
                 FROM profile \
                 WHERE email = $email",
            )
            .bind(("email", email_owned.clone()))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<ProfileRowWithId> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "profile".into(),
            id: email_owned,
        })?;

        Ok(row.try_into_profile()?)
    }

    async fn update(&self, id: Uuid, input: UpdateProfile) -> SelloResult<Profile> {
        let id_str = id.to_string();

        let mut sets = Vec::new();
        if input.email.is_some() {
            sets.push("email = $email");
        }
        if input.role.is_some() {
            sets.push("role = $role");
        }
        if input.client_code.is_some() {
            sets.push("client_code = $client_code");
        }
        if input.email_opt_in.is_some() {
            sets.push("email_opt_in = $email_opt_in");
        }
        sets.push("updated_at = time::now()");

        let query = format!(
            "UPDATE type::record('profile', $id) SET {}",
            sets.join(", ")
        );

        let mut builder = self.db.query(&query).bind(("id", id_str.clone()));

        if let Some(email) = input.email {
            builder = builder.bind(("email", email));
        }
        if let Some(role) = input.role {
            builder = builder.bind(("role", role_to_str(role).to_string()));
        }
        if let Some(client_code) = input.client_code {
            builder = builder.bind(("client_code", client_code));
        }
        if let Some(email_opt_in) = input.email_opt_in {
            builder = builder.bind(("email_opt_in", email_opt_in));
        }

        let result = builder.await.map_err(DbError::from)?;
        let mut result = result
            .check()
            .map_err(|e| DbError::from_write("profile", &id_str, e))?;

        let rows: Vec<ProfileRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "profile".into(),
            id: id_str,
        })?;

        Ok(row.into_profile(id)?)
    }

    async fn delete(&self, id: Uuid) -> SelloResult<()> {
        self.db
            .query("DELETE type::record('profile', $id)")
            .bind(("id", id.to_string()))
            .await
            .map_err(DbError::from)?;

        Ok(())
    }

    async fn list_by_client(
        &self,
        client_code: &str,
        pagination: Pagination,
    ) -> SelloResult<PaginatedResult<Profile>> {
        let code_owned = client_code.to_string();

        let mut count_result = self
            .db
            .query(
                "SELECT count() AS total FROM profile \
                 WHERE client_code = $client_code GROUP ALL",
            )
            .bind(("client_code", code_owned.clone()))
            .await
            .map_err(DbError::from)?;
        let count_rows: Vec<CountRow> = count_result.take(0).map_err(DbError::from)?;
        let total = count_rows.first().map(|r| r.total).unwrap_or(0);

        let mut result = self
            .db
            .query(
                "SELECT meta::id(id) AS record_id, * \
                 FROM profile \
                 WHERE client_code = $client_code \
                 ORDER BY created_at ASC \
                 LIMIT $limit START $offset",
            )
            .bind(("client_code", code_owned))
            .bind(("limit", pagination.limit))
            .bind(("offset", pagination.offset))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<ProfileRowWithId> = result.take(0).map_err(DbError::from)?;

        let items = rows
            .into_iter()
            .map(|row| row.try_into_profile())
            .collect::<Result<Vec<_>, DbError>>()?;

        Ok(PaginatedResult {
            items,
            total,
            offset: pagination.offset,
            limit: pagination.limit,
        })
    }

    async fn credit_stamps(&self, id: Uuid, count: u32) -> SelloResult<Profile> {
        self.adjust_stamps(
            id,
            "UPDATE type::record('profile', $id) SET \
             stamps += $count, updated_at = time::now()",
            count,
        )
        .await
    }

    async fn debit_stamps(&self, id: Uuid, count: u32) -> SelloResult<Profile> {
        self.adjust_stamps(
            id,
            "UPDATE type::record('profile', $id) SET \
             stamps -= $count, updated_at = time::now()",
            count,
        )
        .await
    }

    async fn set_email_opt_in(&self, email: &str, opt_in: bool) -> SelloResult<Profile> {
        let email_owned = email.to_string();

        let result = self
            .db
            .query(
                "UPDATE profile SET \
                 email_opt_in = $opt_in, updated_at = time::now() \
                 WHERE email = $email \
                 RETURN meta::id(id) AS record_id, *",
            )
            .bind(("email", email_owned.clone()))
            .bind(("opt_in", opt_in))
            .await
            .map_err(DbError::from)?;

        let mut result = result.check().map_err(DbError::from)?;

        let rows: Vec<ProfileRowWithId> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "profile".into(),
            id: email_owned,
        })?;

        Ok(row.try_into_profile()?)
    }
}
