//! User administration API operations.

use super::EventhubClient;
use crate::error::Result;
use eventhub_core::models::{Role, SetActiveRequest, UpdateRoleRequest, User};
use uuid::Uuid;

impl EventhubClient {
    /// List all users.
    pub async fn list_users(&self) -> Result<Vec<User>> {
        let response = self.get("/api/users").send().await?;
        self.handle_response(response).await
    }

    /// Get user by ID.
    pub async fn get_user(&self, id: Uuid) -> Result<User> {
        let response = self.get(&format!("/api/users/{}", id)).send().await?;
        self.handle_response(response).await
    }

    /// Change a user's role.
    pub async fn set_user_role(&self, id: Uuid, role: Role) -> Result<User> {
        let response = self
            .put(&format!("/api/users/{}/role", id))
            .json(&UpdateRoleRequest { role })
            .send()
            .await?;
        let user = self.handle_response(response).await?;
        tracing::info!(user_id = %id, %role, "user role changed");
        Ok(user)
    }

    /// Activate or deactivate a user.
    pub async fn set_user_active(&self, id: Uuid, active: bool) -> Result<User> {
        let response = self
            .put(&format!("/api/users/{}/active", id))
            .json(&SetActiveRequest { active })
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Delete user by ID.
    pub async fn delete_user(&self, id: Uuid) -> Result<()> {
        let response = self.delete(&format!("/api/users/{}", id)).send().await?;
        self.handle_empty_response(response).await
    }
}
