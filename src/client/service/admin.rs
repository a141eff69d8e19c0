use dioxus_logger::tracing;

use crate::{
    client::{
        api::{ApiClient, ApiRequest},
        error::ClientError,
        store::session::Session,
    },
    model::advertisement::{AdvertisementDto, AdvertisementPayload},
};

/// List state after a mutation that went through
#[derive(Debug, Clone, PartialEq)]
pub enum Refreshed {
    /// The refetched list
    Done(Vec<AdvertisementDto>),
    /// The mutation is applied on the server but the refetch failed
    Stale(ClientError),
}

/// Administrative operations on advertisement records.
///
/// Every call carries the session's bearer token. Without one the request is still sent and
/// the API answers with [`ClientError::Unauthorized`].
///
/// The `*_and_refresh` style helpers refetch the full list only after the mutation succeeded,
/// so a failed mutation never masks its error behind a fresh list. A failed refetch is reported
/// as [`Refreshed::Stale`], never as a failed mutation.
#[derive(Clone, PartialEq)]
pub struct AdvertisementAdmin {
    api: ApiClient,
    session: Session,
}

impl AdvertisementAdmin {
    pub fn new(api: ApiClient, session: Session) -> Self {
        Self { api, session }
    }

    fn authorized(&self, request: ApiRequest) -> ApiRequest {
        request.with_bearer(self.session.token())
    }

    /// Lists every advertisement, including inactive and expired ones
    pub async fn list_all(&self) -> Result<Vec<AdvertisementDto>, ClientError> {
        let request = self.authorized(ApiRequest::get("/advertisements/admin/all"));

        self.api.execute_json(request).await
    }

    pub async fn create(&self, payload: &AdvertisementPayload) -> Result<(), ClientError> {
        let request = self
            .authorized(ApiRequest::post("/advertisements"))
            .with_json(payload)?;

        self.api.execute(request).await?;
        Ok(())
    }

    /// Replaces the editable fields of advertisement `id`
    pub async fn update(&self, id: i64, payload: &AdvertisementPayload) -> Result<(), ClientError> {
        let request = self
            .authorized(ApiRequest::put(format!("/advertisements/{}", id)))
            .with_json(payload)?;

        self.api.execute(request).await?;
        Ok(())
    }

    /// Permanently deletes advertisement `id`
    pub async fn delete(&self, id: i64) -> Result<(), ClientError> {
        let request = self.authorized(ApiRequest::delete(format!("/advertisements/{}", id)));

        self.api.execute(request).await?;
        Ok(())
    }

    /// Flips `is_active` of advertisement `id` on the server
    pub async fn toggle_active(&self, id: i64) -> Result<(), ClientError> {
        let request = self
            .authorized(ApiRequest::patch(format!("/advertisements/{}/toggle", id)))
            .with_json(&serde_json::json!({}))?;

        self.api.execute(request).await?;
        Ok(())
    }

    async fn refresh(&self) -> Refreshed {
        match self.list_all().await {
            Ok(ads) => Refreshed::Done(ads),
            Err(e) => {
                tracing::error!("Error refreshing advertisements: {}", e);
                Refreshed::Stale(e)
            }
        }
    }

    /// Creates a new advertisement, or updates `editing` when set, then refetches the list.
    ///
    /// # Returns
    /// - `Ok(Refreshed)` - The save went through, with the outcome of the refresh
    /// - `Err(ClientError)` - The save failed and no refresh was attempted
    pub async fn save(
        &self,
        editing: Option<i64>,
        payload: &AdvertisementPayload,
    ) -> Result<Refreshed, ClientError> {
        let saved = match editing {
            Some(id) => self.update(id, payload).await,
            None => self.create(payload).await,
        };
        saved.inspect_err(|e| tracing::error!("Error saving advertisement: {}", e))?;

        Ok(self.refresh().await)
    }

    /// Deletes advertisement `id` when the operator confirmed, then refetches the list.
    ///
    /// # Returns
    /// - `Ok(None)` - Not confirmed, no request was sent
    /// - `Ok(Some(Refreshed))` - Deleted, with the outcome of the refresh
    /// - `Err(ClientError)` - The delete failed
    pub async fn delete_confirmed(
        &self,
        id: i64,
        confirmed: bool,
    ) -> Result<Option<Refreshed>, ClientError> {
        if !confirmed {
            return Ok(None);
        }

        self.delete(id)
            .await
            .inspect_err(|e| tracing::error!("Error deleting advertisement {}: {}", id, e))?;

        Ok(Some(self.refresh().await))
    }

    /// Toggles advertisement `id`, then refetches the list
    pub async fn toggle_and_refresh(&self, id: i64) -> Result<Refreshed, ClientError> {
        self.toggle_active(id)
            .await
            .inspect_err(|e| tracing::error!("Error toggling advertisement {}: {}", id, e))?;

        Ok(self.refresh().await)
    }
}

#[cfg(test)]
mod tests;
