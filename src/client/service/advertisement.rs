use dioxus_logger::tracing;

use crate::{
    client::{
        api::{ApiClient, ApiRequest},
        error::ClientError,
        store::session::Session,
    },
    model::advertisement::{AdFilters, AdvertisementDto},
};

/// Public advertisement operations used by the ad slots
#[derive(Clone, PartialEq)]
pub struct AdvertisementService {
    api: ApiClient,
}

impl AdvertisementService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Lists active advertisements matching `filters`, in the order the server returns them.
    ///
    /// # Returns
    /// - `Ok(Vec<AdvertisementDto>)` - Matching advertisements, possibly empty
    /// - `Err(ClientError)` - The request failed; callers decide whether to degrade to no ads
    pub async fn list_advertisements(
        &self,
        filters: &AdFilters,
    ) -> Result<Vec<AdvertisementDto>, ClientError> {
        let request = ApiRequest::get("/advertisements").with_query(filters.to_query());

        self.api.execute_json(request).await
    }

    /// Records one view of an advertisement. Failures are logged and otherwise ignored.
    pub async fn track_view(&self, ad_id: i64) {
        let request = ApiRequest::post(format!("/advertisements/{}/view", ad_id));

        if let Err(e) = self.api.execute(request).await {
            tracing::error!("Error tracking view of advertisement {}: {}", ad_id, e);
        }
    }

    /// Records one click on an advertisement, authenticated when `session` holds a token.
    /// Failures are logged and otherwise ignored.
    pub async fn track_click(&self, ad_id: i64, session: &Session) {
        let request = match ApiRequest::post(format!("/advertisements/{}/click", ad_id))
            .with_bearer(session.token())
            .with_json(&serde_json::json!({}))
        {
            Ok(request) => request,
            Err(e) => {
                tracing::error!("Error tracking click on advertisement {}: {}", ad_id, e);
                return;
            }
        };

        if let Err(e) = self.api.execute(request).await {
            tracing::error!("Error tracking click on advertisement {}: {}", ad_id, e);
        }
    }
}

#[cfg(test)]
mod tests;
