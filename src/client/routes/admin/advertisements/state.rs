use chrono::NaiveDate;
use dioxus_logger::tracing;

use crate::{
    client::{
        error::ClientError, routes::admin::advertisements::form::AdvertisementForm,
        service::Refreshed,
    },
    model::advertisement::AdvertisementDto,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DialogState {
    #[default]
    Closed,
    Creating,
    Editing(i64),
}

/// Everything the admin console renders from.
///
/// Results of API calls are folded in through the `apply_*` methods; a failure leaves the
/// current list in place and sets `error` for the banner.
#[derive(Debug, Clone, PartialEq)]
pub struct AdminState {
    pub ads: Vec<AdvertisementDto>,
    pub loading: bool,
    pub dialog: DialogState,
    pub form: AdvertisementForm,
    pub pending_delete: Option<i64>,
    pub error: Option<String>,
}

impl AdminState {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            ads: Vec::new(),
            loading: true,
            dialog: DialogState::Closed,
            form: AdvertisementForm::new(today),
            pending_delete: None,
            error: None,
        }
    }

    pub fn editing_id(&self) -> Option<i64> {
        match self.dialog {
            DialogState::Editing(id) => Some(id),
            DialogState::Closed | DialogState::Creating => None,
        }
    }

    pub fn open_create(&mut self, today: NaiveDate) {
        self.form = AdvertisementForm::new(today);
        self.dialog = DialogState::Creating;
    }

    pub fn open_edit(&mut self, ad: &AdvertisementDto) {
        self.form = AdvertisementForm::from_advertisement(ad);
        self.dialog = DialogState::Editing(ad.id);
    }

    pub fn close_dialog(&mut self) {
        self.dialog = DialogState::Closed;
    }

    pub fn request_delete(&mut self, id: i64) {
        self.pending_delete = Some(id);
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::error!("{}", message);
        self.error = Some(message);
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    /// Folds in a list fetch or a mutation followed by a refetch
    pub fn apply_list(&mut self, result: Result<Vec<AdvertisementDto>, ClientError>) {
        self.loading = false;

        match result {
            Ok(ads) => {
                self.ads = ads;
                self.error = None;
            }
            Err(e) => self.fail(format!("Error loading advertisements: {}", e)),
        }
    }

    /// Folds in the list state after a mutation went through
    fn apply_refreshed(&mut self, refreshed: Refreshed, action: &str) {
        match refreshed {
            Refreshed::Done(ads) => self.apply_list(Ok(ads)),
            Refreshed::Stale(e) => {
                self.loading = false;
                self.fail(format!(
                    "Advertisement {}, but the list could not be refreshed: {}",
                    action, e
                ));
            }
        }
    }

    /// Folds in the outcome of a save; the dialog closes once the save went through, even when
    /// the refresh after it failed
    pub fn apply_saved(&mut self, result: Result<Refreshed, ClientError>) {
        match result {
            Ok(refreshed) => {
                self.close_dialog();
                self.apply_refreshed(refreshed, "saved");
            }
            Err(e) => self.fail(format!("Error saving advertisement: {}", e)),
        }
    }

    pub fn apply_deleted(&mut self, result: Result<Option<Refreshed>, ClientError>) {
        self.pending_delete = None;

        match result {
            Ok(Some(refreshed)) => self.apply_refreshed(refreshed, "deleted"),
            Ok(None) => {}
            Err(e) => self.fail(format!("Error deleting advertisement: {}", e)),
        }
    }

    pub fn apply_toggled(&mut self, result: Result<Refreshed, ClientError>) {
        match result {
            Ok(refreshed) => self.apply_refreshed(refreshed, "updated"),
            Err(e) => self.fail(format!("Error toggling advertisement: {}", e)),
        }
    }
}
