//! The campaigns page: list container, create form, and the handlers that
//! tie them to a [`CampaignApi`].

use std::sync::Arc;

use shared::{
    domain::{Campaign, FormField},
    error::{Operation, OperationFailure},
};
use tokio::sync::{broadcast, Mutex, RwLock};
use tracing::{error, info};

use crate::{error::CampaignClientError, form::CampaignForm, view::Container, CampaignApi};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEvent {
    CampaignsRendered { count: usize },
    CampaignCreated { campaign: Campaign },
    Failed(OperationFailure),
}

pub struct CampaignPage {
    api: Arc<dyn CampaignApi>,
    container: RwLock<Container>,
    form: Mutex<CampaignForm>,
    events: broadcast::Sender<PageEvent>,
}

impl CampaignPage {
    pub fn new(api: Arc<dyn CampaignApi>) -> Arc<Self> {
        let (events, _) = broadcast::channel(64);
        Arc::new(Self {
            api,
            container: RwLock::new(Container::default()),
            form: Mutex::new(CampaignForm::default()),
            events,
        })
    }

    /// Initial population of the container.
    pub async fn load(&self) {
        self.refresh().await;
    }

    /// Fetches the campaign list and re-renders the container from it.
    ///
    /// Failures are logged and broadcast; the container keeps whatever it
    /// showed before.
    pub async fn refresh(&self) {
        match self.api.list_campaigns().await {
            Ok(campaigns) => {
                let count = campaigns.len();
                self.container.write().await.replace_with(&campaigns);
                info!(count, "rendered campaigns");
                self.emit(PageEvent::CampaignsRendered { count });
            }
            Err(err) => {
                error!(error = %err, "error fetching campaigns");
                self.fail(Operation::ListCampaigns, &err);
            }
        }
    }

    pub async fn fill(&self, field: FormField, value: impl Into<String>) {
        self.form.lock().await.set(field, value);
    }

    pub async fn form(&self) -> CampaignForm {
        self.form.lock().await.clone()
    }

    /// Handles a form submission: posts the entered campaign, then refreshes
    /// the list and clears the form. A failed post leaves the form as is.
    pub async fn submit(&self) {
        let campaign = self.form.lock().await.to_campaign();

        if let Err(err) = self.api.create_campaign(&campaign).await {
            error!(error = %err, title = %campaign.title, "error adding campaign");
            self.fail(Operation::CreateCampaign, &err);
            return;
        }

        info!(title = %campaign.title, "campaign submitted");
        self.refresh().await;
        self.form.lock().await.reset();
        self.emit(PageEvent::CampaignCreated { campaign });
    }

    pub async fn container_html(&self) -> String {
        self.container.read().await.inner_html().to_string()
    }

    pub async fn rendered_count(&self) -> usize {
        self.container.read().await.block_count()
    }

    pub fn subscribe_events(&self) -> broadcast::Receiver<PageEvent> {
        self.events.subscribe()
    }

    fn fail(&self, operation: Operation, err: &CampaignClientError) {
        self.emit(PageEvent::Failed(OperationFailure::new(
            operation,
            err.kind(),
            err.to_string(),
        )));
    }

    fn emit(&self, event: PageEvent) {
        // No subscribers is the normal case for headless use.
        let _ = self.events.send(event);
    }
}
