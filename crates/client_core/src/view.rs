use shared::domain::Campaign;

use crate::render::render_campaigns;

/// Display region the campaign list is rendered into.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Container {
    inner_html: String,
    block_count: usize,
}

impl Container {
    /// Replaces the whole content with one block per campaign.
    pub fn replace_with(&mut self, campaigns: &[Campaign]) {
        self.inner_html = render_campaigns(campaigns);
        self.block_count = campaigns.len();
    }

    pub fn inner_html(&self) -> &str {
        &self.inner_html
    }

    pub fn block_count(&self) -> usize {
        self.block_count
    }

    pub fn is_empty(&self) -> bool {
        self.inner_html.is_empty()
    }
}
