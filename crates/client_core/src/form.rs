use shared::domain::{Campaign, FormField};

/// Values currently entered in the create form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CampaignForm {
    title: String,
    description: String,
    start_date: String,
    end_date: String,
}

impl CampaignForm {
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        *self.slot_mut(field) = value.into();
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Title => &self.title,
            FormField::Description => &self.description,
            FormField::StartDate => &self.start_date,
            FormField::EndDate => &self.end_date,
        }
    }

    pub fn to_campaign(&self) -> Campaign {
        Campaign {
            title: self.title.clone(),
            description: self.description.clone(),
            start_date: self.start_date.clone(),
            end_date: self.end_date.clone(),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_blank(&self) -> bool {
        FormField::ALL.iter().all(|field| self.get(*field).is_empty())
    }

    fn slot_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Title => &mut self.title,
            FormField::Description => &mut self.description,
            FormField::StartDate => &mut self.start_date,
            FormField::EndDate => &mut self.end_date,
        }
    }
}

impl From<&Campaign> for CampaignForm {
    fn from(campaign: &Campaign) -> Self {
        Self {
            title: campaign.title.clone(),
            description: campaign.description.clone(),
            start_date: campaign.start_date.clone(),
            end_date: campaign.end_date.clone(),
        }
    }
}
