use serde::{Deserialize, Serialize};

/// A campaign record as exchanged with the campaigns service.
///
/// Dates are kept as the strings the backend hands out; the client never
/// interprets them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Campaign {
    pub title: String,
    pub description: String,
    pub start_date: String,
    pub end_date: String,
}

impl Campaign {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        start_date: impl Into<String>,
        end_date: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            start_date: start_date.into(),
            end_date: end_date.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    Title,
    Description,
    StartDate,
    EndDate,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::Title,
        FormField::Description,
        FormField::StartDate,
        FormField::EndDate,
    ];

    /// Element id of the matching input in the page markup.
    pub fn element_id(self) -> &'static str {
        match self {
            FormField::Title => "title",
            FormField::Description => "description",
            FormField::StartDate => "startDate",
            FormField::EndDate => "endDate",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FormField::Title => "Title",
            FormField::Description => "Description",
            FormField::StartDate => "Start date",
            FormField::EndDate => "End date",
        }
    }
}
