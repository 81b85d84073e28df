//! HTML rendering for campaign records.
//!
//! Values are interpolated as-is. Markup coming back from the service ends up
//! in the page unescaped.

use std::fmt::Write as _;

use shared::domain::{Campaign, FormField};

pub fn render_campaign(campaign: &Campaign) -> String {
    format!(
        "\n    <div class=\"campaign\">\
         \n        <h3>{}</h3>\
         \n        <p>{}</p>\
         \n        <p><strong>Start:</strong> {} | <strong>End:</strong> {}</p>\
         \n    </div>\n",
        campaign.title, campaign.description, campaign.start_date, campaign.end_date
    )
}

/// Concatenates one block per campaign, in order.
pub fn render_campaigns(campaigns: &[Campaign]) -> String {
    campaigns.iter().map(render_campaign).collect()
}

/// Full page: the create form followed by the campaigns container.
pub fn render_document(container_html: &str) -> String {
    let mut inputs = String::new();
    for field in FormField::ALL {
        let kind = match field {
            FormField::StartDate | FormField::EndDate => "date",
            FormField::Title | FormField::Description => "text",
        };
        let _ = write!(
            inputs,
            "\n      <input type=\"{kind}\" id=\"{id}\" placeholder=\"{label}\" required />",
            id = field.element_id(),
            label = field.label(),
        );
    }

    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n  <meta charset=\"UTF-8\" />\n  <title>Campaigns</title>\n</head>\n\
         <body>\n  <h1>Campaigns</h1>\n\
         \x20 <form id=\"campaignForm\">{inputs}\n      <button type=\"submit\">Add campaign</button>\n  </form>\n\
         \x20 <div id=\"campaigns\">{container_html}</div>\n\
         </body>\n\
         </html>\n"
    )
}
