use contact_form_config::Config;
use contact_form_models::state::FormState;
use contact_form_templates_contracts::{ContactFormTemplate, TemplateService};

use crate::environment;

/// Renders the page of a freshly opened contact form.
pub fn render(config: &Config) -> anyhow::Result<String> {
    let template = ContactFormTemplate::new(config.form.title.as_str(), &FormState::default());
    environment::templates()?.render(&template)
}
