use contact_form_api_rest::RestServerConfig;
use contact_form_config::Config;
use contact_form_core_impl::{validation::FieldValidationServiceImpl, ContactFormServiceImpl};
use contact_form_templates_impl::TemplateServiceImpl;

pub type ContactForm = ContactFormServiceImpl<FieldValidationServiceImpl>;
pub type Templates = TemplateServiceImpl;
pub type RestServer = contact_form_api_rest::RestServer<ContactForm, Templates>;

pub fn contact_form() -> ContactForm {
    ContactFormServiceImpl::new(FieldValidationServiceImpl)
}

pub fn templates() -> anyhow::Result<Templates> {
    TemplateServiceImpl::new()
}

pub fn rest_server(config: &Config) -> anyhow::Result<RestServer> {
    Ok(RestServer::new(
        contact_form(),
        templates()?,
        RestServerConfig {
            title: config.form.title.clone(),
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provide_rest_server() {
        let config = contact_form_config::load_paths(&[]).unwrap();
        rest_server(&config).unwrap();
    }
}
