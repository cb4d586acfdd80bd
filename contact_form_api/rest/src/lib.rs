use std::{net::IpAddr, sync::Arc};

use axum::Router;
use contact_form_core_contracts::ContactFormService;
use contact_form_templates_contracts::TemplateService;
use tokio::net::TcpListener;
use tracing::info;

mod middlewares;
mod models;
mod routes;


#[derive(Debug, Clone)]
pub struct RestServer<ContactForm, Templates> {
    contact_form: ContactForm,
    templates: Templates,
    config: RestServerConfig,
}

#[derive(Debug, Clone)]
pub struct RestServerConfig {
    /// Heading of the rendered contact form page.
    pub title: String,
}

impl<ContactForm, Templates> RestServer<ContactForm, Templates>
where
    ContactForm: ContactFormService,
    Templates: TemplateService,
{
    pub fn new(contact_form: ContactForm, templates: Templates, config: RestServerConfig) -> Self {
        Self {
            contact_form,
            templates,
            config,
        }
    }

    pub async fn serve(self, host: IpAddr, port: u16) -> anyhow::Result<()> {
        let router = self.router();
        let listener = TcpListener::bind((host, port)).await?;
        info!("Listening on http://{}", listener.local_addr()?);
        axum::serve(listener, router).await.map_err(Into::into)
    }

    fn router(self) -> Router<()> {
        let contact_form = routes::contact_form::ContactFormRouteState::new(
            self.contact_form,
            self.templates,
            self.config.title,
        );

        let router = Router::new()
            .merge(routes::health::router())
            .merge(routes::contact_form::router(Arc::new(contact_form)));

        middlewares::trace::add(router)
    }
}
