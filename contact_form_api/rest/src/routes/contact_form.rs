use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing, Form, Json, Router,
};
use contact_form_core_contracts::{ContactFormService, ContactFormSubmitError};
use contact_form_models::{contact::FieldValues, field::FormField, state::FormState};
use contact_form_templates_contracts::{ContactFormTemplate, TemplateService};
use tokio::sync::Mutex;

use super::{error, internal_server_error};
use crate::models::contact_form::{ApiFieldErrors, ApiFieldUpdate};

/// The page is a single form, so all clients edit the same [`FormState`].
#[derive(Debug)]
pub struct ContactFormRouteState<ContactForm, Templates> {
    service: ContactForm,
    templates: Templates,
    title: String,
    form: Mutex<FormState>,
}

impl<ContactForm, Templates> ContactFormRouteState<ContactForm, Templates> {
    pub fn new(service: ContactForm, templates: Templates, title: String) -> Self {
        Self {
            service,
            templates,
            title,
            form: Default::default(),
        }
    }
}

type RouteState<ContactForm, Templates> = State<Arc<ContactFormRouteState<ContactForm, Templates>>>;

pub fn router<ContactForm, Templates>(
    state: Arc<ContactFormRouteState<ContactForm, Templates>>,
) -> Router<()>
where
    ContactForm: ContactFormService,
    Templates: TemplateService,
{
    Router::new()
        .route(
            "/",
            routing::get(show::<ContactForm, Templates>).post(submit::<ContactForm, Templates>),
        )
        .route(
            "/fields/:field",
            routing::post(update_field::<ContactForm, Templates>),
        )
        .route("/state", routing::get(get_state::<ContactForm, Templates>))
        .with_state(state)
}

async fn show<ContactForm, Templates>(State(state): RouteState<ContactForm, Templates>) -> Response
where
    ContactForm: ContactFormService,
    Templates: TemplateService,
{
    let form = state.form.lock().await;
    render(&state, &form, StatusCode::OK)
}

async fn submit<ContactForm, Templates>(
    State(state): RouteState<ContactForm, Templates>,
    Form(values): Form<FieldValues>,
) -> Response
where
    ContactForm: ContactFormService,
    Templates: TemplateService,
{
    let mut form = state.form.lock().await;

    for (field, value) in values.iter() {
        state.service.update_field(&mut form, field, value.into());
    }

    match state.service.submit(&mut form) {
        Ok(_) => render(&state, &form, StatusCode::OK),
        Err(ContactFormSubmitError::Invalid(_)) => {
            render(&state, &form, StatusCode::UNPROCESSABLE_ENTITY)
        }
        Err(ContactFormSubmitError::Other(err)) => internal_server_error(err),
    }
}

async fn update_field<ContactForm, Templates>(
    State(state): RouteState<ContactForm, Templates>,
    Path(field): Path<String>,
    Json(ApiFieldUpdate { value }): Json<ApiFieldUpdate>,
) -> Response
where
    ContactForm: ContactFormService,
    Templates: TemplateService,
{
    let Ok(field) = field.parse::<FormField>() else {
        return error(StatusCode::NOT_FOUND, "Unknown field");
    };

    let mut form = state.form.lock().await;
    state.service.update_field(&mut form, field, value);

    Json(ApiFieldErrors {
        errors: form.errors.clone(),
    })
    .into_response()
}

async fn get_state<ContactForm, Templates>(
    State(state): RouteState<ContactForm, Templates>,
) -> Response
where
    ContactForm: ContactFormService,
    Templates: TemplateService,
{
    let form = state.form.lock().await;
    Json(&*form).into_response()
}

fn render<ContactForm, Templates>(
    state: &ContactFormRouteState<ContactForm, Templates>,
    form: &FormState,
    status: StatusCode,
) -> Response
where
    Templates: TemplateService,
{
    match state
        .templates
        .render(&ContactFormTemplate::new(state.title.as_str(), form))
    {
        Ok(html) => (status, Html(html)).into_response(),
        Err(err) => internal_server_error(err),
    }
}
