use contact_form_models::{contact::SubmittedSnapshot, field::FormField, state::FormState};
use serde::Serialize;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait TemplateService: Send + Sync + 'static {
    /// Render the given template.
    fn render<T: Template + 'static>(&self, template: &T) -> anyhow::Result<String>;
}

#[cfg(feature = "mock")]
impl MockTemplateService {
    pub fn with_render<T: Template + Send + PartialEq + std::fmt::Debug + 'static>(
        mut self,
        template: T,
        result: String,
    ) -> Self {
        self.expect_render()
            .once()
            .with(mockall::predicate::eq(template))
            .return_once(|_| Ok(result));
        self
    }
}

pub trait Template: Serialize {
    const NAME: &'static str;
    const TEMPLATE: &'static str;
}

pub const BASE_TEMPLATE: (&str, &str) = ("base.html", include_str!("../templates/base.html"));

macro_rules! templates {
    ($( $ident:ident ( $path:literal ), )* ) => {
        $(
            impl Template for $ident {
                const NAME: &'static str = $path;
                const TEMPLATE: &'static str = include_str!(concat!("../templates/", $path));
            }
        )*

        pub const TEMPLATES: &[(&str, &str)] = &[
            $( ($ident::NAME, $ident::TEMPLATE) ),*
        ];
    };
}

templates! {
    ContactFormTemplate("contact_form.html"),
}

/// The contact form page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactFormTemplate {
    pub title: String,
    pub fields: Vec<ContactFormTemplateField>,
    pub submitted: Option<SubmittedSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactFormTemplateField {
    pub name: &'static str,
    pub label: &'static str,
    pub required: bool,
    pub multiline: bool,
    pub value: String,
    pub error: Option<String>,
}

impl ContactFormTemplate {
    pub fn new(title: impl Into<String>, state: &FormState) -> Self {
        let fields = FormField::ALL
            .into_iter()
            .map(|field| ContactFormTemplateField {
                name: field.name(),
                label: field.label(),
                required: field.is_required(),
                multiline: field == FormField::Message,
                value: state.values.get(field).into(),
                error: state.errors.get(field).map(ToString::to_string),
            })
            .collect();

        Self {
            title: title.into(),
            fields,
            submitted: state.submitted.clone(),
        }
    }
}
