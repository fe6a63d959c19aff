//! Defines the properties for the `SmsFormComponent`.

use yew::prelude::*;

/// Endpoint used when the parent does not provide one.
pub const DEFAULT_ENDPOINT: &str = "/send_sms";

/// Properties for the `SmsFormComponent`.
#[derive(Properties, PartialEq, Clone)]
pub struct SmsFormProps {
    /// URL the validated submission is posted to.
    ///
    /// Relative by default, so the page and the dispatch service share an
    /// origin (the Trunk dev server proxies it, see `Trunk.toml`).
    #[prop_or(AttrValue::Static(DEFAULT_ENDPOINT))]
    pub endpoint: AttrValue,
}
