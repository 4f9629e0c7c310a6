//! # Request Synthesizer
//!
//! Builds one request record from one method definition. Never fails:
//! missing optional data leaves the prototype's defaults in place.

use super::context::ConversionContext;
use crate::postman::{DataMode, FormParam, RequestRecord};
use crate::raml::{MethodDef, ParamMap};

/// Maximum description length in characters before truncation.
pub const DESCRIPTION_LIMIT: usize = 500;

/// Appended to a truncated description.
pub const TRUNCATION_MARKER: &str = "...";

/// Content type mapped to [`DataMode::Urlencoded`].
pub const FORM_URLENCODED: &str = "application/x-www-form-urlencoded";

/// Content type mapped to [`DataMode::Params`].
pub const MULTIPART_FORM_DATA: &str = "multipart/form-data";

/// Synthesizes the request for `method` on the resource at `composed_uri`.
pub fn synthesize(ctx: &ConversionContext<'_>, method: &MethodDef, composed_uri: &str) -> RequestRecord {
    let mut request = ctx.prototype.clone();
    request.collection_id = ctx.collection_id.clone();

    if let Some(description) = &method.description {
        request.description = truncate_description(description);
    }

    request.id = ctx.services.id();
    request.method = method.method.clone();
    request.name = display_name(composed_uri, &ctx.base_uri);
    request.time = ctx.services.timestamp();
    request.url = with_query_placeholders(composed_uri, &method.query_parameters);

    let mut headers: String = method
        .headers
        .keys()
        .map(|name| format!("{}: \n", name))
        .collect();

    for (content_type, body) in &method.body {
        match content_type.as_str() {
            FORM_URLENCODED => request.data_mode = DataMode::Urlencoded,
            MULTIPART_FORM_DATA => request.data_mode = DataMode::Params,
            _ => {
                request.data_mode = DataMode::Raw;
                headers.push_str(&format!("Content-Type: {}\n", content_type));
                request.raw_mode_data = body.example_payload();
            }
        }

        if is_form_content_type(content_type) {
            request
                .data
                .extend(body.form_parameters.keys().map(FormParam::placeholder));
        }
    }

    request.headers = headers;
    request
}

/// Caps `text` at [`DESCRIPTION_LIMIT`] characters, marking the cut.
pub fn truncate_description(text: &str) -> String {
    match text.char_indices().nth(DESCRIPTION_LIMIT) {
        Some((cut, _)) => format!("{}{}", &text[..cut], TRUNCATION_MARKER),
        None => text.to_string(),
    }
}

/// The composed URI with the first occurrence of the base URI removed.
pub fn display_name(composed_uri: &str, base_uri: &str) -> String {
    if base_uri.is_empty() {
        return composed_uri.to_string();
    }
    composed_uri.replacen(base_uri, "", 1)
}

fn with_query_placeholders(uri: &str, params: &ParamMap) -> String {
    let mut url = uri.to_string();
    for (i, name) in params.keys().enumerate() {
        url.push(if i == 0 { '?' } else { '&' });
        url.push_str(name);
        url.push('=');
    }
    url
}

fn is_form_content_type(content_type: &str) -> bool {
    content_type == FORM_URLENCODED || content_type == MULTIPART_FORM_DATA
}
