//! Per-conversion state shared by the walker and the synthesizer.

use super::services::Services;
use crate::postman::RequestRecord;

/// Everything one conversion call threads through the traversal.
///
/// Built fresh for every document, so nothing leaks between conversions.
#[derive(Debug)]
pub struct ConversionContext<'a> {
    /// The document base URI with its own placeholders already rewritten.
    pub base_uri: String,
    /// Id of the collection being assembled.
    pub collection_id: String,
    /// Shape cloned for every request.
    pub prototype: &'a RequestRecord,
    /// Id and time sources.
    pub services: &'a Services,
}
