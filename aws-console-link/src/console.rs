//! Console link resolution.
//!
//! A parsed ARN is dispatched through a two-level static table keyed by
//! (service, resource type). The table distinguishes "service unknown"
//! from "resource type known but no console page modeled"; both surface
//! to callers as the same failure, but keeping the explicit markers
//! lets the table double as a coverage inventory.

use crate::arn::Arn;
use crate::error::{ArnError, ArnResult};
use crate::templates;

/// A single entry of the link template table.
pub(crate) enum Template {
    /// Known AWS resource type with no modeled console page.
    Unsupported,
    /// Builds the console URL for a resource of this type. Returns
    /// `None` for sub-cases the template cannot link (treated exactly
    /// like [`Template::Unsupported`]).
    Link(BuildFn),
}

pub(crate) type BuildFn = fn(&Arn, &str) -> Option<String>;

/// Console hostname per partition. Anything else has no web console we
/// know how to address.
const PARTITION_CONSOLES: &[(&str, &str)] = &[
    ("aws", "console.aws.amazon.com"),
    ("aws-us-gov", "console.amazonaws-us-gov.com"),
    ("aws-cn", "console.amazonaws.cn"),
];

pub(crate) fn console_link(arn: &Arn) -> ArnResult<String> {
    if arn.prefix() != "arn" {
        return Err(ArnError::NotAnArn(arn.prefix().to_owned()));
    }
    let console = PARTITION_CONSOLES
        .iter()
        .find(|(partition, _)| *partition == arn.partition())
        .map(|(_, host)| *host)
        .ok_or_else(|| ArnError::UnsupportedPartition(arn.partition().to_owned()))?;

    let types = templates::service(arn.service())
        .ok_or_else(|| ArnError::UnknownService(arn.service().to_owned()))?;
    let template = types
        .iter()
        .find(|(ty, _)| *ty == arn.resource_type())
        .map(|(_, template)| template);

    match template {
        Some(Template::Link(build)) => build(arn, console),
        Some(Template::Unsupported) | None => None,
    }
    .ok_or_else(|| ArnError::UnsupportedResourceType {
        service: arn.service().to_owned(),
        resource_type: arn.resource_type().to_owned(),
    })
}
