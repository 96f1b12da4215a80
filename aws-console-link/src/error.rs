//! Error types for ARN parsing and console link resolution.

use thiserror::Error;

/// Errors that can occur while parsing an ARN or resolving its console
/// link. All of these are terminal: nothing about a parse or a table
/// lookup is transient, so callers report and move on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArnError {
    /// Input exceeds the 2048 character bound (loosely modeled on the
    /// documented IAM ARN length limit).
    #[error("ARN is too long ({0} characters, limit is 2048)")]
    TooLong(usize),

    /// Input contains characters outside the allowed ARN character set.
    #[error("ARN contains characters outside the allowed set")]
    InvalidCharacters,

    /// Fewer than six colon-delimited tokens.
    #[error("malformed ARN: bad number of tokens")]
    MalformedArn,

    /// The region field does not match the hostname-safe pattern.
    /// Region is interpolated into a console hostname, so this is a
    /// hard failure rather than a best-effort warning.
    #[error("invalid region {0:?}")]
    InvalidRegion(String),

    /// The first token is not the literal `arn`.
    #[error("not an ARN: prefix is {0:?}")]
    NotAnArn(String),

    /// The partition is not one of `aws`, `aws-us-gov`, `aws-cn`.
    #[error("unsupported partition {0:?}")]
    UnsupportedPartition(String),

    /// No link templates exist for this service.
    #[error("no console link templates for service {0:?}")]
    UnknownService(String),

    /// The service is known but the resource type has no link template,
    /// or the template declined the particular resource.
    #[error("no console link for resource type {resource_type:?} of service {service:?}")]
    UnsupportedResourceType {
        service: String,
        resource_type: String,
    },
}

pub type ArnResult<T> = Result<T, ArnError>;
