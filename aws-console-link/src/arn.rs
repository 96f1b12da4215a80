//! ARN tokenization.
//!
//! ARNs are not a single unambiguous grammar: the resource portion may
//! itself contain colons or slashes, and AWS services disagree on which.
//! The parser resolves the ambiguity with an ordered set of positional
//! rules (`type:id[:revision]`, then `type/id`, then bare id) that must
//! be preserved exactly for compatibility with existing callers.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::error::{ArnError, ArnResult};

/// Loosely modeled on the documented IAM ARN length limit.
const MAX_ARN_LEN: usize = 2048;

/// Letters, digits, space and the punctuation AWS allows in resource
/// names. Everything else is rejected up front: several fields are
/// later interpolated into URLs.
static ALLOWED_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9 :/+=,.@_*#-]*$").expect("charset regex compiles"));

/// Regions end up as a DNS subdomain component of generated links, so
/// the pattern is strict lowercase-alphanumeric-and-hyphen.
static REGION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9-]*$").expect("region regex compiles"));

/// A parsed Amazon Resource Name, immutable once constructed.
///
/// `Display` reconstructs the canonical string, preserving the
/// delimiter style of the original input: an ARN tokenized from a
/// `type/id` resource re-serializes with `/`, one tokenized from
/// `type:id` re-serializes with `:`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Arn {
    raw: String,
    prefix: String,
    partition: String,
    service: String,
    region: String,
    account: String,
    resource_type: String,
    resource: String,
    resource_revision: String,
    has_path: bool,
}

impl Arn {
    /// Parse a string into an [`Arn`].
    ///
    /// Validation order: trim, length bound, character allowlist,
    /// colon split (at least six tokens), resource shape resolution,
    /// region pattern. Each failure mode is a distinct [`ArnError`].
    pub fn parse(text: &str) -> ArnResult<Self> {
        let trimmed = text.trim();
        if trimmed.len() > MAX_ARN_LEN {
            return Err(ArnError::TooLong(trimmed.len()));
        }
        if !ALLOWED_CHARS.is_match(trimmed) {
            return Err(ArnError::InvalidCharacters);
        }

        let tokens: Vec<&str> = trimmed.split(':').collect();
        if tokens.len() < 6 {
            return Err(ArnError::MalformedArn);
        }

        // Resource shape resolution, tried in order:
        //  (a) type:id[:revision] - a seventh token exists; if the type
        //      token itself contains a slash the split happens there
        //      instead and the trailing tokens become the revision
        //      (ECS task definitions, Batch job definitions).
        //  (b) type/id - no extra colon, slash in the sixth token.
        //  (c) bare id - neither.
        let (resource_type, resource, resource_revision, has_path) = if tokens.len() > 6 {
            let head = tokens[5];
            let tail = tokens[6..].join(":");
            if let Some((ty, id)) = head.split_once('/') {
                (ty.to_owned(), id.to_owned(), tail, true)
            } else {
                (head.to_owned(), tail, String::new(), false)
            }
        } else if let Some((ty, id)) = tokens[5].split_once('/') {
            (ty.to_owned(), id.to_owned(), String::new(), true)
        } else {
            (String::new(), tokens[5].to_owned(), String::new(), false)
        };

        let region = tokens[3];
        if !REGION_PATTERN.is_match(region) {
            return Err(ArnError::InvalidRegion(region.to_owned()));
        }

        Ok(Self {
            raw: trimmed.to_owned(),
            prefix: tokens[0].to_owned(),
            partition: tokens[1].to_owned(),
            service: tokens[2].to_owned(),
            region: region.to_owned(),
            account: tokens[4].to_owned(),
            resource_type,
            resource,
            resource_revision,
            has_path,
        })
    }

    /// Resolve a direct link into the AWS web console for this
    /// resource, or fail when the (service, resource type) pair has no
    /// modeled template.
    pub fn console_link(&self) -> ArnResult<String> {
        crate::console::console_link(self)
    }

    /// The original input, trimmed. Some link templates embed it
    /// verbatim (CloudFormation stacks, Step Functions state machines).
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn partition(&self) -> &str {
        &self.partition
    }

    pub fn service(&self) -> &str {
        &self.service
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn account(&self) -> &str {
        &self.account
    }

    /// Empty for services whose ARNs carry a bare resource id.
    pub fn resource_type(&self) -> &str {
        &self.resource_type
    }

    pub fn resource(&self) -> &str {
        &self.resource
    }

    /// Trailing qualifier of the `type/id:revision` form; empty when
    /// absent.
    pub fn resource_revision(&self) -> &str {
        &self.resource_revision
    }

    /// Whether type and resource were joined by `/` rather than `:`.
    pub fn has_path(&self) -> bool {
        self.has_path
    }

    /// The resource id split on `:`, for services whose id is itself a
    /// colon-delimited tuple (Lambda function qualifiers, MQ brokers).
    pub fn qualifiers(&self) -> Vec<&str> {
        self.resource.split(':').collect()
    }

    /// Everything before the final `/` of the resource, or the empty
    /// string when the resource has no path.
    pub fn path_all_but_last(&self) -> &str {
        self.resource.rsplit_once('/').map_or("", |(head, _)| head)
    }

    /// The final `/`-separated segment of the resource, or the whole
    /// resource when it has no path.
    pub fn path_last(&self) -> &str {
        self.resource
            .rsplit_once('/')
            .map_or(self.resource.as_str(), |(_, last)| last)
    }
}

impl fmt::Display for Arn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}:{}:{}:",
            self.prefix, self.partition, self.service, self.region, self.account
        )?;
        if self.has_path {
            write!(f, "{}/{}", self.resource_type, self.resource)?;
            if !self.resource_revision.is_empty() {
                write!(f, ":{}", self.resource_revision)?;
            }
            Ok(())
        } else if self.resource_type.is_empty() {
            write!(f, "{}", self.resource)
        } else {
            write!(f, "{}:{}", self.resource_type, self.resource)
        }
    }
}

impl FromStr for Arn {
    type Err = ArnError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Self::parse(text)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn parses_type_colon_id_form() {
        let arn = Arn::parse("arn:aws:cloudwatch:us-east-1:123456789012:alarm:HighCpu")
            .expect("should parse");
        assert_eq!(arn.prefix(), "arn");
        assert_eq!(arn.partition(), "aws");
        assert_eq!(arn.service(), "cloudwatch");
        assert_eq!(arn.region(), "us-east-1");
        assert_eq!(arn.account(), "123456789012");
        assert_eq!(arn.resource_type(), "alarm");
        assert_eq!(arn.resource(), "HighCpu");
        assert!(!arn.has_path());
        assert_eq!(arn.resource_revision(), "");
    }

    #[test]
    fn parses_type_slash_id_form() {
        let arn = Arn::parse("arn:aws:ec2:eu-west-1:123456789012:instance/i-0abcd1234")
            .expect("should parse");
        assert_eq!(arn.resource_type(), "instance");
        assert_eq!(arn.resource(), "i-0abcd1234");
        assert!(arn.has_path());
    }

    #[test]
    fn parses_bare_id_form() {
        let arn = Arn::parse("arn:aws:s3:::my-bucket").expect("should parse");
        assert_eq!(arn.resource_type(), "");
        assert_eq!(arn.resource(), "my-bucket");
        assert!(!arn.has_path());
        assert_eq!(arn.region(), "");
    }

    #[test]
    fn parses_revision_form() {
        let arn = Arn::parse("arn:aws:ecs:us-east-1:123456789012:task-definition/web:42")
            .expect("should parse");
        assert_eq!(arn.resource_type(), "task-definition");
        assert_eq!(arn.resource(), "web");
        assert_eq!(arn.resource_revision(), "42");
        assert!(arn.has_path());
    }

    #[test]
    fn resource_keeps_embedded_colons() {
        let arn = Arn::parse("arn:aws:lambda:us-east-1:123456789012:function:thumbnailer:7")
            .expect("should parse");
        assert_eq!(arn.resource_type(), "function");
        assert_eq!(arn.resource(), "thumbnailer:7");
        assert_eq!(arn.qualifiers(), vec!["thumbnailer", "7"]);
    }

    #[test]
    fn resource_keeps_embedded_slashes() {
        let arn = Arn::parse(
            "arn:aws:logs:us-east-1:123456789012:log-group:/aws/lambda/thumbnailer",
        )
        .expect("should parse");
        assert_eq!(arn.resource_type(), "log-group");
        assert_eq!(arn.resource(), "/aws/lambda/thumbnailer");
        assert!(!arn.has_path());
    }

    #[test]
    fn qualifiers_split_multi_colon_resource() {
        let arn = Arn::parse("arn:p:s:r:a:rtype:q1:q2:q3").expect("should parse");
        assert_eq!(arn.qualifiers(), vec!["q1", "q2", "q3"]);
    }

    #[test]
    fn path_accessors_split_on_last_slash() {
        let arn = Arn::parse("arn:aws:ecs:us-east-1:123456789012:service/prod/web")
            .expect("should parse");
        assert_eq!(arn.resource(), "prod/web");
        assert_eq!(arn.path_all_but_last(), "prod");
        assert_eq!(arn.path_last(), "web");
    }

    #[test]
    fn path_accessors_on_non_path_resource() {
        let arn = Arn::parse("arn:aws:s3:::my-bucket").expect("should parse");
        assert_eq!(arn.path_all_but_last(), "");
        assert_eq!(arn.path_last(), "my-bucket");
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let arn = Arn::parse("  arn:aws:s3:::my-bucket\n").expect("should parse");
        assert_eq!(arn.raw(), "arn:aws:s3:::my-bucket");
        assert_eq!(arn.to_string(), "arn:aws:s3:::my-bucket");
    }

    #[test]
    fn rejects_too_few_tokens() {
        assert_eq!(Arn::parse("foo"), Err(ArnError::MalformedArn));
        assert_eq!(Arn::parse("arn:aws:s3"), Err(ArnError::MalformedArn));
        assert_eq!(Arn::parse(""), Err(ArnError::MalformedArn));
    }

    #[test]
    fn rejects_overlong_input() {
        let long = format!("arn:aws:s3:::{}", "a".repeat(3000));
        assert_eq!(Arn::parse(&long), Err(ArnError::TooLong(3013)));
    }

    #[test]
    fn rejects_disallowed_characters() {
        assert_eq!(
            Arn::parse("arn:aws:s3:::<script>alert(1)</script>"),
            Err(ArnError::InvalidCharacters)
        );
        assert_eq!(
            Arn::parse("arn:aws:s3:::bucket?x=1"),
            Err(ArnError::InvalidCharacters)
        );
        assert_eq!(
            Arn::parse("arn:aws:s3:::bucket%2f"),
            Err(ArnError::InvalidCharacters)
        );
    }

    #[test]
    fn rejects_hostile_region() {
        assert_eq!(
            Arn::parse("arn:aws:s3:US WEST:1:bucket"),
            Err(ArnError::InvalidRegion("US WEST".to_owned()))
        );
        assert_eq!(
            Arn::parse("arn:aws:ec2:us.east:1:instance/i-1"),
            Err(ArnError::InvalidRegion("us.east".to_owned()))
        );
    }

    #[test]
    fn display_round_trips_delimiter_style() {
        for arn in [
            "arn:aws:s3:::my-bucket",
            "arn:aws:ec2:eu-west-1:123456789012:instance/i-0abcd1234",
            "arn:aws:cloudwatch:us-east-1:123456789012:alarm:HighCpu",
            "arn:aws:lambda:us-east-1:123456789012:function:thumbnailer:7",
            "arn:aws:ecs:us-east-1:123456789012:task-definition/web:42",
            "arn:aws:logs:us-east-1:123456789012:log-group:/aws/lambda/thumbnailer:*",
            "arn:aws:apigateway:us-east-1::/restapis/a1b2c3",
        ] {
            let parsed = Arn::parse(arn).expect("should parse");
            assert_eq!(parsed.to_string(), arn);
        }
    }

    #[test]
    fn serializes_parsed_fields() {
        let arn = Arn::parse("arn:aws:s3:::my-bucket").expect("should parse");
        let value = serde_json::to_value(&arn).expect("should serialize");
        assert_eq!(value["service"], "s3");
        assert_eq!(value["resource"], "my-bucket");
        assert_eq!(value["has_path"], false);
    }

    fn id_strategy() -> impl Strategy<Value = String> {
        "[A-Za-z0-9][A-Za-z0-9._-]{0,20}"
    }

    proptest! {
        #[test]
        fn round_trips_bare_form(
            service in "[a-z][a-z0-9-]{0,10}",
            region in "[a-z0-9-]{0,9}",
            account in "[0-9]{0,12}",
            id in id_strategy(),
        ) {
            let text = format!("arn:aws:{service}:{region}:{account}:{id}");
            let arn = Arn::parse(&text).expect("generated ARN should parse");
            prop_assert_eq!(arn.to_string(), text);
            prop_assert_eq!(arn.resource_type(), "");
        }

        #[test]
        fn round_trips_type_colon_form(
            ty in "[a-z][a-z-]{0,12}",
            id in id_strategy(),
            qualifier in proptest::option::of(id_strategy()),
        ) {
            let tail = match qualifier {
                Some(q) => format!("{ty}:{id}:{q}"),
                None => format!("{ty}:{id}"),
            };
            let text = format!("arn:aws:svc:us-east-1:123456789012:{tail}");
            let arn = Arn::parse(&text).expect("generated ARN should parse");
            prop_assert_eq!(arn.to_string(), text);
            prop_assert_eq!(arn.resource_type(), ty);
            prop_assert!(!arn.has_path());
        }

        #[test]
        fn round_trips_path_form(
            ty in "[a-z][a-z-]{0,12}",
            id in id_strategy(),
            revision in proptest::option::of("[0-9]{1,4}"),
        ) {
            let tail = match revision {
                Some(rev) => format!("{ty}/{id}:{rev}"),
                None => format!("{ty}/{id}"),
            };
            let text = format!("arn:aws:svc:us-east-1:123456789012:{tail}");
            let arn = Arn::parse(&text).expect("generated ARN should parse");
            prop_assert_eq!(arn.to_string(), text);
            prop_assert_eq!(arn.resource_type(), ty);
            prop_assert!(arn.has_path());
        }
    }
}
