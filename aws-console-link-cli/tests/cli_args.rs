use assert_cmd::Command;
use predicates::prelude::*;

const S3_ARN: &str = "arn:aws:s3:::abcdefgh1234";
const S3_LINK: &str = "https://s3.console.aws.amazon.com/s3/buckets/abcdefgh1234";
const LAMBDA_ARN: &str = "arn:aws:lambda:us-east-1:123456789012:function:thumbnailer";
const BAD_ARN: &str = "not-an-arn";

fn cli() -> Command {
    Command::cargo_bin("aws-console-link").expect("binary should build")
}

#[test]
fn prints_link_for_a_single_arn() {
    cli()
        .arg(S3_ARN)
        .assert()
        .success()
        .stdout(predicate::str::contains(S3_LINK))
        .stderr(predicate::str::is_empty());
}

#[test]
fn prints_one_link_per_argument() {
    cli()
        .args([S3_ARN, LAMBDA_ARN])
        .assert()
        .success()
        .stdout(predicate::str::contains(S3_LINK).and(predicate::str::contains("#/functions/thumbnailer")));
}

#[test]
fn bad_input_reports_error_and_continues() {
    // The failure lands on stderr; the remaining inputs still resolve
    // and the process completes successfully.
    cli()
        .args([BAD_ARN, S3_ARN])
        .assert()
        .success()
        .stdout(predicate::str::contains(S3_LINK))
        .stderr(predicate::str::contains(BAD_ARN).and(predicate::str::contains("bad number of tokens")));
}

#[test]
fn unsupported_resource_type_names_the_service() {
    cli()
        .arg("arn:aws:ec2:us-east-1:123456789012:spot-instances-request/sir-123")
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(
            predicate::str::contains("spot-instances-request").and(predicate::str::contains("ec2")),
        );
}

#[test]
fn reads_arns_from_stdin_when_no_arguments() {
    cli()
        .write_stdin(format!("{S3_ARN}\n{BAD_ARN}\n\n"))
        .assert()
        .success()
        .stdout(predicate::str::contains(S3_LINK))
        .stderr(predicate::str::contains(BAD_ARN));
}

#[test]
fn help_mentions_stdin_mode() {
    cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("stdin"));
}
