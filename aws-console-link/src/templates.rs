//! The link template table.
//!
//! Maps (service, resource type) to a console URL builder. URL shapes
//! are AWS's console routing contract: external, versioned, and encoded
//! here as static data. When AWS changes a console URL scheme, only the
//! affected entry changes.
//!
//! An explicit [`Unsupported`] marker records a resource type we know
//! about but have no console page for; an absent key means the type is
//! entirely unknown. Builders may also decline individual resources
//! (old-format ECS ARNs without a cluster, Amplify ARNs that are not
//! jobs) by returning `None`.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::arn::Arn;
use crate::console::Template;
use crate::console::Template::{Link, Unsupported};

/// Look up the per-type sub-table for a service.
pub(crate) fn service(name: &str) -> Option<&'static [(&'static str, Template)]> {
    SERVICES
        .iter()
        .find(|(service, _)| *service == name)
        .map(|(_, types)| *types)
}

/// Escapes everything except ASCII alphanumerics and `- _ . ! ~ * ' ( )`,
/// matching what the console itself expects in path and query positions.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

fn encode(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

/// CloudWatch Logs escaping: percent-encode, then escape the escapes
/// (`%` becomes `$25`), so `/` ends up as `$252F` and `#` as `$2523`.
fn logs_escape(value: &str) -> String {
    encode(value).replace('%', "$25")
}

/// Amplify zero-pads job numbers in ARNs; the console does not.
fn strip_zero_pad(value: &str) -> &str {
    let stripped = value.trim_start_matches('0');
    if stripped.is_empty() {
        "0"
    } else {
        stripped
    }
}

/// `https://{region}.{console}/{path}/home?region={region}` - the stem
/// shared by most region-scoped console pages.
fn service_home(arn: &Arn, console: &str, path: &str) -> String {
    let region = arn.region();
    format!("https://{region}.{console}/{path}/home?region={region}")
}

fn ec2_page(arn: &Arn, console: &str, fragment: &str) -> Option<String> {
    Some(format!(
        "{}#{}{}",
        service_home(arn, console, "ec2"),
        fragment,
        encode(arn.resource())
    ))
}

fn vpc_page(arn: &Arn, console: &str, fragment: &str) -> Option<String> {
    Some(format!(
        "{}#{}{}",
        service_home(arn, console, "vpc"),
        fragment,
        encode(arn.resource())
    ))
}

fn rds_page(arn: &Arn, console: &str, prefix: &str, suffix: &str) -> Option<String> {
    Some(format!(
        "{}#{}{}{}",
        service_home(arn, console, "rds"),
        prefix,
        encode(arn.resource()),
        suffix
    ))
}

fn sagemaker_page(arn: &Arn, console: &str, collection: &str) -> Option<String> {
    Some(format!(
        "{}#/{}/{}",
        service_home(arn, console, "sagemaker"),
        collection,
        encode(arn.resource())
    ))
}

/// `{app-id}/branches/{branch}/jobs/{number}` is the only Amplify
/// sub-resource with its own console page.
fn amplify_job(arn: &Arn, console: &str) -> Option<String> {
    let segments: Vec<&str> = arn.resource().split('/').collect();
    match segments.as_slice() {
        [app, "branches", branch, "jobs", job] => Some(format!(
            "{}#/{}/{}/{}",
            service_home(arn, console, "amplify"),
            encode(app),
            encode(branch),
            strip_zero_pad(job)
        )),
        _ => None,
    }
}

/// API Gateway resources parse with an empty type and a path-shaped
/// resource (`restapis/{id}`, `apis/{id}`, ...).
fn apigateway_resource(arn: &Arn, console: &str) -> Option<String> {
    let region = arn.region();
    let segments: Vec<&str> = arn.resource().split('/').collect();
    match segments.as_slice() {
        ["restapis", api] => {
            let api = encode(api);
            Some(format!(
                "https://{region}.{console}/apigateway/main/apis/{api}/resources?api={api}&region={region}"
            ))
        }
        ["restapis", api, "stages", ..] => {
            let api = encode(api);
            Some(format!(
                "https://{region}.{console}/apigateway/main/apis/{api}/stages?api={api}&region={region}"
            ))
        }
        ["apis", api] => {
            let api = encode(api);
            Some(format!(
                "https://{region}.{console}/apigateway/main/develop/routes?api={api}&region={region}"
            ))
        }
        _ => None,
    }
}

/// `{uuid}:autoScalingGroupName/{name}` - the console wants the name.
fn autoscaling_group(arn: &Arn, console: &str) -> Option<String> {
    let name = match arn.qualifiers().as_slice() {
        [_uuid, rest] => rest.strip_prefix("autoScalingGroupName/")?,
        _ => return None,
    };
    Some(format!(
        "{}#/details/{}?view=details",
        service_home(arn, console, "ec2autoscaling"),
        encode(name)
    ))
}

fn dynamodb_table(arn: &Arn, console: &str) -> Option<String> {
    let home = service_home(arn, console, "dynamodbv2");
    let segments: Vec<&str> = arn.resource().split('/').collect();
    match segments.as_slice() {
        [name] => Some(format!("{home}#table?name={}", encode(name))),
        [name, "index", _index] => Some(format!("{home}#table?name={}&tab=indexes", encode(name))),
        _ => None,
    }
}

/// New-format ECS ARNs carry `{cluster}/{id}`; old-format ones lack the
/// cluster and cannot be linked.
fn ecs_service(arn: &Arn, console: &str) -> Option<String> {
    let (cluster, service) = arn.resource().split_once('/')?;
    let region = arn.region();
    Some(format!(
        "https://{region}.{console}/ecs/v2/clusters/{}/services/{}?region={region}",
        encode(cluster),
        encode(service)
    ))
}

fn ecs_task(arn: &Arn, console: &str) -> Option<String> {
    let (cluster, task) = arn.resource().split_once('/')?;
    let region = arn.region();
    Some(format!(
        "https://{region}.{console}/ecs/v2/clusters/{}/tasks/{}?region={region}",
        encode(cluster),
        encode(task)
    ))
}

fn ecs_task_definition(arn: &Arn, console: &str) -> Option<String> {
    let region = arn.region();
    let name = encode(arn.resource());
    if arn.resource_revision().is_empty() {
        Some(format!(
            "https://{region}.{console}/ecs/v2/task-definitions/{name}?region={region}"
        ))
    } else {
        Some(format!(
            "https://{region}.{console}/ecs/v2/task-definitions/{name}/{}/containers?region={region}",
            encode(arn.resource_revision())
        ))
    }
}

fn eks_nodegroup(arn: &Arn, console: &str) -> Option<String> {
    let segments: Vec<&str> = arn.resource().split('/').collect();
    match segments.as_slice() {
        [cluster, nodegroup, _uuid] => Some(format!(
            "{}#/clusters/{}/nodegroups/{}",
            service_home(arn, console, "eks"),
            encode(cluster),
            encode(nodegroup)
        )),
        _ => None,
    }
}

/// ELBv2 resources are addressed by full ARN; classic load balancers
/// only support a name search.
fn elb_load_balancer(arn: &Arn, console: &str) -> Option<String> {
    let home = service_home(arn, console, "ec2");
    if arn.resource().contains('/') {
        Some(format!("{home}#LoadBalancer:loadBalancerArn={}", encode(arn.raw())))
    } else {
        Some(format!("{home}#LoadBalancers:search={}", encode(arn.resource())))
    }
}

/// Rules on the default bus have a bare name; custom-bus rules carry
/// `{bus}/{name}`.
fn events_rule(arn: &Arn, console: &str) -> Option<String> {
    let (bus, rule) = match arn.resource().split_once('/') {
        Some((bus, rule)) => (bus, rule),
        None => ("default", arn.resource()),
    };
    Some(format!(
        "{}#/eventbus/{}/rules/{}",
        service_home(arn, console, "events"),
        encode(bus),
        encode(rule)
    ))
}

fn glue_table(arn: &Arn, console: &str) -> Option<String> {
    let (database, table) = arn.resource().split_once('/')?;
    Some(format!(
        "{}#/v2/data-catalog/tables/view/{}?database={}",
        service_home(arn, console, "glue"),
        encode(table),
        encode(database)
    ))
}

fn lambda_function(arn: &Arn, console: &str) -> Option<String> {
    let home = service_home(arn, console, "lambda");
    match arn.qualifiers().as_slice() {
        [name] => Some(format!("{home}#/functions/{}?tab=code", encode(name))),
        [name, version] => Some(format!(
            "{home}#/functions/{}/versions/{}?tab=code",
            encode(name),
            encode(version)
        )),
        _ => None,
    }
}

fn lambda_layer(arn: &Arn, console: &str) -> Option<String> {
    match arn.qualifiers().as_slice() {
        [name, version] => Some(format!(
            "{}#/layers/{}/versions/{}",
            service_home(arn, console, "lambda"),
            encode(name),
            encode(version)
        )),
        _ => None,
    }
}

/// Log group names keep their slashes inside the ARN resource; the
/// console wants them double-escaped. Stream ARNs extend the group
/// resource with `:log-stream:{name}`.
fn logs_log_group(arn: &Arn, console: &str) -> Option<String> {
    let home = service_home(arn, console, "cloudwatch");
    match arn.qualifiers().as_slice() {
        [group] | [group, "*"] => Some(format!(
            "{home}#logsV2:log-groups/log-group/{}",
            logs_escape(group)
        )),
        [group, "log-stream", stream] => Some(format!(
            "{home}#logsV2:log-groups/log-group/{}/log-events/{}",
            logs_escape(group),
            logs_escape(stream)
        )),
        _ => None,
    }
}

/// Broker ARNs are `broker:{name}:{id}`; the console keys on the id.
fn mq_broker(arn: &Arn, console: &str) -> Option<String> {
    match arn.qualifiers().as_slice() {
        [_name, id] => Some(format!(
            "{}#/brokers/details?id={}",
            service_home(arn, console, "amazon-mq"),
            encode(id)
        )),
        _ => None,
    }
}

/// The ARN appends a random suffix to the secret name; the console
/// addresses secrets by their real name.
fn secretsmanager_secret(arn: &Arn, console: &str) -> Option<String> {
    let name = arn
        .resource()
        .rsplit_once('-')
        .map_or(arn.resource(), |(name, _suffix)| name);
    let region = arn.region();
    Some(format!(
        "https://{region}.{console}/secretsmanager/secret?name={}&region={region}",
        encode(name)
    ))
}

/// Hierarchical parameter names carry a leading slash that the ARN
/// resource drops.
fn ssm_parameter(arn: &Arn, console: &str) -> Option<String> {
    let name = if arn.resource().contains('/') {
        format!("/{}", arn.resource())
    } else {
        arn.resource().to_owned()
    };
    let region = arn.region();
    Some(format!(
        "https://{region}.{console}/systems-manager/parameters/{}/description?region={region}&tab=Table",
        encode(&name)
    ))
}

/// The queue console page embeds the queue URL, re-assembled here from
/// region, account and queue name.
fn sqs_queue(arn: &Arn, console: &str) -> Option<String> {
    let queue_url = format!(
        "https://sqs.{}.amazonaws.com/{}/{}",
        arn.region(),
        arn.account(),
        arn.resource()
    );
    Some(format!(
        "{}#/queues/{}",
        service_home(arn, console, "sqs/v2"),
        encode(&queue_url)
    ))
}

/// `{scope}/webacl/{name}/{id}` with the scope parsed as the resource
/// type; IP sets and rule groups have no stable page.
fn wafv2_entity(arn: &Arn, console: &str) -> Option<String> {
    let region = arn.region();
    let segments: Vec<&str> = arn.resource().split('/').collect();
    match segments.as_slice() {
        ["webacl", name, id] => Some(format!(
            "https://{region}.{console}/wafv2/homev2/web-acl/{}/{}/overview?region={region}",
            encode(name),
            encode(id)
        )),
        _ => None,
    }
}

static SERVICES: &[(&str, &[(&str, Template)])] = &[
    ("accessanalyzer", &[
        ("analyzer", Link(|a, c| Some(format!(
            "{}#/analyzer/{}",
            service_home(a, c, "access-analyzer"),
            encode(a.resource())
        )))),
    ]),
    ("acm", &[
        ("certificate", Link(|a, c| Some(format!(
            "{}#/certificates/{}",
            service_home(a, c, "acm"),
            encode(a.resource())
        )))),
    ]),
    ("acm-pca", &[
        ("certificate-authority", Link(|a, c| Some(format!(
            "{}#/details?arn={}",
            service_home(a, c, "acm-pca"),
            encode(a.raw())
        )))),
    ]),
    ("airflow", &[
        ("environment", Link(|a, c| Some(format!(
            "{}#/environments/{}",
            service_home(a, c, "mwaa"),
            encode(a.resource())
        )))),
    ]),
    ("amplify", &[
        ("apps", Link(amplify_job)),
    ]),
    ("apigateway", &[
        ("", Link(apigateway_resource)),
    ]),
    ("appconfig", &[
        ("application", Link(|a, c| {
            let region = a.region();
            Some(format!(
                "https://{region}.{c}/systems-manager/appconfig/applications/{}?region={region}",
                encode(a.resource())
            ))
        })),
        ("deploymentstrategy", Unsupported),
    ]),
    ("apprunner", &[
        ("service", Link(|a, c| Some(format!(
            "{}#/services/dashboard?service_arn={}",
            service_home(a, c, "apprunner"),
            encode(a.raw())
        )))),
        ("connection", Unsupported),
    ]),
    ("appsync", &[
        ("apis", Link(|a, c| Some(format!(
            "{}#/{}/v1/home",
            service_home(a, c, "appsync"),
            encode(a.resource())
        )))),
    ]),
    ("athena", &[
        ("workgroup", Link(|a, c| Some(format!(
            "{}#/workgroups/details/{}",
            service_home(a, c, "athena"),
            encode(a.resource())
        )))),
        ("datacatalog", Unsupported),
    ]),
    ("autoscaling", &[
        ("autoScalingGroup", Link(autoscaling_group)),
        ("launchConfiguration", Unsupported),
    ]),
    ("backup", &[
        ("backup-vault", Link(|a, c| Some(format!(
            "{}#/backupvaults/details/{}",
            service_home(a, c, "backup"),
            encode(a.resource())
        )))),
        ("backup-plan", Link(|a, c| Some(format!(
            "{}#/backupplan/details/{}",
            service_home(a, c, "backup"),
            encode(a.resource())
        )))),
        ("recovery-point", Unsupported),
    ]),
    ("batch", &[
        ("job-definition", Link(|a, c| Some(format!(
            "{}#job-definition/detail/{}",
            service_home(a, c, "batch"),
            encode(a.raw())
        )))),
        ("job-queue", Link(|a, c| Some(format!(
            "{}#queues/detail/{}",
            service_home(a, c, "batch"),
            encode(a.raw())
        )))),
        ("compute-environment", Link(|a, c| Some(format!(
            "{}#compute-environments/detail/{}",
            service_home(a, c, "batch"),
            encode(a.raw())
        )))),
        ("job", Unsupported),
    ]),
    ("cloud9", &[
        ("environment", Link(|a, c| {
            let region = a.region();
            Some(format!(
                "https://{region}.{c}/cloud9/ide/{}",
                encode(a.resource())
            ))
        })),
    ]),
    ("cloudformation", &[
        ("stack", Link(|a, c| Some(format!(
            "{}#/stacks/stackinfo?stackId={}",
            service_home(a, c, "cloudformation"),
            encode(a.raw())
        )))),
        ("stackset", Link(|a, c| Some(format!(
            "{}#/stacksets/{}",
            service_home(a, c, "cloudformation"),
            encode(a.resource())
        )))),
        ("changeSet", Unsupported),
    ]),
    ("cloudfront", &[
        ("distribution", Link(|a, c| Some(format!(
            "https://{c}/cloudfront/v3/home#/distributions/{}",
            encode(a.resource())
        )))),
        ("function", Unsupported),
        ("origin-access-identity", Unsupported),
        ("streaming-distribution", Unsupported),
    ]),
    ("cloudtrail", &[
        ("trail", Link(|a, c| Some(format!(
            "{}#/trails/{}",
            service_home(a, c, "cloudtrail"),
            encode(a.raw())
        )))),
        ("eventdatastore", Unsupported),
    ]),
    ("cloudwatch", &[
        ("alarm", Link(|a, c| Some(format!(
            "{}#alarmsV2:alarm/{}",
            service_home(a, c, "cloudwatch"),
            encode(a.resource())
        )))),
        ("dashboard", Link(|a, c| Some(format!(
            "{}#dashboards:name={}",
            service_home(a, c, "cloudwatch"),
            encode(a.resource())
        )))),
        ("insight-rule", Unsupported),
    ]),
    ("codeartifact", &[
        ("domain", Link(|a, c| {
            let region = a.region();
            Some(format!(
                "https://{region}.{c}/codesuite/codeartifact/d/{}/{}/repositories?region={region}",
                encode(a.account()),
                encode(a.resource())
            ))
        })),
        ("repository", Link(|a, c| {
            let (domain, repository) = a.resource().split_once('/')?;
            let region = a.region();
            Some(format!(
                "https://{region}.{c}/codesuite/codeartifact/d/{}/{}/r/{}/packages?region={region}",
                encode(a.account()),
                encode(domain),
                encode(repository)
            ))
        })),
        ("package", Unsupported),
    ]),
    ("codebuild", &[
        ("project", Link(|a, c| {
            let region = a.region();
            Some(format!(
                "https://{region}.{c}/codesuite/codebuild/{}/projects/{}/history?region={region}",
                encode(a.account()),
                encode(a.resource())
            ))
        })),
        ("report-group", Unsupported),
    ]),
    ("codecommit", &[
        ("", Link(|a, c| {
            let region = a.region();
            Some(format!(
                "https://{region}.{c}/codesuite/codecommit/repositories/{}/browse?region={region}",
                encode(a.resource())
            ))
        })),
    ]),
    ("codedeploy", &[
        ("application", Link(|a, c| {
            let region = a.region();
            Some(format!(
                "https://{region}.{c}/codesuite/codedeploy/applications/{}?region={region}",
                encode(a.resource())
            ))
        })),
        ("deploymentgroup", Unsupported),
        ("deploymentconfig", Unsupported),
    ]),
    ("codepipeline", &[
        ("", Link(|a, c| {
            let region = a.region();
            Some(format!(
                "https://{region}.{c}/codesuite/codepipeline/pipelines/{}/view?region={region}",
                encode(a.resource())
            ))
        })),
    ]),
    ("cognito-identity", &[
        ("identitypool", Link(|a, c| {
            let region = a.region();
            Some(format!(
                "https://{region}.{c}/cognito/pool/?region={region}&id={}",
                encode(a.resource())
            ))
        })),
    ]),
    ("cognito-idp", &[
        ("userpool", Link(|a, c| {
            let region = a.region();
            Some(format!(
                "https://{region}.{c}/cognito/v2/idp/user-pools/{}/users?region={region}",
                encode(a.resource())
            ))
        })),
    ]),
    ("config", &[
        ("config-rule", Unsupported),
        ("conformance-pack", Unsupported),
    ]),
    ("dynamodb", &[
        ("table", Link(dynamodb_table)),
        ("global-table", Unsupported),
    ]),
    ("ec2", &[
        ("instance", Link(|a, c| ec2_page(a, c, "InstanceDetails:instanceId="))),
        ("image", Link(|a, c| ec2_page(a, c, "ImageDetails:imageId="))),
        ("volume", Link(|a, c| ec2_page(a, c, "VolumeDetails:volumeId="))),
        ("snapshot", Link(|a, c| ec2_page(a, c, "SnapshotDetails:snapshotId="))),
        ("security-group", Link(|a, c| ec2_page(a, c, "SecurityGroup:groupId="))),
        ("key-pair", Link(|a, c| ec2_page(a, c, "KeyPairDetails:keyPairId="))),
        ("network-interface", Link(|a, c| ec2_page(a, c, "NetworkInterface:networkInterfaceId="))),
        ("elastic-ip", Link(|a, c| ec2_page(a, c, "ElasticIpDetails:AllocationId="))),
        ("launch-template", Link(|a, c| ec2_page(a, c, "LaunchTemplateDetails:launchTemplateId="))),
        ("vpc", Link(|a, c| vpc_page(a, c, "VpcDetails:VpcId="))),
        ("subnet", Link(|a, c| vpc_page(a, c, "SubnetDetails:subnetId="))),
        ("route-table", Link(|a, c| vpc_page(a, c, "RouteTableDetails:RouteTableId="))),
        ("internet-gateway", Link(|a, c| vpc_page(a, c, "InternetGateway:internetGatewayId="))),
        ("nat-gateway", Link(|a, c| vpc_page(a, c, "NatGatewayDetails:natGatewayId="))),
        ("network-acl", Link(|a, c| vpc_page(a, c, "NetworkAclDetails:networkAclId="))),
        ("vpc-endpoint", Link(|a, c| vpc_page(a, c, "EndpointDetails:vpcEndpointId="))),
        ("vpc-peering-connection", Link(|a, c| vpc_page(a, c, "PeeringConnectionDetails:VpcPeeringConnectionId="))),
        ("transit-gateway", Link(|a, c| vpc_page(a, c, "TransitGatewayDetails:transitGatewayId="))),
        ("spot-instances-request", Unsupported),
        ("reserved-instances", Unsupported),
        ("dhcp-options", Unsupported),
        ("capacity-reservation", Unsupported),
    ]),
    ("ecr", &[
        ("repository", Link(|a, c| {
            let region = a.region();
            Some(format!(
                "https://{region}.{c}/ecr/repositories/private/{}/{}?region={region}",
                encode(a.account()),
                encode(a.resource())
            ))
        })),
    ]),
    ("ecr-public", &[
        ("repository", Link(|a, c| Some(format!(
            "https://{c}/ecr/repositories/public/{}/{}?region=us-east-1",
            encode(a.account()),
            encode(a.resource())
        )))),
        ("registry", Unsupported),
    ]),
    ("ecs", &[
        ("cluster", Link(|a, c| {
            let region = a.region();
            Some(format!(
                "https://{region}.{c}/ecs/v2/clusters/{}/services?region={region}",
                encode(a.resource())
            ))
        })),
        ("service", Link(ecs_service)),
        ("task", Link(ecs_task)),
        ("task-definition", Link(ecs_task_definition)),
        ("container-instance", Unsupported),
        ("capacity-provider", Unsupported),
    ]),
    ("eks", &[
        ("cluster", Link(|a, c| Some(format!(
            "{}#/clusters/{}",
            service_home(a, c, "eks"),
            encode(a.resource())
        )))),
        ("nodegroup", Link(eks_nodegroup)),
        ("fargateprofile", Unsupported),
        ("addon", Unsupported),
    ]),
    ("elasticache", &[
        ("cluster", Link(|a, c| Some(format!(
            "{}#/redis/{}",
            service_home(a, c, "elasticache"),
            encode(a.resource())
        )))),
        ("replicationgroup", Unsupported),
        ("snapshot", Unsupported),
    ]),
    ("elasticbeanstalk", &[
        ("application", Link(|a, c| Some(format!(
            "{}#/application/overview?applicationName={}",
            service_home(a, c, "elasticbeanstalk"),
            encode(a.resource())
        )))),
        ("environment", Link(|a, c| Some(format!(
            "{}#/environment/dashboard?environmentName={}",
            service_home(a, c, "elasticbeanstalk"),
            encode(a.path_last())
        )))),
        ("applicationversion", Unsupported),
    ]),
    ("elasticfilesystem", &[
        ("file-system", Link(|a, c| Some(format!(
            "{}#/file-systems/{}",
            service_home(a, c, "efs"),
            encode(a.resource())
        )))),
        ("access-point", Link(|a, c| Some(format!(
            "{}#/access-points/{}",
            service_home(a, c, "efs"),
            encode(a.resource())
        )))),
    ]),
    ("elasticloadbalancing", &[
        ("loadbalancer", Link(elb_load_balancer)),
        ("targetgroup", Link(|a, c| Some(format!(
            "{}#TargetGroup:targetGroupArn={}",
            service_home(a, c, "ec2"),
            encode(a.raw())
        )))),
        ("listener", Unsupported),
        ("listener-rule", Unsupported),
    ]),
    ("elasticmapreduce", &[
        ("cluster", Link(|a, c| Some(format!(
            "{}#/clusterDetails/{}",
            service_home(a, c, "emr"),
            encode(a.resource())
        )))),
    ]),
    ("es", &[
        ("domain", Link(|a, c| Some(format!(
            "{}#opensearch/domains/{}",
            service_home(a, c, "aos"),
            encode(a.resource())
        )))),
    ]),
    ("events", &[
        ("rule", Link(events_rule)),
        ("event-bus", Link(|a, c| Some(format!(
            "{}#/eventbus/{}",
            service_home(a, c, "events"),
            encode(a.resource())
        )))),
        ("archive", Unsupported),
        ("api-destination", Unsupported),
    ]),
    ("firehose", &[
        ("deliverystream", Link(|a, c| Some(format!(
            "{}#/details/{}/monitoring",
            service_home(a, c, "firehose"),
            encode(a.resource())
        )))),
    ]),
    ("fsx", &[
        ("file-system", Link(|a, c| Some(format!(
            "{}#file-system-details/{}",
            service_home(a, c, "fsx"),
            encode(a.resource())
        )))),
        ("backup", Unsupported),
    ]),
    ("glue", &[
        ("database", Link(|a, c| Some(format!(
            "{}#/v2/data-catalog/databases/view/{}",
            service_home(a, c, "glue"),
            encode(a.resource())
        )))),
        ("table", Link(glue_table)),
        ("crawler", Link(|a, c| Some(format!(
            "{}#/v2/data-catalog/crawlers/view/{}",
            service_home(a, c, "glue"),
            encode(a.resource())
        )))),
        ("job", Link(|a, c| Some(format!(
            "{}#/editor/job/{}/details",
            service_home(a, c, "gluestudio"),
            encode(a.resource())
        )))),
        ("trigger", Unsupported),
        ("workflow", Unsupported),
        ("connection", Unsupported),
    ]),
    ("globalaccelerator", &[
        // The Global Accelerator console is pinned to us-west-2.
        ("accelerator", Link(|a, c| Some(format!(
            "https://us-west-2.{c}/globalaccelerator/home#AcceleratorDetails:AcceleratorArn={}",
            encode(a.raw())
        )))),
    ]),
    ("guardduty", &[
        ("detector", Link(|a, c| Some(format!(
            "{}#/settings",
            service_home(a, c, "guardduty")
        )))),
        ("filter", Unsupported),
    ]),
    ("iam", &[
        ("user", Link(|a, c| Some(format!(
            "https://{c}/iam/home#/users/{}",
            encode(a.path_last())
        )))),
        ("role", Link(|a, c| Some(format!(
            "https://{c}/iam/home#/roles/{}",
            encode(a.path_last())
        )))),
        ("group", Link(|a, c| Some(format!(
            "https://{c}/iam/home#/groups/{}",
            encode(a.path_last())
        )))),
        ("policy", Link(|a, c| Some(format!(
            "https://{c}/iam/home#/policies/details/{}",
            encode(a.raw())
        )))),
        ("instance-profile", Unsupported),
        ("oidc-provider", Unsupported),
        ("saml-provider", Unsupported),
        ("server-certificate", Unsupported),
        ("mfa", Unsupported),
    ]),
    ("iot", &[
        ("thing", Link(|a, c| Some(format!(
            "{}#/thing/{}",
            service_home(a, c, "iot"),
            encode(a.resource())
        )))),
        ("policy", Unsupported),
        ("cert", Unsupported),
    ]),
    ("kafka", &[
        ("cluster", Link(|a, c| Some(format!(
            "{}#/clusters/details?clusterArn={}",
            service_home(a, c, "msk"),
            encode(a.raw())
        )))),
        ("configuration", Unsupported),
    ]),
    ("kinesis", &[
        ("stream", Link(|a, c| Some(format!(
            "{}#/streams/details/{}/monitoring",
            service_home(a, c, "kinesis"),
            encode(a.resource())
        )))),
    ]),
    ("kinesisanalytics", &[
        ("application", Link(|a, c| Some(format!(
            "{}#/application/{}",
            service_home(a, c, "kinesisanalytics"),
            encode(a.resource())
        )))),
    ]),
    ("kinesisvideo", &[
        // stream/{name}/{creation-epoch}
        ("stream", Link(|a, c| Some(format!(
            "{}#/streams/streamName/{}",
            service_home(a, c, "kinesisvideo"),
            encode(a.path_all_but_last())
        )))),
    ]),
    ("kms", &[
        ("key", Link(|a, c| Some(format!(
            "{}#/kms/keys/{}",
            service_home(a, c, "kms"),
            encode(a.resource())
        )))),
        ("alias", Unsupported),
    ]),
    ("lambda", &[
        ("function", Link(lambda_function)),
        ("layer", Link(lambda_layer)),
        ("event-source-mapping", Unsupported),
        ("code-signing-config", Unsupported),
    ]),
    ("logs", &[
        ("log-group", Link(logs_log_group)),
        ("destination", Unsupported),
    ]),
    ("mq", &[
        ("broker", Link(mq_broker)),
        ("configuration", Unsupported),
    ]),
    ("organizations", &[
        ("account", Link(|a, c| Some(format!(
            "https://{c}/organizations/v2/home/accounts/{}",
            encode(a.path_last())
        )))),
        ("ou", Link(|a, c| Some(format!(
            "https://{c}/organizations/v2/home/accounts?ouId={}",
            encode(a.path_last())
        )))),
        ("policy", Unsupported),
        ("root", Unsupported),
        ("handshake", Unsupported),
    ]),
    ("quicksight", &[
        ("dashboard", Unsupported),
        ("analysis", Unsupported),
        ("dataset", Unsupported),
    ]),
    ("ram", &[
        ("resource-share", Unsupported),
    ]),
    ("rds", &[
        ("db", Link(|a, c| rds_page(a, c, "database:id=", ";is-cluster=false"))),
        ("cluster", Link(|a, c| rds_page(a, c, "database:id=", ";is-cluster=true"))),
        ("snapshot", Link(|a, c| rds_page(a, c, "db-snapshot:id=", ""))),
        ("cluster-snapshot", Link(|a, c| rds_page(a, c, "db-cluster-snapshot:id=", ""))),
        ("subgrp", Link(|a, c| rds_page(a, c, "db-subnet-group:id=", ""))),
        ("pg", Link(|a, c| rds_page(a, c, "parameter-group-details:parameter-group-name=", ""))),
        ("cluster-pg", Unsupported),
        ("og", Unsupported),
        ("secgrp", Unsupported),
        ("es", Unsupported),
    ]),
    ("redshift", &[
        ("cluster", Link(|a, c| Some(format!(
            "{}#cluster-details?cluster={}",
            service_home(a, c, "redshiftv2"),
            encode(a.resource())
        )))),
        ("snapshot", Unsupported),
        ("dbname", Unsupported),
        ("dbuser", Unsupported),
    ]),
    ("rekognition", &[
        ("collection", Unsupported),
        ("project", Unsupported),
    ]),
    ("resource-groups", &[
        ("group", Link(|a, c| {
            let region = a.region();
            Some(format!(
                "https://{region}.{c}/resource-groups/group/{}?region={region}",
                encode(a.resource())
            ))
        })),
    ]),
    ("route53", &[
        ("hostedzone", Link(|a, c| Some(format!(
            "https://{c}/route53/v2/hostedzones#ListRecordSets/{}",
            encode(a.resource())
        )))),
        ("healthcheck", Link(|a, c| Some(format!(
            "https://{c}/route53/healthchecks/home#/details/{}",
            encode(a.resource())
        )))),
        ("change", Unsupported),
    ]),
    ("s3", &[
        ("", Link(|a, c| Some(format!(
            "https://s3.{c}/s3/buckets/{}",
            encode(a.resource())
        )))),
        ("accesspoint", Unsupported),
    ]),
    ("sagemaker", &[
        ("notebook-instance", Link(|a, c| sagemaker_page(a, c, "notebook-instances"))),
        ("endpoint", Link(|a, c| sagemaker_page(a, c, "endpoints"))),
        ("model", Link(|a, c| sagemaker_page(a, c, "models"))),
        ("training-job", Link(|a, c| sagemaker_page(a, c, "jobs"))),
        ("domain", Unsupported),
        ("pipeline", Unsupported),
    ]),
    ("secretsmanager", &[
        ("secret", Link(secretsmanager_secret)),
    ]),
    ("securityhub", &[
        ("hub", Unsupported),
    ]),
    ("ses", &[
        ("identity", Link(|a, c| Some(format!(
            "{}#/verified-identities/{}",
            service_home(a, c, "ses"),
            encode(a.resource())
        )))),
        ("configuration-set", Unsupported),
    ]),
    ("shield", &[
        ("protection", Unsupported),
    ]),
    ("sns", &[
        ("", Link(|a, c| Some(format!(
            "{}#/topic/{}",
            service_home(a, c, "sns/v3"),
            encode(a.raw())
        )))),
    ]),
    ("sqs", &[
        ("", Link(sqs_queue)),
    ]),
    ("ssm", &[
        ("parameter", Link(ssm_parameter)),
        ("document", Link(|a, c| {
            let region = a.region();
            Some(format!(
                "https://{region}.{c}/systems-manager/documents/{}/description?region={region}",
                encode(a.resource())
            ))
        })),
        ("managed-instance", Link(|a, c| {
            let region = a.region();
            Some(format!(
                "https://{region}.{c}/systems-manager/managed-instances/{}/description?region={region}",
                encode(a.resource())
            ))
        })),
        ("automation-definition", Unsupported),
        ("maintenancewindow", Unsupported),
        ("patchbaseline", Unsupported),
    ]),
    ("states", &[
        ("stateMachine", Link(|a, c| Some(format!(
            "{}#/statemachines/view/{}",
            service_home(a, c, "states"),
            encode(a.raw())
        )))),
        ("execution", Link(|a, c| Some(format!(
            "{}#/executions/details/{}",
            service_home(a, c, "states"),
            encode(a.raw())
        )))),
        ("activity", Unsupported),
    ]),
    ("storagegateway", &[
        ("gateway", Link(|a, c| Some(format!(
            "{}#/gateways/{}",
            service_home(a, c, "storagegateway"),
            encode(a.resource())
        )))),
        ("share", Unsupported),
    ]),
    ("synthetics", &[
        ("canary", Link(|a, c| Some(format!(
            "{}#synthetics:canary/detail/{}",
            service_home(a, c, "cloudwatch"),
            encode(a.resource())
        )))),
    ]),
    ("timestream", &[
        ("database", Unsupported),
        ("table", Unsupported),
    ]),
    ("transfer", &[
        ("server", Link(|a, c| Some(format!(
            "{}#/servers/{}",
            service_home(a, c, "transfer"),
            encode(a.resource())
        )))),
        ("user", Unsupported),
    ]),
    ("wafv2", &[
        ("regional", Link(wafv2_entity)),
        ("global", Link(wafv2_entity)),
    ]),
    ("workspaces", &[
        ("workspace", Link(|a, c| Some(format!(
            "{}#listworkspaces:search={}",
            service_home(a, c, "workspaces"),
            encode(a.resource())
        )))),
        ("directory", Unsupported),
    ]),
    ("xray", &[
        ("group", Unsupported),
        ("sampling-rule", Unsupported),
    ]),
];
