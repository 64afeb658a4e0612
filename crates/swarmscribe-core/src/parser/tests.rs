use super::*;

const API_INSPECT: &str = r#"[
  {
    "ID": "k3v9q0x1y2z3",
    "Version": { "Index": 42 },
    "Spec": {
      "Name": "web_api",
      "Labels": { "com.docker.stack.namespace": "web" },
      "TaskTemplate": {
        "ContainerSpec": {
          "Image": "registry.local/api:2.1@sha256:0123abcd",
          "Args": ["serve", "--port", "80"],
          "Env": ["RUST_LOG=info", "DB_HOST=db"],
          "StopGracePeriod": 10000000000
        },
        "Networks": [{ "Target": "4f8a2c1b9d3e7f6a5b4c", "Aliases": ["api"] }]
      },
      "Mode": { "Replicated": { "Replicas": 3 } },
      "UpdateConfig": {
        "Parallelism": 1,
        "FailureAction": "pause",
        "Monitor": 5000000000,
        "MaxFailureRatio": 0,
        "Order": "stop-first"
      },
      "RollbackConfig": {
        "Parallelism": 1,
        "FailureAction": "pause",
        "Monitor": 5000000000,
        "MaxFailureRatio": 0,
        "Order": "stop-first"
      },
      "EndpointSpec": {
        "Mode": "vip",
        "Ports": [
          { "Protocol": "tcp", "TargetPort": 80, "PublishedPort": 8080, "PublishMode": "ingress" }
        ]
      }
    }
  }
]"#;

#[test]
fn test_parse_service_list() {
    let output = "web_api replicated\nweb_db global\nmy_big_stack_worker replicated\n";
    let services = parse_service_list(output).unwrap();

    assert_eq!(services.len(), 3);
    let api = &services["web_api"];
    assert_eq!(api.stack, "web");
    assert_eq!(api.service, "api");
    assert_eq!(api.mode, "replicated");

    let worker = &services["my_big_stack_worker"];
    assert_eq!(worker.stack, "my_big_stack");
    assert_eq!(worker.service, "worker");
}

#[test]
fn test_parse_service_list_keeps_mode_remainder_verbatim() {
    let services = parse_service_list("  web_api   replicated job  \n").unwrap();
    assert_eq!(services["web_api"].mode, "replicated job");
}

#[test]
fn test_parse_service_list_empty_output() {
    assert!(parse_service_list("").unwrap().is_empty());
    assert!(parse_service_list("\n\n").unwrap().is_empty());
}

#[test]
fn test_parse_service_list_missing_mode() {
    let err = parse_service_list("web_api replicated\nweb_db\n").unwrap_err();
    match err {
        ParseError::MissingMode { line, content } => {
            assert_eq!(line, 2);
            assert_eq!(content, "web_db");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_parse_service_list_name_without_underscore() {
    let err = parse_service_list("standalone replicated").unwrap_err();
    assert!(matches!(err, ParseError::InvalidServiceName(name) if name == "standalone"));
}

#[test]
fn test_parse_network_list() {
    let output = "4f8a2c1b9d3e7f6a web_net\nab12cd34ef56 bridge\n\n9999 host\n";
    let networks = parse_network_list(output).unwrap();

    assert_eq!(networks.len(), 3);
    assert_eq!(networks.get("4f8a2c1b9d3e"), Some("web_net"));
    assert_eq!(networks.get("ab12cd34ef56"), Some("bridge"));
    assert_eq!(networks.get("9999"), Some("host"));
}

#[test]
fn test_parse_network_list_rejects_wrong_column_count() {
    let err = parse_network_list("4f8a2c1b9d3e web_net\nab12cd34ef56\n").unwrap_err();
    assert!(matches!(err, ParseError::MalformedNetworkLine { line: 2, .. }));

    let err = parse_network_list("4f8a2c1b9d3e web net\n").unwrap_err();
    assert!(matches!(err, ParseError::MalformedNetworkLine { line: 1, .. }));
}

#[test]
fn test_parse_inspect() {
    let record = parse_inspect("web_api", API_INSPECT).unwrap();
    let spec = &record.spec;

    assert_eq!(record.id.as_deref(), Some("k3v9q0x1y2z3"));
    assert_eq!(
        spec.task_template.container_spec.image,
        "registry.local/api:2.1@sha256:0123abcd"
    );
    assert_eq!(spec.mode.replicas(), Some(3));
    assert_eq!(spec.update_config.monitor, 5_000_000_000);
    assert_eq!(spec.rollback_config.order, "stop-first");

    let ports = spec.endpoint_spec.as_ref().unwrap().ports.as_ref().unwrap();
    assert_eq!(ports[0].published_port, Some(8080));
    assert_eq!(ports[0].target_port, 80);

    let networks = spec.task_template.networks.as_ref().unwrap();
    assert_eq!(networks[0].target, "4f8a2c1b9d3e7f6a5b4c");
}

#[test]
fn test_parse_inspect_empty_array() {
    let err = parse_inspect("web_api", "[]").unwrap_err();
    assert!(matches!(err, ParseError::EmptyInspect(name) if name == "web_api"));
}

#[test]
fn test_parse_inspect_invalid_payload() {
    let err = parse_inspect("web_api", "Error: no such service").unwrap_err();
    assert!(matches!(err, ParseError::InspectPayload { .. }));
    assert!(err.to_string().contains("web_api"));
}

#[test]
fn test_parse_inspect_missing_update_config() {
    let payload = r#"[{"Spec":{"TaskTemplate":{"ContainerSpec":{"Image":"nginx"}},"RollbackConfig":{}}}]"#;
    let err = parse_inspect("web_proxy", payload).unwrap_err();
    assert!(matches!(err, ParseError::InspectPayload { .. }));
}
