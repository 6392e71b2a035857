//! End-to-end tests for the mirror list service.

use mirrorlist::config::MirrorlistConfig;

mod common;

async fn get(addr: std::net::SocketAddr, path_and_query: &str) -> reqwest::Response {
    reqwest::Client::new()
        .get(format!("http://{addr}{path_and_query}"))
        .send()
        .await
        .expect("server unreachable")
}

fn centos_config() -> MirrorlistConfig {
    let mut config = MirrorlistConfig::default();
    config.mirrors.insert(
        "7",
        "os",
        "x86_64",
        vec!["http://mirror.example/centos/{{.Release}}/os/{{.Arch}}/".to_string()],
    );
    config
}

#[tokio::test]
async fn resolves_exact_triple() {
    let (addr, _shutdown) = common::spawn_server(centos_config()).await;

    let res = get(addr, "/?arch=x86_64&repo=os&release=7").await;
    assert_eq!(res.status().as_u16(), 200);
    assert_eq!(
        res.text().await.unwrap(),
        "http://mirror.example/centos/7/os/x86_64/\n"
    );
}

#[tokio::test]
async fn wildcard_table_catches_everything() {
    let mut config = MirrorlistConfig::default();
    config
        .mirrors
        .insert("*", "*", "*", vec!["http://default/".to_string()]);
    let (addr, _shutdown) = common::spawn_server(config).await;

    let res = get(addr, "/?arch=sparc64&repo=anything&release=99").await;
    assert_eq!(res.status().as_u16(), 200);
    assert_eq!(res.text().await.unwrap(), "http://default/\n");
}

#[tokio::test]
async fn unknown_release_is_404() {
    let (addr, _shutdown) = common::spawn_server(centos_config()).await;

    let res = get(addr, "/?arch=x86_64&repo=os&release=8").await;
    assert_eq!(res.status().as_u16(), 404);
    assert_eq!(res.text().await.unwrap(), "invalid release\n");
}

#[tokio::test]
async fn unknown_arch_is_404() {
    let (addr, _shutdown) = common::spawn_server(centos_config()).await;

    let res = get(addr, "/?arch=i386&repo=os&release=7").await;
    assert_eq!(res.status().as_u16(), 404);
    assert_eq!(res.text().await.unwrap(), "invalid arch\n");
}

#[tokio::test]
async fn repo_matching_is_case_insensitive() {
    let (addr, _shutdown) = common::spawn_server(centos_config()).await;

    let res = get(addr, "/?arch=x86_64&repo=OS&release=7").await;
    assert_eq!(res.status().as_u16(), 200);
    assert_eq!(
        res.text().await.unwrap(),
        "http://mirror.example/centos/7/os/x86_64/\n"
    );
}

#[tokio::test]
async fn missing_parameter_is_400() {
    let (addr, _shutdown) = common::spawn_server(centos_config()).await;

    let res = get(addr, "/?repo=os&release=7").await;
    assert_eq!(res.status().as_u16(), 400);
    assert_eq!(res.text().await.unwrap(), "arch not specified\n");
}

#[tokio::test]
async fn duplicate_parameter_is_400() {
    let (addr, _shutdown) = common::spawn_server(centos_config()).await;

    let res = get(addr, "/?arch=x86_64&arch=i386&repo=os&release=7").await;
    assert_eq!(res.status().as_u16(), 400);
    assert_eq!(res.text().await.unwrap(), "arch specified more than once\n");
}

#[tokio::test]
async fn empty_parameter_is_400() {
    let (addr, _shutdown) = common::spawn_server(centos_config()).await;

    let res = get(addr, "/?arch=x86_64&repo=&release=7").await;
    assert_eq!(res.status().as_u16(), 400);
    assert_eq!(res.text().await.unwrap(), "repo is empty\n");
}

#[tokio::test]
async fn non_get_method_is_400() {
    let (addr, _shutdown) = common::spawn_server(centos_config()).await;

    let res = reqwest::Client::new()
        .post(format!("http://{addr}/?arch=x86_64&repo=os&release=7"))
        .send()
        .await
        .expect("server unreachable");
    assert_eq!(res.status().as_u16(), 400);
    assert_eq!(res.text().await.unwrap(), "bad method\n");
}

#[tokio::test]
async fn non_root_path_is_404() {
    let (addr, _shutdown) = common::spawn_server(centos_config()).await;

    let res = get(addr, "/mirrors?arch=x86_64&repo=os&release=7").await;
    assert_eq!(res.status().as_u16(), 404);
}

#[tokio::test]
async fn malformed_template_is_skipped() {
    let mut config = MirrorlistConfig::default();
    config.mirrors.insert(
        "7",
        "os",
        "x86_64",
        vec![
            "http://a/{{.Release}}".to_string(),
            "http://b/[[bad".to_string(),
            "http://c/{{.Arch}}".to_string(),
        ],
    );
    let (addr, _shutdown) = common::spawn_server(config).await;

    let res = get(addr, "/?arch=x86_64&repo=os&release=7").await;
    assert_eq!(res.status().as_u16(), 200);
    assert_eq!(res.text().await.unwrap(), "http://a/7\nhttp://c/x86_64\n");
}

#[tokio::test]
async fn empty_url_list_resolves_to_empty_body() {
    let mut config = MirrorlistConfig::default();
    config.mirrors.insert("7", "os", "x86_64", vec![]);
    let (addr, _shutdown) = common::spawn_server(config).await;

    let res = get(addr, "/?arch=x86_64&repo=os&release=7").await;
    assert_eq!(res.status().as_u16(), 200);
    assert_eq!(res.text().await.unwrap(), "");
}

#[tokio::test]
async fn response_carries_request_id() {
    let (addr, _shutdown) = common::spawn_server(centos_config()).await;

    let res = get(addr, "/?arch=x86_64&repo=os&release=7").await;
    assert!(res.headers().contains_key("x-request-id"));

    let res = reqwest::Client::new()
        .get(format!("http://{addr}/?arch=x86_64&repo=os&release=7"))
        .header("x-request-id", "test-correlation-id")
        .send()
        .await
        .expect("server unreachable");
    assert_eq!(
        res.headers()["x-request-id"].to_str().unwrap(),
        "test-correlation-id"
    );
}

#[tokio::test]
async fn repeated_requests_are_byte_identical() {
    let (addr, _shutdown) = common::spawn_server(centos_config()).await;

    let first = get(addr, "/?arch=x86_64&repo=os&release=7")
        .await
        .bytes()
        .await
        .unwrap();
    let second = get(addr, "/?arch=x86_64&repo=os&release=7")
        .await
        .bytes()
        .await
        .unwrap();
    assert_eq!(first, second);
}
