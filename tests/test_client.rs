use camino::Utf8Path;
use domino::errors::{DominoError, FileIOError};
use domino::types::{BlobKey, CommitId, ProjectPath, RunId};
use domino::{DominoClient, StartRun};
use futures::TryStreamExt;
use reqwest::StatusCode;
use serde_json::json;
use wiremock::matchers::{basic_auth, body_json, body_string_contains, method, path};
use wiremock::{Mock, ResponseTemplate};

use helpers::{connect, mock_domino, API_KEY};

mod helpers;

// ========================================
//                 CONNECT
// ========================================

#[tokio::test]
async fn test_connect_caches_version() {
    let server = mock_domino("4.1.3.0").await;
    let client = connect(&server).await;
    assert_eq!(client.version().as_str(), "4.1.3.0");
    assert_eq!(client.routes().owner().as_str(), "marks");
    assert_eq!(client.routes().project().as_str(), "p1");
}

#[tokio::test]
async fn test_connect_fails_when_version_unavailable() {
    let server = wiremock::MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/version"))
        .respond_with(ResponseTemplate::new(503).set_body_string("down for maintenance"))
        .mount(&server)
        .await;
    let err = DominoClient::build(helpers::config_for(&server))
        .unwrap()
        .connect()
        .await
        .unwrap_err();
    match err {
        DominoError::Http { status, text, .. } => {
            assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
            assert_eq!(text, "down for maintenance");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_deployment_version() {
    let server = mock_domino("4.1.3.0").await;
    let client = connect(&server).await;
    let version = client.deployment_version().await.unwrap();
    assert_eq!(version["version"], "4.1.3.0");
}

// ========================================
//                 RUNS
// ========================================

#[tokio::test]
async fn test_runs_list() {
    let server = mock_domino("4.1.3.0").await;
    Mock::given(method("GET"))
        .and(path("/v1/projects/marks/p1/runs"))
        .and(basic_auth("", API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": [{"id": "r1"}]})))
        .expect(1)
        .mount(&server)
        .await;
    let client = connect(&server).await;
    let runs = client.runs_list().await.unwrap();
    assert_eq!(runs["data"][0]["id"], "r1");
}

#[tokio::test]
async fn test_runs_start() {
    let server = mock_domino("4.1.3.0").await;
    Mock::given(method("POST"))
        .and(path("/v1/projects/marks/p1/runs"))
        .and(basic_auth("", API_KEY))
        .and(body_json(json!({
            "command": ["main.py"],
            "isDirect": false,
            "commitId": null,
            "title": "from the API",
            "tier": null,
            "publishApiEndpoint": null
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"runId": "r2"})))
        .expect(1)
        .mount(&server)
        .await;
    let client = connect(&server).await;
    let run = StartRun {
        title: Some("from the API".to_string()),
        ..StartRun::new(["main.py"])
    };
    let started = client.runs_start(&run).await.unwrap();
    assert_eq!(started["runId"], "r2");
}

#[tokio::test]
async fn test_runs_status() {
    let server = mock_domino("4.1.3.0").await;
    Mock::given(method("GET"))
        .and(path("/v1/projects/marks/p1/runs/r2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "Running"})))
        .mount(&server)
        .await;
    let client = connect(&server).await;
    let status = client.runs_status(&RunId::from_static("r2")).await.unwrap();
    assert_eq!(status["status"], "Running");
}

#[tokio::test]
async fn test_runs_status_not_found() {
    let server = mock_domino("4.1.3.0").await;
    Mock::given(method("GET"))
        .and(path("/v1/projects/marks/p1/runs/nope"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Run not found"))
        .mount(&server)
        .await;
    let client = connect(&server).await;
    let err = client
        .runs_status(&RunId::from_static("nope"))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DominoError::Http {
            status: StatusCode::NOT_FOUND,
            ..
        }
    ));
    assert!(err.to_string().contains("Run not found"));
}

// ========================================
//                 FILES
// ========================================

#[tokio::test]
async fn test_files_list() {
    let server = mock_domino("4.1.3.0").await;
    Mock::given(method("GET"))
        .and(path("/v1/projects/marks/p1/files/c0ffee/results"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .expect(1)
        .mount(&server)
        .await;
    let client = connect(&server).await;
    let files = client
        .files_list(
            &CommitId::from_static("c0ffee"),
            &ProjectPath::from_static("results"),
        )
        .await
        .unwrap();
    assert_eq!(files["data"], json!([]));
}

#[tokio::test]
async fn test_files_upload() {
    let server = mock_domino("4.1.3.0").await;
    Mock::given(method("PUT"))
        .and(path("/v1/projects/marks/p1/data/measurements.csv"))
        .and(basic_auth("", API_KEY))
        .and(body_string_contains("name=\"file\""))
        .and(body_string_contains("filename=\"local.csv\""))
        .and(body_string_contains("a,b\n1,2\n"))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;
    let client = connect(&server).await;

    let tmp = tempfile::tempdir().unwrap();
    let local = Utf8Path::from_path(tmp.path()).unwrap().join("local.csv");
    fs_err::write(&local, "a,b\n1,2\n").unwrap();

    let res = client
        .files_upload(&ProjectPath::from_static("/data/measurements.csv"), &local)
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn test_files_upload_missing_local_file() {
    let server = mock_domino("4.1.3.0").await;
    let client = connect(&server).await;
    let err = client
        .files_upload(
            &ProjectPath::from_static("/data/x.csv"),
            Utf8Path::new("/definitely/not/here.csv"),
        )
        .await
        .unwrap_err();
    assert!(matches!(err, FileIOError::IO(_)));
    assert_eq!(helpers::requests_after_connect(&server).await, 0);
}

// ========================================
//                 BLOBS
// ========================================

#[tokio::test]
async fn test_blobs_get() {
    let server = mock_domino("4.1.3.0").await;
    Mock::given(method("GET"))
        .and(path("/v1/projects/marks/p1/blobs/abc123"))
        .and(basic_auth("", API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"blob content".to_vec()))
        .mount(&server)
        .await;
    let client = connect(&server).await;
    let chunks: Vec<bytes::Bytes> = client
        .blobs_get(&BlobKey::from_static("abc123"))
        .await
        .unwrap()
        .try_collect()
        .await
        .unwrap();
    assert_eq!(chunks.concat(), b"blob content");
}

#[tokio::test]
async fn test_blobs_download() {
    let server = mock_domino("4.1.3.0").await;
    Mock::given(method("GET"))
        .and(path("/v1/projects/marks/p1/blobs/abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"blob content".to_vec()))
        .mount(&server)
        .await;
    let client = connect(&server).await;

    let tmp = tempfile::tempdir().unwrap();
    let dst = Utf8Path::from_path(tmp.path()).unwrap().join("blob.bin");
    client
        .blobs_download(&BlobKey::from_static("abc123"), &dst, false)
        .await
        .unwrap();
    assert_eq!(fs_err::read(&dst).unwrap(), b"blob content");

    let err = client
        .blobs_download(&BlobKey::from_static("abc123"), &dst, false)
        .await
        .unwrap_err();
    assert!(matches!(err, FileIOError::IO(_)));

    client
        .blobs_download(&BlobKey::from_static("abc123"), &dst, true)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_blobs_get_missing() {
    let server = mock_domino("4.1.3.0").await;
    Mock::given(method("GET"))
        .and(path("/v1/projects/marks/p1/blobs/gone"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    let client = connect(&server).await;
    let err = client
        .blobs_get(&BlobKey::from_static("gone"))
        .await
        .err()
        .unwrap();
    assert!(matches!(
        err,
        DominoError::Http {
            status: StatusCode::NOT_FOUND,
            ..
        }
    ));
}

// ========================================
//                 ENDPOINT
// ========================================

#[tokio::test]
async fn test_endpoint_state() {
    let server = mock_domino("4.1.3.0").await;
    Mock::given(method("GET"))
        .and(path("/v1/marks/p1/endpoint/state"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"isPublished": true})))
        .mount(&server)
        .await;
    let client = connect(&server).await;
    let state = client.endpoint_state().await.unwrap();
    assert_eq!(state["isPublished"], true);
}

#[tokio::test]
async fn test_endpoint_publish() {
    let server = mock_domino("4.1.3.0").await;
    Mock::given(method("POST"))
        .and(path("/v1/marks/p1/endpoint/publishRelease"))
        .and(basic_auth("", API_KEY))
        .and(body_json(json!({
            "commitId": "c0ffee",
            "bindingDefinition": {"file": "model.py", "function": "predict"}
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    let client = connect(&server).await;
    let res = client
        .endpoint_publish("model.py", "predict", &CommitId::from_static("c0ffee"))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_endpoint_unpublish() {
    let server = mock_domino("4.1.3.0").await;
    Mock::given(method("DELETE"))
        .and(path("/v1/marks/p1/endpoint"))
        .and(basic_auth("", API_KEY))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;
    let client = connect(&server).await;
    let res = client.endpoint_unpublish().await.unwrap();
    assert_eq!(res.status(), StatusCode::NO_CONTENT);
}
