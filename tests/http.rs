use once_cell::sync::Lazy;
use reqwest::Client;
use serde::Deserialize;
use std::net::TcpListener;
use std::process::{Child, Command, Stdio};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tokio::time::sleep;

#[derive(Debug, Deserialize)]
struct DailyStatsResponse {
    date: String,
    total_smiles: u64,
    smiles_back: u64,
    total_new_smiles: u64,
}

fn assert_invariants(stats: &DailyStatsResponse) {
    assert!(stats.smiles_back <= stats.total_smiles);
    assert_eq!(stats.total_new_smiles, stats.total_smiles + stats.smiles_back);
}

struct TestServer {
    base_url: String,
    child: Child,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

static TEST_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));
static SERVER: Lazy<Mutex<Option<Arc<TestServer>>>> = Lazy::new(|| Mutex::new(None));

#[cfg(unix)]
mod cleanup {
    use std::sync::atomic::{AtomicI32, Ordering};
    use std::sync::Once;

    static REGISTER: Once = Once::new();
    static PID: AtomicI32 = AtomicI32::new(0);

    pub fn register(pid: u32) {
        REGISTER.call_once(|| {
            PID.store(pid as i32, Ordering::SeqCst);
            unsafe {
                libc::atexit(on_exit);
            }
        });
    }

    extern "C" fn on_exit() {
        let pid = PID.load(Ordering::SeqCst);
        if pid > 0 {
            unsafe {
                libc::kill(pid, libc::SIGTERM);
            }
        }
    }
}

fn pick_free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}

fn unique_data_path() -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let mut path = std::env::temp_dir();
    path.push(format!("smileback_http_{}_{}.json", std::process::id(), nanos));
    path.to_string_lossy().to_string()
}

async fn wait_until_ready(base_url: &str) {
    let client = Client::new();
    let deadline = Instant::now() + Duration::from_secs(3);
    loop {
        if let Ok(resp) = client.get(format!("{base_url}/api/today")).send().await {
            if resp.status().is_success() {
                return;
            }
        }
        if Instant::now() > deadline {
            panic!("server did not become ready");
        }
        sleep(Duration::from_millis(100)).await;
    }
}

async fn spawn_server() -> TestServer {
    let port = pick_free_port();
    let data_path = unique_data_path();
    let child = Command::new(env!("CARGO_BIN_EXE_smileback"))
        .env("PORT", port.to_string())
        .env("SMILEBACK_DATA_PATH", data_path)
        .env_remove("SMILEBACK_ANALYTICS_KEY")
        .env("RUST_LOG", "info")
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .expect("failed to spawn server");

    #[cfg(unix)]
    cleanup::register(child.id());

    let base_url = format!("http://127.0.0.1:{port}");
    wait_until_ready(&base_url).await;

    TestServer { base_url, child }
}

async fn shared_server() -> Arc<TestServer> {
    let mut guard = SERVER.lock().await;
    if let Some(server) = guard.as_ref() {
        return Arc::clone(server);
    }
    let server = Arc::new(spawn_server().await);
    *guard = Some(Arc::clone(&server));
    server
}

async fn get_today(client: &Client, base_url: &str) -> DailyStatsResponse {
    let stats: DailyStatsResponse = client
        .get(format!("{base_url}/api/today"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_invariants(&stats);
    stats
}

#[tokio::test]
async fn http_smile_back_updates_today() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let before = get_today(&client, &server.base_url).await;

    let response = client
        .post(format!("{}/api/smile", server.base_url))
        .json(&serde_json::json!({ "action": "smile_back" }))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());
    let reported: DailyStatsResponse = response.json().await.unwrap();
    assert_invariants(&reported);

    let today = get_today(&client, &server.base_url).await;
    assert_eq!(today.total_smiles, before.total_smiles + 1);
    assert_eq!(today.smiles_back, before.smiles_back + 1);
    assert_eq!(today.total_new_smiles, before.total_new_smiles + 2);
    assert_eq!(today.total_smiles, reported.total_smiles);
    assert!(!today.date.is_empty());
}

#[tokio::test]
async fn http_no_smile_back_updates_today() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let before = get_today(&client, &server.base_url).await;

    let response = client
        .post(format!("{}/api/smile", server.base_url))
        .json(&serde_json::json!({ "action": "no_smile_back" }))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());

    let today = get_today(&client, &server.base_url).await;
    assert_eq!(today.total_smiles, before.total_smiles + 1);
    assert_eq!(today.smiles_back, before.smiles_back);
    assert_eq!(today.total_new_smiles, before.total_new_smiles + 1);
}

#[tokio::test]
async fn http_rejects_unknown_action() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let before = get_today(&client, &server.base_url).await;

    let response = client
        .post(format!("{}/api/smile", server.base_url))
        .json(&serde_json::json!({ "action": "wave" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);

    let today = get_today(&client, &server.base_url).await;
    assert_eq!(today.total_smiles, before.total_smiles);
}

#[tokio::test]
async fn http_index_serves_widget_page() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/", server.base_url))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());
    let body = response.text().await.unwrap();
    assert!(body.contains("SmileBack"));
    assert!(body.contains("Person Smiled Back"));
}
