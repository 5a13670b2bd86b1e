use std::net::SocketAddr;
use std::sync::OnceLock;
use std::time::Duration;
use tracing_subscriber::FmtSubscriber;

/// Start the mock service on `port` once per test binary and return its base
/// URL. Each test file uses its own port so binaries can run in parallel.
#[allow(unused)]
pub async fn init(port: u16) -> String {
    static ONCE_LOCK: OnceLock<()> = OnceLock::new();

    let wait = ONCE_LOCK.get().is_none();

    ONCE_LOCK.get_or_init(|| {
        let _ = FmtSubscriber::builder()
            .with_env_filter("paymeter=debug,mock_service=debug")
            .try_init();

        // A dedicated runtime so the server outlives individual test runtimes.
        std::thread::spawn(move || {
            let rt = tokio::runtime::Runtime::new().unwrap();
            rt.block_on(async move {
                let addr: SocketAddr = format!("127.0.0.1:{port}").parse().unwrap();
                mock_service::run(addr).await;
            });
        });
    });

    if wait {
        tokio::time::sleep(Duration::from_millis(200)).await;
    }

    format!("http://127.0.0.1:{port}")
}
