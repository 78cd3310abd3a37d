#[macro_export]
macro_rules! retry {
    // Async expression producing a Result; retried after 5, 10 and 20 seconds
    ($f:expr) => {{
        let mut wait: u64 = 5;
        loop {
            let res = $f.await;
            if res.is_ok() {
                break res;
            }
            if wait <= 20 {
                log::warn!("retrying in {} seconds", wait);
                tokio::time::sleep(std::time::Duration::from_secs(wait)).await;
                wait *= 2;
                continue;
            }
            break res;
        }
    }};
}
