use std::time::{SystemTime, UNIX_EPOCH};

fn main() {
    // Seconds since the epoch at compile time; main logs it as `build_id`.
    let build_id = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs().to_string())
        .unwrap_or_else(|_| "dev".to_string());
    println!("cargo:rustc-env=ACTIVITY_SIGNUP_BUILD_ID={}", build_id);
}
