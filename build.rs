use chrono::Utc;

fn main() {
    // Build timestamp, logged by the gateway at startup / 构建时间
    let build_time = Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string();
    println!("cargo:rustc-env=BUILD_TIME={}", build_time);

    println!("cargo:rerun-if-changed=build.rs");
}
