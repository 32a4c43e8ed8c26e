fn main() {
    println!("cargo:rerun-if-changed=native/oslog_shim.c");

    // os_log is a set of C macros, so the emit path goes through a tiny C shim.
    // Only Apple targets have <os/log.h>; everywhere else the tracing sink is used.
    let vendor = std::env::var("CARGO_CFG_TARGET_VENDOR").unwrap_or_default();
    if vendor == "apple" {
        cc::Build::new()
            .file("native/oslog_shim.c")
            .compile("oslog_shim");
    }
}
