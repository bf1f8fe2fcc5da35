#[cfg(target_arch = "wasm32")]
fn main() {
    use ledgerly::app::App;

    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    // browser-only app; built for wasm32 via Trunk
}
