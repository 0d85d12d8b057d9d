mod app_config;
mod boot;
mod contact_view;
mod dom;
mod navigation;
mod pin_view;
mod reveal;
mod scroll_runtime;
mod scrub_loop;
mod sections;
mod snap_engine;
mod yew_app;

fn main() {
    console_error_panic_hook::set_once();
    boot::advance(boot::BootPhase::Mounting);
    yew_app::run_app();
}
