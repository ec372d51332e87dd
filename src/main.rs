use nexus_portal::{
    ui::app::App,
    util::{hook::install_panic_hook, log::initialize_logging},
};

#[tokio::main(flavor = "multi_thread", worker_threads = 4)]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    // `.env` must be read before anything looks at PORTAL_DATA_URL or
    // PORTAL_LOG: the data service captures its base URL at construction
    // and the log filter is fixed once installed.
    dotenv::dotenv().ok();
    initialize_logging()?;
    install_panic_hook();

    App::new()?.run().await
}
