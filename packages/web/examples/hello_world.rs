//! The whole app: bind a list view to the page body and draw it once on load.

fn main() {
    listview_web::init_logger(tracing::Level::INFO);

    if let Err(err) = listview_web::launch_default() {
        tracing::error!("failed to launch list view: {err}");
    }
}
