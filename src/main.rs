use crate::config::SiteConfig;
use crate::inventory::InventoryStore;
use crate::router::handle;
use crate::state::AppState;
use astra::Server;

mod config;
mod debounce;
mod errors;
mod filters;
mod format;
mod forms;
mod inventory;
mod messaging;
mod notify;
mod render;
mod responses;
mod router;
mod state;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    // 1️⃣ Read configuration from the environment
    let config = match SiteConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("❌ Configuration error: {e}");
            std::process::exit(1);
        }
    };

    // 2️⃣ Load the inventory once; a failure leaves an empty (but working) site
    let inventory = InventoryStore::load_or_empty(&config.inventory_source, config.fetch_timeout);

    // 3️⃣ Start the server
    let addr = config.addr;
    println!("Starting server at http://{addr}");

    let server = Server::bind(&addr).max_workers(config.max_workers);
    let state = AppState::new(config, inventory);

    // 4️⃣ Serve requests, passing shared state into the closure
    let result = server.serve(move |req, _info| match handle(req, &state) {
        Ok(resp) => resp,
        Err(err) => templates::html_error_response(err),
    });

    if let Err(e) = result {
        eprintln!("Server ended with error: {e}");
    }

    println!("Server shut down cleanly.");
}
