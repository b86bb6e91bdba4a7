use crate::catalog::CatalogFile;
use crate::responses::error_to_response;
use crate::router::handle;
use astra::Server;
use std::net::SocketAddr;

mod catalog;
mod domain;
mod errors;
mod responses;
mod router;
mod templates;

#[cfg(test)]
mod tests;

const CATALOG_PATH: &str = "data/imoveis.json";

fn main() {
    // 1️⃣ Create the catalog handle
    let catalog = CatalogFile::new(CATALOG_PATH);

    // 2️⃣ Probe the data file once so a bad deploy shows up in the logs
    // immediately; the site still boots and serves the empty shell.
    match catalog.load() {
        Ok(loaded) => println!("✅ Catalog loaded: {} listings", loaded.properties.len()),
        Err(e) => eprintln!("⚠️ Catalog check failed: {e}"),
    }

    // 3️⃣ Start the server
    let addr: SocketAddr = "127.0.0.1:3000".parse().unwrap();
    println!("Starting server at http://{addr}");

    let server = Server::bind(&addr).max_workers(8);

    // 4️⃣ Serve requests, passing the catalog handle into the closure
    let result = server.serve(move |req, _info| match handle(req, &catalog) {
        Ok(resp) => resp,
        Err(err) => error_to_response(err),
    });

    if let Err(e) = result {
        eprintln!("Server ended with error: {e}");
    }

    println!("Server shut down cleanly.");
}
