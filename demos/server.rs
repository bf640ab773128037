#[macro_use]
extern crate finchers;
extern crate finchers_mustache;
#[macro_use]
extern crate log;
extern crate pretty_env_logger;
#[macro_use]
extern crate serde;

use finchers::prelude::*;
use finchers_mustache::{mustache, MustacheEngine, Renderer};

#[derive(Debug, Serialize)]
struct Greeting {
    name: String,
}

fn main() {
    pretty_env_logger::init();

    let engine = MustacheEngine::builder(concat!(env!("CARGO_MANIFEST_DIR"), "/templates"))
        .buffer_size(512)
        .finish()
        .expect("invalid template configuration");

    let endpoint = path!(@get / String /)
        .map(|name: String| mustache("greeting", Greeting { name }))
        .wrap(Renderer::new(engine));

    info!("Listening on http://127.0.0.1:4000");
    finchers::server::start(endpoint)
        .serve("127.0.0.1:4000")
        .unwrap_or_else(|e| error!("{}", e));
}
