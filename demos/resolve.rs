use dotted_config::Resolver;
use serde::Deserialize;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Deserialize)]
struct Connection {
    host: String,
    port: u16,
}

fn main() -> Result<(), dotted_config::Error> {
    // RUST_LOG=dotted_config=trace shows every load and descent
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let resolver = Resolver::builder()
        .with_root(concat!(env!("CARGO_MANIFEST_DIR"), "/demos/app"))
        .build()?;

    let default = resolver.get("database.default")?;
    let mysql: Connection = resolver.get_as("database.connections.mysql")?;
    println!("default connection: {default}");
    println!("mysql: {}:{}", mysql.host, mysql.port);

    for driver in ["mysql", "sqlite", "pgsql"] {
        let configured = resolver.has("database.connections", driver)?;
        println!("{driver} configured: {configured}");
    }

    let missing = resolver.get_in("messages.errors.not_found", "lang")?;
    println!("lang: {} / {missing}", resolver.get_in("messages.welcome", "lang")?);

    Ok(())
}
