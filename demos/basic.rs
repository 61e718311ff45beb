use ev_config::{ConfigLoader, ConfigOptions};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct AppConfig {
    app: AppSection,
    db: DbSection,
}

#[derive(Debug, Deserialize)]
struct AppSection {
    name: String,
    debug: bool,
}

#[derive(Debug, Deserialize)]
struct DbSection {
    host: String,
    port: u16,
    password: Option<String>,
}

fn main() -> Result<(), ev_config::ConfigError> {
    let mut loader = ConfigLoader::new();

    println!("environment variable: {}", loader.env_varname());
    println!("environment: {}", loader.env());

    // Normally loader.get_config() picks the files by environment; here the
    // pair is named explicitly so the demo runs from the repo root.
    let config = loader.get_config_with(
        ConfigOptions::new()
            .with_public_file("demos/config_public_dev.json")
            .with_private_file("demos/config_private.json"),
    )?;

    let app: AppConfig = config.deserialize()?;

    println!("app: {} (debug={})", app.app.name, app.app.debug);
    println!("db: {}:{}", app.db.host, app.db.port);
    println!("db password set: {}", app.db.password.is_some());

    Ok(())
}
