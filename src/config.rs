// Adapted from https://dev.to/bdhobare/managing-application-config-in-rust-23ai
use std::collections::HashMap;
use url::Url;

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: Url,
    pub listen_port: u16,
}

pub trait ConfigProvider {
    fn get_config(&self) -> &Config;
}

pub struct EnvVarProvider(Config);

impl EnvVarProvider {
    pub fn new(args: HashMap<String, String>) -> Self {
        let config = Config {
            database_url: Url::parse(args.get("DATABASE_URL").expect("Missing DATABASE_URL"))
                .expect("Unable to parse DATABASE_URL as a URL"),
            listen_port: args
                .get("LISTEN_PORT")
                .expect("Missing LISTEN_PORT")
                .parse()
                .expect("Unable to parse LISTEN_PORT as a port number"),
        };

        EnvVarProvider(config)
    }
}

impl ConfigProvider for EnvVarProvider {
    fn get_config(&self) -> &Config {
        &self.0
    }
}
