use std::{env, path::PathBuf, str::FromStr};

#[derive(Debug, Clone)]
pub struct Config {
	pub host: String,
	pub port: u16,
	pub database_url: Option<String>,
	pub max_connections: u32,
	pub seed_path: Option<PathBuf>,
	pub default_page_size: usize,
}

impl Default for Config {
	fn default() -> Self {
		Config {
			host: "127.0.0.1".to_string(),
			port: 8000,
			database_url: None,
			max_connections: 10,
			seed_path: None,
			default_page_size: 5,
		}
	}
}

fn optional_var(key: &str) -> Option<String> {
	env::var(key).ok().filter(|value| !value.trim().is_empty())
}

fn parsed_var<T: FromStr>(key: &str, default: T) -> T {
	match optional_var(key) {
		Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
			log::warn!("{} has an invalid value '{}', using the default", key, raw);
			default
		}),
		None => default,
	}
}

impl Config {
	pub fn init() -> Config {
		let defaults = Config::default();

		Config {
			host: optional_var("HOST").unwrap_or(defaults.host),
			port: parsed_var("PORT", defaults.port),
			database_url: optional_var("DATABASE_URL"),
			max_connections: parsed_var("DATABASE_MAX_CONNECTIONS", defaults.max_connections),
			seed_path: optional_var("REVIEWS_SEED_PATH").map(PathBuf::from),
			default_page_size: parsed_var("DEFAULT_PAGE_SIZE", defaults.default_page_size).max(1),
		}
	}
}
