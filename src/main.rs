use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use dotenv::dotenv;

use doctor_reviews::{build_store, config::Config, controllers, AppState};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
	dotenv().ok();
	env_logger::Builder::from_env(
		env_logger::Env::default().default_filter_or("actix_web=info,doctor_reviews=info"),
	)
	.init();

	let config = Config::init();

	let store = match build_store(&config).await {
		Ok(store) => store,
		Err(err) => {
			log::error!("🔥 Failed to set up review storage: {}", err);
			std::process::exit(1);
		}
	};

	log::info!("🚀 Server started on {}:{}", config.host, config.port);

	let bind = (config.host.clone(), config.port);
	let data = web::Data::new(AppState::new(store, config));

	HttpServer::new(move || {
		App::new()
			.app_data(data.clone())
			.configure(controllers::config)
			.wrap(Cors::permissive())
			.wrap(Logger::default())
	})
	.bind(bind)?
	.run()
	.await
}
