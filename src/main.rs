use actix_files::Files;
use actix_web::web::Data;
use actix_web::{App, HttpResponse, HttpServer, middleware, web};
use log::info;

use efootball_board::AppState;
use efootball_board::args;
use efootball_board::controller::pages::{home, league, players};

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = args::args_checks();
    let state = AppState::from_config(args.config.clone());
    info!(
        "serving on {}:{} with backend {}",
        args.bind, args.port, args.config.api_base
    );

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(Data::new(state.clone()))
            .route("/", web::get().to(home))
            .route("/league", web::get().to(league))
            .route("/players", web::get().to(players))
            .route("/health", web::get().to(HttpResponse::Ok))
            .service(Files::new("/static", "./static"))
    })
    .bind((args.bind.as_str(), args.port))?
    .run()
    .await?;
    Ok(())
}
