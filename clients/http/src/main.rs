use actix_web::{
    middleware::{self, Condition},
    web, App, HttpServer,
};
use clap::Parser;
use database::database::{database::Database, options::DatabaseOptions};
use person_service::service::PersonService;
use std::io;

mod api_error;
mod routes;

/// 👤 Person HTTP Server, CRUD and name search for people over JSON
#[derive(Parser, Debug)]
struct Cli {
    /// Directory to keep snapshots in. Data is kept in memory only when omitted. Note: Does not support shell paths, e.g. ~
    #[clap(short, long)]
    data: Option<std::path::PathBuf>,

    /// Port the http server will run on
    #[clap(short, long, default_value = "8080")]
    port: u16,

    /// Address the http server will run on
    #[clap(short, long, default_value = "0.0.0.0")]
    address: String,

    /// Log every http request
    #[clap(long)]
    log_http: bool,

    #[clap(long, default_value_t = 2)]
    http_workers: usize,
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let args = Cli::parse();

    let database_options = match args.data {
        Some(data) => DatabaseOptions::default().set_data_directory(data),
        None => DatabaseOptions::default(),
    };

    let database = Database::new(database_options).map_err(|err| {
        log::error!("Unable to start database: {}", err);
        io::Error::new(io::ErrorKind::Other, err)
    })?;

    let service = web::Data::new(PersonService::new(database));

    log::info!("starting HTTP server on {}:{}", args.address, args.port);

    let log_http = args.log_http;

    // Start HTTP server
    HttpServer::new(move || {
        App::new()
            .app_data(service.clone())
            .configure(routes::configure)
            .wrap(Condition::new(log_http, middleware::Logger::default()))
    })
    .workers(args.http_workers)
    .bind((args.address, args.port))?
    .run()
    .await
}
