use clap::{Parser, Subcommand};

mod server;
mod submit;

#[derive(Parser, Debug)]
#[command(name = "fortified", about = "Inquiry service of Fortified Developments")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Server {},

    Submit {
        #[arg(long = "name")]
        name: String,

        #[arg(long = "phone")]
        phone: String,

        #[arg(long = "service")]
        service: String,

        #[arg(long = "message")]
        message: String,

        /// Base address of a remote inquiry store. Falls back to INQUIRY_STORE_URL.
        #[arg(long = "store")]
        store: Option<String>,

        #[arg(long = "skip-store", default_value_t = false)]
        skip_store: bool,
    },
}

#[actix_rt::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Server {} => Ok(server::run().await?),

        Commands::Submit {
            name,
            phone,
            service,
            message,
            store,
            skip_store,
        } => {
            submit::run(
                submit::Args {
                    name,
                    phone,
                    service,
                    message,
                },
                store,
                skip_store,
            )
            .await
        }
    }
}
