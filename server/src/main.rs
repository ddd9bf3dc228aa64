use clap::Parser;
use log::error;
use server::network::NetworkServer;
use server::room::MatchRoom;

/// Parses command-line arguments, then runs the WebSocket listener and
/// the match loop until either dies or Ctrl+C arrives.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Command line arguments
    #[derive(Parser, Debug)]
    #[clap(author, version, about)]
    struct Args {
        /// Server IP address to bind to
        #[clap(short = 'H', long, default_value = "127.0.0.1")]
        host: String,
        /// Server port to listen on
        #[clap(short, long, default_value = "8080")]
        port: u16,
        /// Tick rate (simulation updates per second)
        #[clap(short, long, default_value_t = shared::TICK_RATE)]
        tick_rate: u32,
    }

    env_logger::init();
    let args = Args::parse();

    let room = MatchRoom::new();

    let address = format!("{}:{}", args.host, args.port);
    let server = NetworkServer::bind(&address).await?;

    // Spawn network thread
    let server_handle = {
        let room = room.clone();
        tokio::spawn(async move {
            server.run(room).await;
        })
    };

    // Spawn game loop thread
    let game_handle = tokio::spawn(room.run(args.tick_rate));

    // Handle shutdown gracefully
    tokio::select! {
        result = server_handle => {
            if let Err(e) = result {
                error!("network task panicked: {}", e);
            }
        }
        result = game_handle => {
            if let Err(e) = result {
                error!("match loop task panicked: {}", e);
            }
        }
        _ = tokio::signal::ctrl_c() => {
            println!("Received Ctrl+C, shutting down gracefully...");
        }
    }

    Ok(())
}
