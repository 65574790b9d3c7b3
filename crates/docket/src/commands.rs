//! CLI command implementations.

use color_eyre::eyre::Result;

/// Start the item store server.
pub async fn serve(host: String, port: u16) -> Result<()> {
    use docket_server::{Server, ServerConfig};

    tracing::info!("Starting docket server...");

    // IPv6 hosts need brackets to parse back into a SocketAddr.
    let addr = if host.contains(':') {
        format!("[{}]:{}", host, port)
    } else {
        format!("{}:{}", host, port)
    }
    .parse()?;
    let config = ServerConfig { addr, cors: true };

    let server = Server::new(config);
    server.run().await?;

    Ok(())
}

/// Display version information.
pub fn version() {
    println!("docket {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Components:");
    println!("  docket-core       - Item model and in-memory store");
    println!("  docket-server     - REST API surface");
    println!("  docket-telemetry  - Logging and request counters");
}
