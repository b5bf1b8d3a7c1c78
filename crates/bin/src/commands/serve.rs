//! Serve command - runs the widgets HTTP server.

use std::sync::Arc;

use tokio::signal::unix::{SignalKind, signal};

use widgets::{InMemoryWidgetStore, WidgetService, api};

use crate::cli::ServeArgs;

/// Run the widgets server
pub async fn run(args: &ServeArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = args.api_config();
    if config.default_page_size == 0 || config.default_page_size > config.max_page_size {
        return Err(format!(
            "default page size {} must be between 1 and the max page size {}",
            config.default_page_size, config.max_page_size
        )
        .into());
    }

    let store = Arc::new(InMemoryWidgetStore::new());
    let service = Arc::new(WidgetService::new(store));
    let app = api::router(service.clone(), config);

    // Bind server
    let addr = format!("{}:{}", args.host, args.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    let local_addr = listener.local_addr()?;
    tracing::info!(%local_addr, ?config, "widgets server listening");

    println!("Widgets server started on http://{local_addr}");
    println!();
    println!("Available endpoints:");
    println!("  POST   /widgets       - Create a widget");
    println!("  GET    /widgets       - List widgets by Z (page, size, leftX, rightX, lowerY, higherY)");
    println!("  GET    /widgets/{{id}}  - Fetch a widget");
    println!("  PUT    /widgets/{{id}}  - Replace a widget");
    println!("  DELETE /widgets/{{id}}  - Delete a widget");
    println!("  GET    /health        - Health check");
    println!();
    println!("Press Ctrl+C to shutdown");

    let mut sigterm = signal(SignalKind::terminate())?;
    let mut sigint = signal(SignalKind::interrupt())?;

    // Start server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            tokio::select! {
                _ = sigterm.recv() => tracing::info!("Received SIGTERM, initiating graceful shutdown..."),
                _ = sigint.recv() => tracing::info!("Received SIGINT, initiating graceful shutdown..."),
            }
        })
        .await?;

    tracing::info!(widgets = service.count(), "server stopped");
    println!("Server shut down");
    Ok(())
}
