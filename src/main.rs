// ============================================================================
// stockprice - CLI
// ============================================================================
// Utilitaire one-shot : récupère une cotation pour un ticker depuis Yahoo
// Finance et l'affiche sous forme de table sur stdout
//
// Pipeline linéaire : fetch (qui valide en interne) -> render -> exit
//
// CONCEPTS RUST CLÉS :
// 1. #[tokio::main] : main async sur le runtime tokio
// 2. Clap derive : parsing des arguments CLI déclaratif
// 3. Result depuis main : erreur affichée sur stderr, code de sortie 1
// ============================================================================

use anyhow::Result;
use clap::Parser;
use crossterm::style::Stylize;
use tracing::info;

use stockprice::api::fetch_stock_quotes;
use stockprice::ui::render;

/// Affiche la cotation du jour pour un ticker boursier
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Stock ticker symbol
    #[arg(default_value = "SNOW")]
    stock_ticker: String,
}

// ============================================================================
// Initialisation du logging
// ============================================================================

/// Initialise tracing vers stderr
///
/// stdout est réservé à la table : les logs partent sur stderr.
///
/// CONCEPT : EnvFilter
/// - RUST_LOG=debug : tous les logs debug+
/// - RUST_LOG=stockprice=trace : trace pour stockprice, info pour le reste
/// - Par défaut : info pour stockprice uniquement
fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "stockprice=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

// ============================================================================
// Point d'entrée du programme
// ============================================================================
// CONCEPT RUST : Result<()> depuis main
// - Ok(()) : code de sortie 0
// - Err(e) : l'erreur est affichée sur stderr, code de sortie 1
// - Toutes les erreurs sont fatales ici : pas de retry, pas de table partielle
// ============================================================================

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();
    info!(ticker = %cli.stock_ticker, "stockprice starting up");

    println!(
        "Querying Yahoo finance API for stock ticker {}",
        cli.stock_ticker.as_str().bold().blue()
    );

    let results = fetch_stock_quotes(&cli.stock_ticker).await?;
    render(&results)?;

    info!("stockprice done");
    Ok(())
}
