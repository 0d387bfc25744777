// ============================================================================
// API Client : Yahoo Finance (cotations)
// ============================================================================
// Récupère un instantané de cotation pour un ticker depuis l'endpoint
// non-officiel /v7/finance/quote de Yahoo Finance
//
// CONCEPTS RUST AVANCÉS :
// 1. async/await : programmation asynchrone (non-bloquante)
// 2. Result<T, E> : gestion d'erreurs avec contexte
// 3. thiserror : erreurs typées avec message exact (vérifié par les tests)
// 4. Serde : désérialisation JSON automatique
// ============================================================================

use anyhow::{Context, Result};
use reqwest::header::{HeaderMap, HeaderValue, CONNECTION, EXPIRES, UPGRADE_INSECURE_REQUESTS, USER_AGENT};
use thiserror::Error;
use tracing::{debug, error, info, instrument};

use crate::models::{QuotePayload, QuoteResult};

// ============================================================================
// Configuration fixe (jamais modifiée après le démarrage)
// ============================================================================

/// Endpoint de cotation Yahoo Finance
///
/// Endpoint non-documenté/non-officiel : il peut rejeter les requêtes qui ne
/// ressemblent pas à un navigateur (voir browser_headers).
const QUOTE_ENDPOINT: &str = "https://query1.finance.yahoo.com/v7/finance/quote";

/// User-Agent d'un Chrome desktop
const BROWSER_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; WOW64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/54.0.2840.99 Safari/537.36";

/// En-têtes HTTP fixes imitant un navigateur desktop
///
/// Le User-Agent est indispensable : sans lui, Yahoo rejette la requête.
fn browser_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONNECTION, HeaderValue::from_static("keep-alive"));
    headers.insert(EXPIRES, HeaderValue::from_static("-1"));
    headers.insert(UPGRADE_INSECURE_REQUESTS, HeaderValue::from_static("1"));
    headers.insert(USER_AGENT, HeaderValue::from_static(BROWSER_USER_AGENT));
    headers
}

// ============================================================================
// Erreurs métier
// ============================================================================
// CONCEPT RUST : thiserror
// - #[derive(Error)] implémente std::error::Error automatiquement
// - #[error("...")] fixe le texte du Display : les tests vérifient le texte
//   exact de ces deux messages, ne pas le modifier
// ============================================================================

/// Erreurs signalées par le pipeline fetch/validate
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuoteError {
    /// L'endpoint a répondu avec un statut HTTP autre que 200
    #[error("Received status code {status} when querying for {ticker}")]
    HttpStatus { ticker: String, status: u16 },

    /// Réponse 200 mais liste de résultats vide
    #[error("No stock data found for {ticker}")]
    NoData { ticker: String },
}

// ============================================================================
// Fonctions publiques de l'API
// ============================================================================

/// Récupère les cotations d'un ticker depuis Yahoo Finance
///
/// Une seule requête GET, pas de timeout configuré, pas de retry : en cas de
/// rate limiting l'erreur remonte telle quelle.
///
/// # Arguments
/// * `ticker` - Symbole du ticker (ex: "AAPL", "TSLA")
///
/// # Retourne
/// * `Result<Vec<QuoteResult>>` - La liste `quoteResponse.result` telle
///   quelle (aucune transformation, aucun tri), ou une erreur
///
/// # Erreurs
/// * `QuoteError::HttpStatus` si le statut HTTP n'est pas 200
/// * `QuoteError::NoData` si la liste de résultats est vide
/// * Erreur générique si le corps n'est pas le JSON attendu
///
/// CONCEPT RUST : #[instrument]
/// - Macro tracing qui ajoute automatiquement un span
/// - Tous les logs à l'intérieur auront le contexte ticker
#[instrument]
pub async fn fetch_stock_quotes(ticker: &str) -> Result<Vec<QuoteResult>> {
    fetch_stock_quotes_from(QUOTE_ENDPOINT, ticker).await
}

/// Variante avec endpoint paramétrable (les tests pointent vers un serveur local)
async fn fetch_stock_quotes_from(endpoint: &str, ticker: &str) -> Result<Vec<QuoteResult>> {
    let url = build_quote_url(endpoint, ticker);
    debug!(url = %url, "Built Yahoo Finance quote URL");

    let client = reqwest::Client::builder()
        .default_headers(browser_headers())
        .build()
        .context("Échec de la création du client HTTP")?;

    debug!("Sending HTTP request to Yahoo Finance");
    let response = client
        .get(&url)
        .send()
        .await
        .context("Échec de la requête HTTP vers Yahoo Finance")?;

    let status = response.status();
    debug!(status = %status, "Received HTTP response");

    if status.as_u16() != 200 {
        error!(status = %status, "Yahoo Finance returned error status");
        return Err(QuoteError::HttpStatus {
            ticker: ticker.to_string(),
            status: status.as_u16(),
        }
        .into());
    }

    // Parse la réponse JSON
    // Un corps malformé (ou sans clé "quoteResponse"/"result") fait échouer
    // la désérialisation : l'erreur remonte sans message dédié
    debug!("Parsing JSON response");
    let payload: QuotePayload = response
        .json()
        .await
        .context("Échec du parsing JSON de la réponse Yahoo")?;

    validate_stock_quotes(ticker, &payload)?;

    let results = payload.quote_response.result;
    info!(results = results.len(), "Successfully fetched stock quotes");
    Ok(results)
}

/// Vérifie que l'API a retourné au moins un résultat
///
/// Une table vide n'est jamais un état final valide : la liste vide est
/// rejetée ici, avant d'atteindre le rendu.
pub fn validate_stock_quotes(ticker: &str, payload: &QuotePayload) -> Result<(), QuoteError> {
    if payload.quote_response.result.is_empty() {
        return Err(QuoteError::NoData {
            ticker: ticker.to_string(),
        });
    }
    Ok(())
}

/// Construit l'URL de l'endpoint de cotation
///
/// Le ticker est substitué tel quel dans le paramètre `symbols`
/// (pas d'encodage URL au-delà de ce que fait reqwest)
fn build_quote_url(endpoint: &str, ticker: &str) -> String {
    format!("{}?symbols={}", endpoint, ticker)
}

// ============================================================================
// Tests unitaires
// ============================================================================
