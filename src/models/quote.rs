// ============================================================================
// Structures : QuotePayload / QuoteResult
// ============================================================================
// Représente la réponse de l'API de cotation Yahoo Finance
//
// CONCEPTS RUST :
// 1. Serde : désérialisation JSON automatique vers des structures typées
// 2. #[serde(rename_all = "camelCase")] : mappe les noms de champs JSON
//    ("regularMarketPrice") vers les noms Rust ("regular_market_price")
// 3. Option<T> : champ qui peut être absent du JSON (type-safe, pas de null)
// ============================================================================

use serde::Deserialize;

/// Enveloppe complète de la réponse de l'endpoint /v7/finance/quote
///
/// Structure JSON attendue :
/// { "quoteResponse": { "result": [ { ... }, ... ] } }
///
/// Une clé "quoteResponse" ou "result" manquante fait échouer la
/// désérialisation serde : l'erreur remonte telle quelle, sans message dédié.
#[derive(Debug, Deserialize)]
pub struct QuotePayload {
    #[serde(rename = "quoteResponse")]
    pub quote_response: QuoteResponse,
}

/// Liste de résultats retournée par l'endpoint
///
/// L'endpoint peut retourner plusieurs résultats si le ticker correspond
/// à plusieurs instruments.
#[derive(Debug, Deserialize)]
pub struct QuoteResponse {
    pub result: Vec<QuoteResult>,
}

/// Un résultat de cotation pour un symbole
///
/// CONCEPT RUST : #[serde(default)]
/// - Si le champ est absent du JSON, le champ vaut None au lieu d'échouer
/// - L'endpoint ne garantit pas la présence de ces champs (ex: longName
///   absent pour certains symboles) : la couche fetch n'impose que la
///   non-vacuité de la liste, jamais la complétude des champs
/// - Les champs JSON supplémentaires sont ignorés par serde
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResult {
    /// Nom complet de l'instrument (ex: "Tesla, Inc.")
    #[serde(default)]
    pub long_name: Option<String>,

    /// Symbole tel qu'écho par l'endpoint (ex: "TSLA")
    #[serde(default)]
    pub symbol: Option<String>,

    /// Prix actuel de la séance
    #[serde(default)]
    pub regular_market_price: Option<f64>,

    /// Variation de la séance en pourcentage (signée)
    #[serde(default)]
    pub regular_market_change_percent: Option<f64>,
}

// ============================================================================
// Tests unitaires
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_payload() {
        let json = r#"{
            "quoteResponse": {
                "result": [{
                    "longName": "Tesla, Inc.",
                    "symbol": "TSLA",
                    "regularMarketPrice": 265.28,
                    "regularMarketChangePercent": -1.37,
                    "marketCap": 842000000000
                }]
            }
        }"#;

        let payload: QuotePayload = serde_json::from_str(json).unwrap();
        let results = &payload.quote_response.result;

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].long_name.as_deref(), Some("Tesla, Inc."));
        assert_eq!(results[0].symbol.as_deref(), Some("TSLA"));
        assert_eq!(results[0].regular_market_price, Some(265.28));
        assert_eq!(results[0].regular_market_change_percent, Some(-1.37));
    }

    #[test]
    fn test_deserialize_sparse_result() {
        // Un résultat sans aucun des champs attendus désérialise quand même :
        // tous les champs valent None
        let json = r#"{"quoteResponse": {"result": [{"foo": "bar"}]}}"#;

        let payload: QuotePayload = serde_json::from_str(json).unwrap();
        let results = &payload.quote_response.result;

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].long_name, None);
        assert_eq!(results[0].symbol, None);
        assert_eq!(results[0].regular_market_price, None);
        assert_eq!(results[0].regular_market_change_percent, None);
    }

    #[test]
    fn test_deserialize_empty_result_list() {
        let json = r#"{"quoteResponse": {"result": []}}"#;

        let payload: QuotePayload = serde_json::from_str(json).unwrap();
        assert!(payload.quote_response.result.is_empty());
    }

    #[test]
    fn test_deserialize_missing_quote_response_fails() {
        // Pas de clé "quoteResponse" : erreur serde générique
        let json = r#"{"finance": {"result": []}}"#;

        let parsed: Result<QuotePayload, _> = serde_json::from_str(json);
        assert!(parsed.is_err());
    }
}
