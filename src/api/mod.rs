// ============================================================================
// Module : api
// ============================================================================
// Ce module contient tous les clients API pour récupérer les données
// financières depuis différentes sources (Yahoo Finance, etc.)
// ============================================================================

pub mod yahoo;  // Client API Yahoo Finance (cotations)

// Re-export des fonctions principales
pub use yahoo::{fetch_stock_quotes, validate_stock_quotes, QuoteError};
