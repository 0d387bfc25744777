// ============================================================================
// Module : models
// ============================================================================
// Ce module contient toutes les structures de données de l'application
//
// CONCEPT RUST : Modules et visibilité
// - "pub mod" : déclare un sous-module publique (accessible depuis l'extérieur)
// - Sans "pub", le module serait privé au crate
// ============================================================================

pub mod quote;  // Déclaration du module quote (fichier quote.rs)

// Re-export des structures principales pour simplifier les imports
// Au lieu de : use stockprice::models::quote::QuoteResult;
// On peut faire : use stockprice::models::QuoteResult;
pub use quote::{QuotePayload, QuoteResponse, QuoteResult};
