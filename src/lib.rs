// ============================================================================
// stockprice - Library
// ============================================================================
// Expose les modules publics pour le binaire et les tests
// ============================================================================

pub mod api;       // API Yahoo Finance (cotations)
pub mod models;    // Structures de données
pub mod ui;        // Affichage console
