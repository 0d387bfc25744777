// ============================================================================
// Module : ui
// ============================================================================
// Gère tout l'affichage console (table des cotations)
// ============================================================================

pub mod table;  // Rendu de la table des cotations

// Re-exports pour simplifier les imports
pub use table::render;
