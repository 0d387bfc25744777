// ============================================================================
// Rendu : table des cotations
// ============================================================================
// Affiche les résultats de cotation sous forme de table dans le terminal
// (caractères de boîte Unicode + couleurs crossterm)
//
// Le rendu est séparé en deux étapes testables sans terminal :
// 1. build_rows : extrait les cellules texte depuis les QuoteResult
// 2. format_table : assemble les lignes de la table (texte brut)
// L'impression colorée n'intervient qu'au moment du println!
// ============================================================================

use anyhow::{Context, Result};
use crossterm::style::Stylize;

use crate::models::QuoteResult;

/// Légende affichée sous la table
const TABLE_CAPTION: &str = "Stock price dashboard";

/// Colonnes de la table, dans l'ordre d'affichage
const COLUMNS: [&str; 4] = ["Name", "Symbol", "Price", "Change"];

/// Affiche la table des cotations sur stdout
///
/// Une ligne par résultat, dans l'ordre de la séquence d'entrée (pas de tri).
/// Les couleurs sont purement cosmétiques.
///
/// # Erreurs
/// Échoue si un résultat ne porte pas les quatre champs attendus : la couche
/// fetch ne garantit pas la complétude des champs, seulement la non-vacuité
/// de la liste.
pub fn render(results: &[QuoteResult]) -> Result<()> {
    let rows = build_rows(results)?;

    for line in format_table(&rows) {
        println!("{}", line.green());
    }
    Ok(())
}

/// Extrait les cellules texte de chaque résultat
///
/// Les champs numériques utilisent la représentation Display par défaut de
/// f64 : pas de symbole monétaire, pas de décimales fixes, pas de signe %.
fn build_rows(results: &[QuoteResult]) -> Result<Vec<[String; 4]>> {
    let mut rows = Vec::with_capacity(results.len());

    for quote in results {
        let name = quote
            .long_name
            .clone()
            .context("Champ 'longName' manquant dans le résultat")?;
        let symbol = quote
            .symbol
            .clone()
            .context("Champ 'symbol' manquant dans le résultat")?;
        let price = quote
            .regular_market_price
            .context("Champ 'regularMarketPrice' manquant dans le résultat")?;
        let change = quote
            .regular_market_change_percent
            .context("Champ 'regularMarketChangePercent' manquant dans le résultat")?;

        rows.push([name, symbol, price.to_string(), change.to_string()]);
    }

    Ok(rows)
}

/// Assemble les lignes texte de la table (sans couleur)
///
/// Structure produite :
/// - bordure haute
/// - ligne d'en-tête (Name, Symbol, Price, Change)
/// - séparateur
/// - une ligne par row, dans l'ordre d'entrée
/// - bordure basse
/// - légende centrée
fn format_table(rows: &[[String; 4]]) -> Vec<String> {
    // Largeur de chaque colonne : max entre l'en-tête et les cellules
    let mut widths: [usize; 4] = [0; 4];
    for (i, header) in COLUMNS.iter().enumerate() {
        widths[i] = header.chars().count();
    }
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let border = |left: &str, mid: &str, right: &str| -> String {
        let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
        format!("{}{}{}", left, segments.join(mid), right)
    };

    let format_row = |cells: &[String; 4]| -> String {
        let padded: Vec<String> = cells
            .iter()
            .zip(widths.iter())
            .map(|(cell, w)| format!(" {:<width$} ", cell, width = *w))
            .collect();
        format!("│{}│", padded.join("│"))
    };

    let header: [String; 4] = [
        COLUMNS[0].to_string(),
        COLUMNS[1].to_string(),
        COLUMNS[2].to_string(),
        COLUMNS[3].to_string(),
    ];

    let mut lines = Vec::with_capacity(rows.len() + 5);
    lines.push(border("┌", "┬", "┐"));
    lines.push(format_row(&header));
    lines.push(border("├", "┼", "┤"));
    for row in rows {
        lines.push(format_row(row));
    }
    lines.push(border("└", "┴", "┘"));

    // Légende centrée sous la table
    let total_width = lines[0].chars().count();
    let caption_width = TABLE_CAPTION.chars().count();
    let left_pad = total_width.saturating_sub(caption_width) / 2;
    lines.push(format!("{}{}", " ".repeat(left_pad), TABLE_CAPTION));

    lines
}

// ============================================================================
// Tests unitaires
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn quote(name: &str, symbol: &str, price: f64, change: f64) -> QuoteResult {
        QuoteResult {
            long_name: Some(name.to_string()),
            symbol: Some(symbol.to_string()),
            regular_market_price: Some(price),
            regular_market_change_percent: Some(change),
        }
    }

    #[test]
    fn test_build_rows_order_preserved() {
        let results = vec![
            quote("Tesla, Inc.", "TSLA", 265.28, -1.37),
            quote("Snowflake Inc.", "SNOW", 158.03, 2.41),
        ];

        let rows = build_rows(&results).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], ["Tesla, Inc.", "TSLA", "265.28", "-1.37"]);
        assert_eq!(rows[1], ["Snowflake Inc.", "SNOW", "158.03", "2.41"]);
    }

    #[test]
    fn test_build_rows_missing_field_fails() {
        // Résultat sans aucun champ : le rendu échoue, le fetch ne garantit
        // pas la complétude des champs
        let results = vec![QuoteResult {
            long_name: None,
            symbol: None,
            regular_market_price: None,
            regular_market_change_percent: None,
        }];

        let err = build_rows(&results).unwrap_err();
        assert!(err.to_string().contains("longName"));
    }

    #[test]
    fn test_format_table_row_count() {
        // n rows de données + structure fixe (bordures, en-tête, légende)
        let results = vec![
            quote("Tesla, Inc.", "TSLA", 265.28, -1.37),
            quote("Snowflake Inc.", "SNOW", 158.03, 2.41),
            quote("Apple Inc.", "AAPL", 189.7, 0.52),
        ];
        let rows = build_rows(&results).unwrap();

        let lines = format_table(&rows);
        assert_eq!(lines.len(), 3 + 5);

        // Les lignes de données sont dans l'ordre d'entrée
        assert!(lines[3].contains("TSLA"));
        assert!(lines[4].contains("SNOW"));
        assert!(lines[5].contains("AAPL"));
    }

    #[test]
    fn test_format_table_header_order() {
        let rows = build_rows(&[quote("Tesla, Inc.", "TSLA", 265.28, -1.37)]).unwrap();
        let lines = format_table(&rows);

        let header = &lines[1];
        let name = header.find("Name").unwrap();
        let symbol = header.find("Symbol").unwrap();
        let price = header.find("Price").unwrap();
        let change = header.find("Change").unwrap();
        assert!(name < symbol && symbol < price && price < change);
    }

    #[test]
    fn test_format_table_caption() {
        let rows = build_rows(&[quote("Tesla, Inc.", "TSLA", 265.28, -1.37)]).unwrap();
        let lines = format_table(&rows);

        assert!(lines.last().unwrap().contains(TABLE_CAPTION));
    }

    #[test]
    fn test_format_table_empty_rows() {
        // La table vide n'arrive jamais en pratique (le Validator rejette la
        // liste vide avant le rendu), mais format_table reste total
        let lines = format_table(&[]);
        assert_eq!(lines.len(), 5);
    }

    #[test]
    fn test_render_ok() {
        let results = vec![quote("Tesla, Inc.", "TSLA", 265.28, -1.37)];
        assert!(render(&results).is_ok());
    }
}
