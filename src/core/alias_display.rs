// src/core/alias_display.rs

use crate::constants::TOP_MARKER;
use crate::models::{AliasTable, RankEntry};

/// Muestra la lista de alias, destacando los más usados.
pub fn display_alias_list(table: &AliasTable, ranking: &[RankEntry]) {
    print!("{}", render_alias_list(table, ranking));
}

/// Muestra solo el ranking de uso.
pub fn display_ranking(ranking: &[RankEntry]) {
    if ranking.is_empty() {
        println!("\nTodavía no hay usos registrados.");
        return;
    }
    print!("{}", render_ranking(ranking));
}

fn render_ranking(ranking: &[RankEntry]) -> String {
    let mut out = String::from("\nAlias más usados:\n");
    for (i, entry) in ranking.iter().enumerate() {
        out.push_str(&format!("  {}. {} ({})\n", i + 1, entry.name, entry.count));
    }
    out
}

pub fn render_alias_list(table: &AliasTable, ranking: &[RankEntry]) -> String {
    let mut out = String::new();
    if !ranking.is_empty() {
        out.push_str(&render_ranking(ranking));
    }

    out.push_str("\nAlias disponibles:\n");
    let width = table.iter().map(|d| d.name.chars().count()).max().unwrap_or(0);
    for definition in table.iter() {
        let is_top = ranking.iter().any(|e| e.name == definition.name);
        let marker = if is_top {
            format!(" {}", TOP_MARKER)
        } else {
            String::new()
        };
        out.push_str(&format!(
            "  {:<width$}  {}{}\n",
            definition.name,
            definition.raw,
            marker,
            width = width
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::alias_resolver::parse_alias_lines;

    #[test]
    fn top_aliases_are_marked_and_listed_first() {
        let table = parse_alias_lines(&["alias.st status", "alias.lg log --oneline"]).unwrap();
        let ranking = vec![RankEntry::new("lg", 4)];

        let out = render_alias_list(&table, &ranking);
        assert!(out.contains("Alias más usados:\n  1. lg (4)\n"));
        assert!(out.contains("  st  status\n"));
        assert!(out.contains("  lg  log --oneline (**)\n"));
    }

    #[test]
    fn no_ranking_block_without_usage() {
        let table = parse_alias_lines(&["alias.st status"]).unwrap();
        let out = render_alias_list(&table, &[]);
        assert!(!out.contains("más usados"));
        assert!(out.contains("  st  status\n"));
    }
}
