// src/specs/board.rs
//! Regular-round boards (`table.round`).
//!
//! The page lays clue cells out as a grid, one table row per depth, so the
//! cells arrive row-major. Everything downstream works in traversal order
//! (category-major, depth-minor), so the grid is transposed here and its
//! shape is checked before anyone indexes into it.

use scraper::{ElementRef, Html};

use crate::config::consts::{CATEGORIES_PER_ROUND, CLUES_PER_CATEGORY, CLUES_PER_ROUND};
use crate::core::html::text_of;
use crate::error::ParseError;
use crate::specs::clue;
use crate::types::ClueCell;

/// Regular rounds a page can carry.
const MAX_ROUNDS: usize = 2;

/// One round as read off the page, before coordinates and values are inferred.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    /// 1 or 2
    pub index: u8,
    pub categories: Vec<String>,
    /// Traversal order.
    pub cells: Vec<ClueCell>,
}

/// All regular-round boards of a page, round 1 first.
pub fn extract_rounds(doc: &Html) -> Result<Vec<Board>, ParseError> {
    let tables: Vec<ElementRef<'_>> = doc.select(selector!("table.round")).collect();
    if tables.is_empty() {
        return Err(ParseError::Missing("round board"));
    }
    if tables.len() > MAX_ROUNDS {
        logw!("Board: {} round tables on page; reading the first {}", tables.len(), MAX_ROUNDS);
    }

    tables
        .into_iter()
        .take(MAX_ROUNDS)
        .zip(1u8..)
        .map(|(table, index)| extract(table, index))
        .collect()
}

/// Read one `table.round`: 6 categories, 30 cells in traversal order.
pub fn extract(table: ElementRef<'_>, index: u8) -> Result<Board, ParseError> {
    let categories: Vec<String> = table
        .select(selector!(".category_name"))
        .map(text_of)
        .collect();
    if categories.len() != CATEGORIES_PER_ROUND {
        return Err(ParseError::BoardShape {
            round: index,
            what: "categories",
            expected: CATEGORIES_PER_ROUND,
            found: categories.len(),
        });
    }

    let grid: Vec<ElementRef<'_>> = table.select(selector!("td.clue")).collect();
    if grid.len() != CLUES_PER_ROUND {
        return Err(ParseError::BoardShape {
            round: index,
            what: "clue cells",
            expected: CLUES_PER_ROUND,
            found: grid.len(),
        });
    }

    let cells = (0..CLUES_PER_ROUND)
        .map(|t| clue::extract(grid[grid_index(t)]))
        .collect::<Result<Vec<_>, _>>()?;

    logd!(
        "Board: round {} read, {} of {} clues revealed",
        index,
        cells.iter().filter(|c| c.was_revealed).count(),
        CLUES_PER_ROUND
    );

    Ok(Board { index, categories, cells })
}

/* ---- helpers ---- */

/// Traversal position → position in the row-major markup grid.
fn grid_index(traversal: usize) -> usize {
    let category = traversal / CLUES_PER_CATEGORY;
    let row = traversal % CLUES_PER_CATEGORY;
    row * CATEGORIES_PER_ROUND + category
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// A 6x5 board where every cell is a revealed $-value clue whose prompt
    /// names its grid position ("c{cat}r{row}"); `blank` cells are left empty.
    pub(crate) fn board_markup(round: u8, blank: &[(usize, usize)]) -> String {
        let mut html = s!("<table class=\"round\"><tr>");
        for c in 1..=6 {
            html.push_str(&format!("<td class=\"category\"><table><tr><td class=\"category_name\">CAT {c}</td></tr></table></td>"));
        }
        html.push_str("</tr>");
        let mut order = 0;
        for r in 1..=5 {
            html.push_str("<tr>");
            for c in 1..=6 {
                if blank.contains(&(c, r)) {
                    html.push_str("<td class=\"clue\"></td>");
                    continue;
                }
                order += 1;
                let value = 100 * r as u32 * round as u32;
                html.push_str(&format!(
                    r#"<td class="clue"><table><tr><td><div onmouseover="toggle('a', 'b', '<em class=\&quot;correct_response\&quot;>r{c}{r}</em>')">
                       <table><tr><td class="clue_value">${value}</td>
                       <td class="clue_order_number"><a href="suggestcorrection.php?clue_id={id}">{order}</a></td></tr></table></div></td></tr>
                       <tr><td id="clue_x" class="clue_text">c{c}r{r}</td></tr></table></td>"#,
                    id = 1000 * round as u32 + (c * 10 + r) as u32,
                ));
            }
            html.push_str("</tr>");
        }
        html.push_str("</table>");
        html
    }

    #[test]
    fn transposes_to_category_major() {
        let doc = Html::parse_document(&board_markup(1, &[]));
        let boards = extract_rounds(&doc).unwrap();
        assert_eq!(boards.len(), 1);
        let b = &boards[0];
        assert_eq!(b.index, 1);
        assert_eq!(b.categories, (1..=6).map(|c| format!("CAT {c}")).collect::<Vec<_>>());
        assert_eq!(b.cells.len(), 30);
        for (t, cell) in b.cells.iter().enumerate() {
            let (cat, row) = (t / 5 + 1, t % 5 + 1);
            assert_eq!(cell.prompt, format!("c{cat}r{row}"));
            assert_eq!(cell.value, Some(100 * row as u32));
        }
    }

    #[test]
    fn two_rounds_in_document_order() {
        let page = format!("<html><body>{}{}</body></html>", board_markup(1, &[]), board_markup(2, &[(3, 4)]));
        let doc = Html::parse_document(&page);
        let boards = extract_rounds(&doc).unwrap();
        assert_eq!(boards.iter().map(|b| b.index).collect::<Vec<_>>(), vec![1, 2]);
        let hole = &boards[1].cells[2 * 5 + 3];
        assert!(!hole.was_revealed);
        assert_eq!(boards[1].cells[0].value, Some(200));
    }

    #[test]
    fn wrong_category_count_is_shape_error() {
        let markup = board_markup(1, &[]).replacen("class=\"category_name\"", "class=\"gone\"", 1);
        let doc = Html::parse_document(&markup);
        assert_eq!(
            extract_rounds(&doc).unwrap_err(),
            ParseError::BoardShape { round: 1, what: "categories", expected: 6, found: 5 }
        );
    }

    #[test]
    fn wrong_cell_count_is_shape_error() {
        let markup = board_markup(1, &[]).replacen("<td class=\"clue\">", "<td class=\"not_clue\">", 1);
        let doc = Html::parse_document(&markup);
        assert!(matches!(
            extract_rounds(&doc).unwrap_err(),
            ParseError::BoardShape { what: "clue cells", found: 29, .. }
        ));
    }

    #[test]
    fn no_board_is_parse_error() {
        let doc = Html::parse_document("<p>nothing</p>");
        assert_eq!(extract_rounds(&doc).unwrap_err(), ParseError::Missing("round board"));
    }
}
