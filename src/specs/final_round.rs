// src/specs/final_round.rs
//! The final clue (`.final_round`): one category, one prompt, and a response
//! table with two markup rows per contestant (name + response, then wager).

use scraper::{ElementRef, Html};

use crate::core::html::{parse_fragment, require, select_one, text_of};
use crate::core::sanitize::parse_amount;
use crate::error::ParseError;
use crate::specs::response;
use crate::types::{FinalAttempt, FinalClue};

pub fn extract(doc: &Html) -> Result<FinalClue, ParseError> {
    // A tiebreaker is a second `.final_round`; only the first is the final clue.
    let container = require(doc.root_element(), selector!(".final_round"), "final round")?;

    let category = text_of(require(container, selector!(".category_name"), "final category")?);
    let prompt = response::prompt_of(container).ok_or(ParseError::Missing("final clue text"))?;

    let markup = response::fragment_of(container).ok_or(ParseError::Missing("final response fragment"))?;
    let frag = parse_fragment(&markup);
    let root = frag.root_element();

    let correct_response = select_one(root, selector!(".correct_response"))
        .or_else(|| root.select(selector!("em")).last())
        .map(text_of)
        .ok_or(ParseError::Missing("final correct response"))?;

    let right: Vec<String> = root.select(selector!(".right")).map(text_of).collect();
    let attempts = read_response_table(root, &right)?;
    if attempts.is_empty() {
        logw!("Final round: no contestant rows in response table");
    }

    let was_triple_stumper = !attempts.iter().any(|a| a.was_correct);

    Ok(FinalClue {
        category,
        prompt,
        correct_response,
        was_triple_stumper,
        attempts,
    })
}

/* ---- helpers ---- */

/// Row pairs → one attempt each. A dangling last row without a wager row is dropped.
fn read_response_table(root: ElementRef<'_>, right: &[String]) -> Result<Vec<FinalAttempt>, ParseError> {
    let rows: Vec<Vec<String>> = root
        .select(selector!("tr"))
        .map(|tr| tr.select(selector!("td")).map(text_of).collect())
        .collect();

    if rows.len() % 2 == 1 {
        logw!("Final round: odd number of response rows ({}); last one ignored", rows.len());
    }

    let mut out = Vec::with_capacity(rows.len() / 2);
    for pair in rows.chunks_exact(2) {
        let (head, tail) = (&pair[0], &pair[1]);
        let responder = head.first().cloned().ok_or(ParseError::Missing("final responder"))?;
        let response = head.get(1).cloned().unwrap_or_default();
        let wager = match tail.last().map(String::as_str).unwrap_or("") {
            "" => None,
            txt => Some(parse_amount(txt).ok_or_else(|| ParseError::malformed("final wager", txt))?),
        };
        let was_correct = right.iter().any(|r| *r == responder);
        out.push(FinalAttempt { responder, response, wager, was_correct });
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(fragment_rows: &str, em: &str) -> String {
        format!(
            r#"<html><body><div id="final_jeopardy_round"><table class="final_round">
                 <tr><td class="category"><table><tr><td class="category_name">WORLD CAPITALS</td></tr></table></td></tr>
                 <tr><td class="clue"><table>
                   <tr><td id="clue_FJ" class="clue_text">Its name means "good airs"</td></tr>
                   <tr><td id="clue_FJ_r" class="clue_text" style="display:none;"><table>{fragment_rows}</table>{em}</td></tr>
                 </table></td></tr>
               </table></div></body></html>"#
        )
    }

    const ROWS: &str = r#"
        <tr><td class="right">Jerome</td><td>What is Buenos Aires?</td></tr><tr><td>$1,500</td></tr>
        <tr><td class="wrong">Jenny</td><td>What is Lima?</td></tr><tr><td>$0</td></tr>
        <tr><td class="right">Amy</td><td>Buenos Aires</td></tr><tr><td>$2,000</td></tr>"#;

    #[test]
    fn reads_pairs_and_outcomes() {
        let doc = Html::parse_document(&page(ROWS, r#"<em class="correct_response">Buenos Aires</em>"#));
        let fj = extract(&doc).unwrap();
        assert_eq!(fj.category, "WORLD CAPITALS");
        assert_eq!(fj.prompt, "Its name means \"good airs\"");
        assert_eq!(fj.correct_response, "Buenos Aires");
        assert!(!fj.was_triple_stumper);
        assert_eq!(fj.attempts.len(), 3);
        assert_eq!(
            fj.attempts[0],
            FinalAttempt { responder: s!("Jerome"), response: s!("What is Buenos Aires?"), wager: Some(1500), was_correct: true }
        );
        assert_eq!(fj.attempts[1].wager, Some(0));
        assert!(!fj.attempts[1].was_correct);
        assert!(fj.attempts[2].was_correct);
    }

    #[test]
    fn nobody_right_is_triple_stumper() {
        let rows = ROWS.replace("class=\"right\"", "class=\"wrong\"");
        let doc = Html::parse_document(&page(&rows, "<em>Buenos Aires</em>"));
        let fj = extract(&doc).unwrap();
        assert!(fj.was_triple_stumper);
        assert!(fj.attempts.iter().all(|a| !a.was_correct));
        // falls back to the last <em>
        assert_eq!(fj.correct_response, "Buenos Aires");
    }

    #[test]
    fn blank_wager_is_none() {
        let rows = r#"<tr><td class="wrong">Jenny</td><td>?</td></tr><tr><td> </td></tr>"#;
        let doc = Html::parse_document(&page(rows, "<em>x</em>"));
        let fj = extract(&doc).unwrap();
        assert_eq!(fj.attempts[0].wager, None);
    }

    #[test]
    fn stuck_placeholder_is_not_the_prompt() {
        let html = page(ROWS, "<em>Buenos Aires</em>").replace(
            r#"<tr><td id="clue_FJ" class="clue_text">"#,
            r#"<tr><td id="clue_FJ_stuck" class="clue_text">stuck</td></tr><tr><td id="clue_FJ" class="clue_text">"#,
        );
        let fj = extract(&Html::parse_document(&html)).unwrap();
        assert_eq!(fj.prompt, "Its name means \"good airs\"");
    }

    #[test]
    fn missing_container_fails() {
        let doc = Html::parse_document("<p>no final</p>");
        assert_eq!(extract(&doc).unwrap_err(), ParseError::Missing("final round"));
    }
}
