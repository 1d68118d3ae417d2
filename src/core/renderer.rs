use crate::domain::model::Card;

const DOC_HEAD: &str = r#"<!DOCTYPE html>
<html>
<head>
	<title>Meeting BINGO</title>
	<style>
	body {align: center; background-color: #FFFFFF; font-weight: 400; font-family: "Open Sans", "HelveticaNeue", "Helvetica Neue", Helvetica, Arial, sans-serif;}
	h1   {color: black; text-align: center;}
	table {align: center; margin: 0 auto; border: 3px solid #003333; width: 80%; text-align: center; border-radius: 10px}
	tr {height: 150px;}
	td {border: 5px solid #006666; width: 150px; vertical-align: center; border-radius: 10px;}
	</style>
</head>
<body>"#;

/// Renders a card as a self-contained HTML document: fixed head/style block,
/// an `<h1>` carrying the recipient title, then one `<tr>` per card row with
/// one `<td>` per cell. Output is deterministic for a given card and title.
/// Entry text is escaped; uploaded entries are untrusted.
pub fn render_html(card: &Card, title: &str) -> String {
    let mut html = String::from(DOC_HEAD);
    html.push('\n');
    html.push_str(&format!("<h1>Meeting BINGO: {}</h1>\n", escape(title)));
    html.push_str("<table>\n");
    for row in card.rows() {
        html.push_str("\t<tr>\n");
        for cell in row {
            html.push_str("\t\t<td>");
            html.push_str(&escape(cell));
            html.push_str("</td>\n");
        }
        html.push_str("\t</tr>\n");
    }
    html.push_str("</table>\n");
    html.push_str("</body></html>\n");
    html
}

/// Structured counterpart of [`render_html`] for UI display: the same card as
/// rows of cell texts, cell-for-cell consistent with the HTML table.
pub fn preview_rows(card: &Card) -> Vec<Vec<String>> {
    card.rows().map(<[String]>::to_vec).collect()
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::GridSpec;

    fn card(rows: usize, cols: usize) -> Card {
        let grid = GridSpec::new(rows, cols).unwrap();
        let cells = (1..=grid.capacity()).map(|i| format!("E{}", i)).collect();
        Card::from_cells(grid, cells)
    }

    #[test]
    fn test_render_is_deterministic() {
        let card = card(4, 4);
        assert_eq!(render_html(&card, "alice"), render_html(&card, "alice"));
    }

    #[test]
    fn test_render_has_one_tr_per_row_and_td_per_cell() {
        let html = render_html(&card(4, 4), "alice");
        assert_eq!(html.matches("<tr>").count(), 4);
        assert_eq!(html.matches("</tr>").count(), 4);
        assert_eq!(html.matches("<td>").count(), 16);
        assert_eq!(html.matches("</td>").count(), 16);
    }

    #[test]
    fn test_render_closes_first_row() {
        // A single-row card still produces a complete <tr>...</tr> block.
        let html = render_html(&card(1, 3), "alice");
        assert_eq!(html.matches("<tr>").count(), 1);
        assert_eq!(html.matches("</tr>").count(), 1);
        assert!(html.find("</tr>").unwrap() > html.find("<td>").unwrap());
    }

    #[test]
    fn test_render_title_and_cells_appear_in_order() {
        let card = card(2, 2);
        let html = render_html(&card, "bob");

        assert!(html.contains("<h1>Meeting BINGO: bob</h1>"));
        let mut last = 0;
        for row in card.rows() {
            for cell in row {
                let needle = format!("<td>{}</td>", cell);
                let pos = html[last..].find(&needle).expect("cell missing") + last;
                last = pos;
            }
        }
    }

    #[test]
    fn test_render_escapes_markup_in_entries() {
        let grid = GridSpec::new(1, 1).unwrap();
        let card = Card::from_cells(grid, vec!["<script>alert('x')</script>".to_string()]);

        let html = render_html(&card, "a&b");

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"));
        assert!(html.contains("Meeting BINGO: a&amp;b"));
    }

    #[test]
    fn test_preview_rows_match_card_cells() {
        let card = card(3, 2);
        let preview = preview_rows(&card);

        assert_eq!(preview.len(), 3);
        for (r, row) in preview.iter().enumerate() {
            assert_eq!(row.len(), 2);
            for (c, cell) in row.iter().enumerate() {
                assert_eq!(cell, card.cell(r, c));
            }
        }
    }
}
