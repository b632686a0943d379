//! Synthetic exchange pages for benchmarking the parsers.

use std::fmt::Write;

/// Returns an indices page with `rows` index rows.
pub fn indices_page(rows: usize) -> String {
    let mut body = String::new();
    for i in 0..rows {
        let _ = write!(
            body,
            "<tr><td>BRVM Index {i}</td><td>{} {:03},{:02}</td><td>{},{}%</td></tr>",
            1 + i % 9,
            i % 1000,
            i % 100,
            i % 5,
            i % 10
        );
    }
    page("indices-table", &body)
}

/// Returns an equities page with `rows` full eight-cell rows.
pub fn stocks_page(rows: usize) -> String {
    let mut body = String::new();
    for i in 0..rows {
        let _ = write!(
            body,
            "<tr><td>SYM{i}</td><td>Issuer {i}</td><td>CI{i:010}</td><td>{} 500</td>\
             <td>-{},5</td><td>{} 750</td><td>{} 250</td><td>{} 000</td></tr>",
            10 + i % 40,
            i % 3,
            10 + i % 40,
            10 + i % 40,
            i % 900
        );
    }
    page("stocks-table", &body)
}

/// Returns a bonds page with `rows` seven-cell rows.
pub fn bonds_page(rows: usize) -> String {
    let mut body = String::new();
    for i in 0..rows {
        let _ = write!(
            body,
            "<tr><td>BOND{i}</td><td>Issue {i}</td><td></td><td>10 000</td>\
             <td>0,00</td><td>{},{}%</td><td>15/06/20{:02}</td></tr>",
            5 + i % 3,
            i % 10,
            25 + i % 10
        );
    }
    page("bonds-table", &body)
}

fn page(class: &str, rows: &str) -> String {
    format!(
        "<html><body><div class=\"market-status\">Marché ouvert</div>\
         <table class=\"{class}\"><thead><tr><th>-</th></tr></thead>\
         <tbody>{rows}</tbody></table></body></html>"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use brvm_parse::{PageLayout, parse_bonds, parse_indices, parse_stocks};
    use chrono::NaiveDate;

    #[test]
    fn test_fixtures_parse_fully() {
        let layout = PageLayout::default();
        let date = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();

        assert_eq!(parse_indices(&indices_page(20), &layout).unwrap().len(), 20);
        let stocks = parse_stocks(&stocks_page(20), &layout, date).unwrap();
        assert_eq!(stocks.len(), 20);
        assert!(stocks.iter().all(|q| q.last_price.is_some() && q.volume.is_some()));
        assert_eq!(parse_bonds(&bonds_page(20), &layout, date).unwrap().len(), 20);
    }
}
