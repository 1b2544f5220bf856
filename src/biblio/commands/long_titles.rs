use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::Catalog;

/// Titles that, once trimmed, have at least two words and contain only
/// letters and spaces (accented letters included). Digits and punctuation
/// disqualify a title.
pub fn run(catalog: &Catalog) -> Result<CmdResult> {
    let titles: Vec<String> = catalog
        .books()
        .iter()
        .filter_map(|b| {
            let title = b.title.trim();
            let wordy = title.split_whitespace().count() >= 2;
            let clean = title.chars().all(|c| c.is_alphabetic() || c == ' ');
            (wordy && clean).then(|| title.to_string())
        })
        .collect();

    let mut result = CmdResult::default().with_titles(titles);
    if result.titles.is_empty() {
        result.add_message(CmdMessage::info("No multi-word titles found"));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::fixtures::LibraryFixture;

    fn sample() -> Catalog {
        LibraryFixture::new()
            .with_book("Cien años de soledad", "a", 1967, "")
            .with_book("El señor de los anillos", "b", 1954, "")
            .with_book("1984", "c", 1949, "")
            .with_book("Fahrenheit 451", "d", 1953, "")
            .with_book("Duna", "e", 1965, "")
            .with_book("El túnel", "f", 1948, "")
            .with_book("Ready Player One: El Comienzo", "g", 2011, "")
            .with_book("  Mucho Espacio  ", "h", 1990, "")
            .catalog
    }

    #[test]
    fn keeps_only_clean_multi_word_titles() {
        let result = run(&sample()).unwrap();

        assert_eq!(
            result.titles,
            [
                "Cien años de soledad",
                "El señor de los anillos",
                "El túnel",
                "Mucho Espacio",
            ]
        );
    }

    #[test]
    fn excludes_titles_with_digits() {
        let result = run(&sample()).unwrap();

        assert!(!result.titles.iter().any(|t| t == "1984"));
        assert!(!result.titles.iter().any(|t| t == "Fahrenheit 451"));
    }

    #[test]
    fn excludes_single_word_titles_and_punctuation() {
        let result = run(&sample()).unwrap();

        assert!(!result.titles.iter().any(|t| t == "Duna"));
        assert!(!result.titles.iter().any(|t| t.contains(':')));
    }

    #[test]
    fn an_empty_catalog_yields_no_titles_and_a_notice() {
        let result = run(&Catalog::new()).unwrap();

        assert!(result.titles.is_empty());
        assert!(!result.messages.is_empty());
    }
}
