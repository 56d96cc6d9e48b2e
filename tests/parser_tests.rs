#[cfg(test)]
mod tests {
    use recipe_importer::parser::IngredientParser;
    use recipe_importer::tagging::LexiconTagger;
    use recipe_importer::units::{UnitTable, SINGLE_SERVING};

    fn create_tagger() -> LexiconTagger {
        LexiconTagger::from_entries(
            [
                ("flour", "NN"),
                ("sugar", "NN"),
                ("butter", "NN"),
                ("salt", "NN"),
                ("stock", "NN"),
                ("carrots", "NNS"),
                ("eggs", "NNS"),
                ("onions", "NNS"),
                ("chopped", "JJ"),
                ("fresh", "JJ"),
                ("large", "JJ"),
                ("finely", "RB"),
                ("diced", "VBN"),
                ("of", "IN"),
                ("to", "TO"),
                ("taste", "NN"),
            ]
            .map(|(word, tag)| (word.to_string(), tag.to_string())),
        )
    }

    #[test]
    fn test_no_numerals_yields_zero_quantity_and_sentinel_unit() {
        let tagger = create_tagger();
        let units = UnitTable::default();
        let parser = IngredientParser::new(&tagger, &units);

        for raw in ["fresh eggs", "salt to taste", "flour"] {
            let parsed = parser.parse(raw).unwrap();
            assert_eq!(parsed.quantity, 0.0, "quantity for {:?}", raw);
            assert_eq!(parsed.unit, SINGLE_SERVING, "unit for {:?}", raw);
        }
    }

    #[test]
    fn test_every_single_word_table_entry_canonicalizes() {
        let tagger = create_tagger();
        let units = UnitTable::default();
        let parser = IngredientParser::new(&tagger, &units);

        for (raw, canonical) in units.iter() {
            // Multi-word spellings can never match a single token; the
            // per-token lookup limitation is deliberate
            if raw.contains(' ') {
                continue;
            }
            let parsed = parser.parse(&format!("2 {}", raw)).unwrap();
            assert_eq!(parsed.unit, canonical, "unit for table entry {:?}", raw);
            assert_eq!(parsed.quantity, 2.0);
        }
    }

    #[test]
    fn test_mixed_number_accumulation() {
        let tagger = create_tagger();
        let units = UnitTable::default();
        let parser = IngredientParser::new(&tagger, &units);

        let parsed = parser.parse("2 1/2 cups flour").unwrap();
        assert_eq!(parsed.quantity, 2.5);
        assert_eq!(parsed.unit, "c");
        assert_eq!(parsed.name, "flour");
    }

    #[test]
    fn test_quantity_accumulates_across_separated_numerals() {
        let tagger = create_tagger();
        let units = UnitTable::default();
        let parser = IngredientParser::new(&tagger, &units);

        let parsed = parser.parse("1 1/4 1/4 cups sugar").unwrap();
        assert_eq!(parsed.quantity, 1.5);
    }

    #[test]
    fn test_descriptive_tokens_are_details_in_order() {
        let tagger = create_tagger();
        let units = UnitTable::default();
        let parser = IngredientParser::new(&tagger, &units);

        let parsed = parser.parse("2 cups finely chopped fresh carrots").unwrap();
        assert_eq!(parsed.name, "carrots");
        assert_eq!(parsed.details, vec!["finely", "chopped", "fresh"]);
    }

    #[test]
    fn test_unknown_words_are_details_not_dropped() {
        let tagger = create_tagger();
        let units = UnitTable::default();
        let parser = IngredientParser::new(&tagger, &units);

        let parsed = parser.parse("2 cups zorblat flour").unwrap();
        assert_eq!(parsed.name, "flour");
        assert_eq!(parsed.details, vec!["zorblat"]);
    }

    #[test]
    fn test_parsing_is_pure() {
        let tagger = create_tagger();
        let units = UnitTable::default();
        let parser = IngredientParser::new(&tagger, &units);

        let raw = "2 1/2 cups finely chopped carrots";
        let first = parser.parse(raw).unwrap();
        let second = parser.parse(raw).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_unit_word_with_unexpected_tag_still_canonicalizes() {
        // "cups" deliberately tagged as an adjective; the raw-text table
        // lookup wins independent of the tag
        let tagger = LexiconTagger::from_entries([
            ("cups".to_string(), "JJ".to_string()),
            ("flour".to_string(), "NN".to_string()),
        ]);
        let units = UnitTable::default();
        let parser = IngredientParser::new(&tagger, &units);

        let parsed = parser.parse("2 cups flour").unwrap();
        assert_eq!(parsed.unit, "c");
        assert_eq!(parsed.name, "flour");
        assert!(parsed.details.is_empty());
    }

    #[test]
    fn test_later_unit_token_overwrites_earlier() {
        let tagger = create_tagger();
        let units = UnitTable::default();
        let parser = IngredientParser::new(&tagger, &units);

        let parsed = parser.parse("2 cups grams flour").unwrap();
        assert_eq!(parsed.unit, "g");
    }

    #[test]
    fn test_decimal_token_is_name_text_not_quantity() {
        let tagger = create_tagger();
        let units = UnitTable::default();
        let parser = IngredientParser::new(&tagger, &units);

        // Only pure-digit and fraction tokens contribute to the quantity
        let parsed = parser.parse("2.5 cups flour").unwrap();
        assert_eq!(parsed.quantity, 0.0);
        assert_eq!(parsed.name, "2.5 flour");
        assert_eq!(parsed.unit, "c");
    }

    #[test]
    fn test_punctuation_lands_in_details() {
        let tagger = create_tagger();
        let units = UnitTable::default();
        let parser = IngredientParser::new(&tagger, &units);

        let parsed = parser.parse("2 cups carrots, chopped").unwrap();
        assert_eq!(parsed.name, "carrots");
        assert_eq!(parsed.details, vec![",", "chopped"]);
    }
}
